//! Registries and protocol-id ordering.
//!
//! A registry report lists its entries in an arbitrary order, each carrying a
//! `protocol_id`. Code generators need the entries indexed by that id, so the
//! orderer places every entry at its position in a fixed-size buffer.

use crate::error::{DataGenError, Result};

/// A registry entry and its protocol-visible position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub name: String,
    pub position: i64,
}

impl RegistryEntry {
    pub fn new(name: impl Into<String>, position: i64) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// A named registry with its entries in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    pub name: String,
    pub entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Entry names in report order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Entry names ordered by position. See [`order`].
    pub fn ordered(&self) -> Result<Vec<String>> {
        order(&self.entries).inspect_err(|err| {
            tracing::debug!(registry = %self.name, error = %err, "registry ordering failed");
        })
    }
}

/// Order entry names by ascending position.
///
/// Positions must form a dense permutation of `0..entries.len()`; index `i` of
/// the result holds the entry whose position is `i`.
pub fn order(entries: &[RegistryEntry]) -> Result<Vec<String>> {
    let len = entries.len();
    let mut slots: Vec<Option<&str>> = vec![None; len];

    for entry in entries {
        let index = usize::try_from(entry.position)
            .ok()
            .filter(|index| *index < len)
            .ok_or_else(|| DataGenError::PositionOutOfRange {
                name: entry.name.clone(),
                position: entry.position,
                len,
            })?;

        if let Some(first) = slots[index] {
            return Err(DataGenError::DuplicatePosition {
                position: index,
                first: first.to_string(),
                second: entry.name.clone(),
            });
        }
        slots[index] = Some(entry.name.as_str());
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(position, slot)| {
            slot.map(str::to_string)
                .ok_or(DataGenError::MissingPosition { position })
        })
        .collect()
}
