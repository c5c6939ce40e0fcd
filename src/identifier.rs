//! Identifier normalization for in-code names.
//!
//! Turns namespaced identifiers such as `minecraft:oak_log` into the
//! upper-case tokens used by generated enums (`OAK_LOG`, `ENTITY_OAK_LOG`).

use crate::error::{DataGenError, Result};

/// Namespace of every vanilla identifier.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Strips a namespace and applies an optional prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    namespace_prefix: String,
    prefix: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            namespace_prefix: format!("{}:", DEFAULT_NAMESPACE),
            prefix: String::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace_prefix = format!("{}:", namespace);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Normalize one identifier.
    pub fn normalize(&self, identifier: &str) -> Result<String> {
        let path = identifier
            .strip_prefix(&self.namespace_prefix)
            .ok_or_else(|| DataGenError::MalformedIdentifier {
                identifier: identifier.to_string(),
                expected_prefix: self.namespace_prefix.clone(),
            })?;
        Ok(format!("{}{}", self.prefix, to_upper_token(path)))
    }
}

/// Normalize a `minecraft:` identifier, optionally prepending `prefix`.
pub fn normalize(identifier: &str, prefix: Option<&str>) -> Result<String> {
    Normalizer::new()
        .with_prefix(prefix.unwrap_or_default())
        .normalize(identifier)
}

/// Upper-case a path. Underscores, digits and punctuation are kept as they
/// are, so distinct paths always give distinct tokens.
pub fn to_upper_token(path: &str) -> String {
    path.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_without_prefix() {
        assert_eq!(normalize("minecraft:oak_log", None).unwrap(), "OAK_LOG");
    }

    #[test]
    fn test_normalize_with_prefix() {
        assert_eq!(
            normalize("minecraft:oak_log", Some("ENTITY_")).unwrap(),
            "ENTITY_OAK_LOG"
        );
    }

    #[test]
    fn test_digits_stay_in_place() {
        assert_eq!(to_upper_token("music_disc_11"), "MUSIC_DISC_11");
        assert_eq!(to_upper_token("potion2"), "POTION2");
    }

    #[test]
    fn test_underscores_are_kept() {
        assert_eq!(normalize("minecraft:a__b", None).unwrap(), "A__B");
        assert_eq!(normalize("minecraft:_x", None).unwrap(), "_X");
        assert_ne!(to_upper_token("a__b"), to_upper_token("a_b"));
    }

    #[test]
    fn test_missing_namespace_is_malformed() {
        match normalize("oak_log", None) {
            Err(DataGenError::MalformedIdentifier {
                identifier,
                expected_prefix,
            }) => {
                assert_eq!(identifier, "oak_log");
                assert_eq!(expected_prefix, "minecraft:");
            }
            other => panic!("expected MalformedIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_namespace() {
        let normalizer = Normalizer::new().with_namespace("mymod").with_prefix("ITEM_");

        assert_eq!(normalizer.normalize("mymod:copper_gear").unwrap(), "ITEM_COPPER_GEAR");
        assert!(normalizer.normalize("minecraft:copper_gear").is_err());
    }
}
