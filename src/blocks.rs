//! Block state definitions.

/// A block-state property and its legal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockProperty {
    pub name: String,
    pub values: Vec<String>,
}

/// A block, its state properties and its default state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockDefinition {
    pub name: String,
    pub properties: Vec<BlockProperty>,
    /// Property values of the default state, in property declaration order.
    /// `None` for blocks without properties or without a default state.
    pub default_values: Option<Vec<String>>,
}

impl BlockDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Number of distinct block states this block has.
    pub fn state_count(&self) -> usize {
        self.properties
            .iter()
            .map(|property| property.values.len())
            .product()
    }
}
