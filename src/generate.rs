//! One entry point per output format.
//!
//! Each function loads its report, runs the transform and returns the
//! complete output. Nothing is returned on error, so callers never write a
//! partial file.

use crate::error::Result;
use crate::identifier::Normalizer;
use crate::loader::{self, TagLoadOptions};
use crate::output;
use crate::tags::{self, ResolveOptions};
use std::path::Path;

/// Registry listed by [`entity_names`].
pub const ENTITY_TYPE_REGISTRY: &str = "entity_type";

/// Prefix of every entity-name token.
pub const ENTITY_PREFIX: &str = "ENTITY_";

/// Block states: `key`, `property` and `default_values` lines per block.
pub fn block_states(blocks_json: &Path) -> Result<Vec<String>> {
    let blocks = loader::load_blocks(blocks_json)?;
    let states: usize = blocks.iter().map(|block| block.state_count()).sum();
    tracing::info!(blocks = blocks.len(), states, "converted block states");
    Ok(output::block_records(&blocks))
}

/// The keys of one registry, in report order.
pub fn registry_keys(registries_json: &Path, registry: &str) -> Result<Vec<String>> {
    let registries = loader::load_registries(registries_json)?;
    let registry = registries.get(registry)?;
    tracing::info!(registry = %registry.name, entries = registry.entries.len(), "listed registry keys");
    Ok(output::key_records(registry.keys()))
}

/// In-code names of one registry's entries, in protocol id order.
pub fn registry_names(registries_json: &Path, registry: &str, prefix: &str) -> Result<Vec<String>> {
    let registries = loader::load_registries(registries_json)?;
    let registry = registries.get(registry)?;
    let normalizer = Normalizer::new().with_prefix(prefix);

    let tokens = registry
        .ordered()?
        .iter()
        .map(|name| normalizer.normalize(name))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(registry = %registry.name, entries = tokens.len(), "generated registry names");
    Ok(output::token_list(&tokens))
}

/// In-code names of entity types, in report order.
pub fn entity_names(registries_json: &Path) -> Result<Vec<String>> {
    let registries = loader::load_registries(registries_json)?;
    let registry = registries.get(ENTITY_TYPE_REGISTRY)?;
    let normalizer = Normalizer::new().with_prefix(ENTITY_PREFIX);

    let tokens = registry
        .keys()
        .map(|name| normalizer.normalize(name))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(entities = tokens.len(), "generated entity names");
    Ok(output::token_list(&tokens))
}

/// Every tag below `tags_dir`, fully resolved.
pub fn resolved_tags(
    tags_dir: &Path,
    load: &TagLoadOptions,
    resolve: ResolveOptions,
) -> Result<Vec<String>> {
    let tag_set = loader::load_tags(tags_dir, load)?;
    if tag_set.is_empty() {
        tracing::warn!(dir = %tags_dir.display(), "no tag files found");
    }
    let resolved = tags::resolve_with(&tag_set, resolve)?;
    let values: usize = resolved.values().map(Vec::len).sum();
    tracing::info!(tags = resolved.len(), values, "resolved tags");
    Ok(output::tag_records(&resolved))
}
