//! JSON report loading.
//!
//! Decodes the data generator's reports into the crate's typed records:
//!
//! - `reports/blocks.json` into [`BlockDefinition`]s
//! - `reports/registries.json` into [`Registry`] lookups
//! - a `data/<namespace>/tags/<kind>` directory into a [`TagSet`]
//!
//! Report key order is preserved everywhere, since output order follows it.

use crate::blocks::{BlockDefinition, BlockProperty};
use crate::error::{DataGenError, Result};
use crate::identifier::DEFAULT_NAMESPACE;
use crate::registry::{Registry, RegistryEntry};
use crate::tags::{TagDefinition, TagEntry, TagSet};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct RawBlock {
    #[serde(default)]
    properties: IndexMap<String, Vec<String>>,
    #[serde(default)]
    states: Vec<RawBlockState>,
}

#[derive(Debug, Deserialize)]
struct RawBlockState {
    #[serde(default)]
    default: bool,
    #[serde(default)]
    properties: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RawRegistry {
    #[serde(default)]
    entries: IndexMap<String, RawRegistryEntry>,
}

#[derive(Debug, Deserialize)]
struct RawRegistryEntry {
    protocol_id: i64,
}

#[derive(Debug, Deserialize)]
struct RawTag {
    values: Vec<RawTagValue>,
}

/// Tag values are plain strings, or objects carrying the string as `id`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTagValue {
    Plain(String),
    Object { id: String },
}

impl RawTagValue {
    fn into_entry(self) -> TagEntry {
        match self {
            RawTagValue::Plain(raw) | RawTagValue::Object { id: raw } => TagEntry::parse(&raw),
        }
    }
}

/// Read and decode one JSON file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(DataGenError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| DataGenError::Parse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Load every block of a `blocks.json` report, in report order.
pub fn load_blocks<P: AsRef<Path>>(path: P) -> Result<Vec<BlockDefinition>> {
    let path = path.as_ref();
    let raw: IndexMap<String, RawBlock> = read_json(path)?;

    let blocks: Vec<BlockDefinition> = raw
        .into_iter()
        .map(|(name, block)| block_definition(name, block))
        .collect();

    tracing::debug!(path = %path.display(), blocks = blocks.len(), "loaded block report");
    Ok(blocks)
}

fn block_definition(name: String, raw: RawBlock) -> BlockDefinition {
    let default_values = if raw.properties.is_empty() {
        None
    } else {
        raw.states
            .into_iter()
            .find(|state| state.default)
            .map(|state| state.properties.into_values().collect())
    };

    let properties = raw
        .properties
        .into_iter()
        .map(|(name, values)| BlockProperty { name, values })
        .collect();

    BlockDefinition {
        name,
        properties,
        default_values,
    }
}

/// Every registry of a `registries.json` report, keyed by namespaced name.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    registries: IndexMap<String, Registry>,
}

impl Registries {
    /// Look a registry up by name. A bare name (`block`) gets the default
    /// namespace.
    pub fn get(&self, name: &str) -> Result<&Registry> {
        let qualified = if name.contains(':') {
            name.to_string()
        } else {
            format!("{}:{}", DEFAULT_NAMESPACE, name)
        };
        self.registries
            .get(&qualified)
            .ok_or(DataGenError::UnknownRegistry { name: qualified })
    }
}

/// Load a `registries.json` report.
pub fn load_registries<P: AsRef<Path>>(path: P) -> Result<Registries> {
    let path = path.as_ref();
    let raw: IndexMap<String, RawRegistry> = read_json(path)?;

    let registries: IndexMap<String, Registry> = raw
        .into_iter()
        .map(|(name, registry)| {
            let entries = registry
                .entries
                .into_iter()
                .map(|(entry, raw)| RegistryEntry::new(entry, raw.protocol_id))
                .collect();
            let registry = Registry {
                name: name.clone(),
                entries,
            };
            (name, registry)
        })
        .collect();

    for registry in registries.values().filter(|r| r.entries.is_empty()) {
        tracing::warn!(registry = %registry.name, "registry has no entries");
    }
    tracing::debug!(path = %path.display(), registries = registries.len(), "loaded registry report");

    Ok(Registries { registries })
}

/// How tag names are derived from file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLoadOptions {
    /// Namespace prepended to every tag name.
    pub namespace: String,
}

impl Default for TagLoadOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Load every `*.json` tag below `dir`.
///
/// `dir/wool.json` becomes `minecraft:wool` and `dir/mineable/axe.json`
/// becomes `minecraft:mineable/axe`. Files load in sorted path order.
pub fn load_tags<P: AsRef<Path>>(dir: P, options: &TagLoadOptions) -> Result<TagSet> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Err(DataGenError::MissingInput {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(DataGenError::Parse {
            path: dir.to_path_buf(),
            detail: "not a directory".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| DataGenError::Parse {
            path: dir.to_path_buf(),
            detail: e.to_string(),
        })?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path.to_path_buf());
        }
    }

    let mut tags = TagSet::new();
    for path in &files {
        let name = tag_name(dir, path, &options.namespace)?;
        let raw: RawTag = read_json(path)?;
        let entries = raw.values.into_iter().map(RawTagValue::into_entry).collect();
        tracing::debug!(tag = %name, "loaded tag");
        tags.insert(TagDefinition::new(name, entries));
    }

    tracing::info!(dir = %dir.display(), tags = tags.len(), "loaded tags");
    Ok(tags)
}

/// `<namespace>:<path relative to dir, without extension>`, `/`-separated.
fn tag_name(dir: &Path, path: &Path, namespace: &str) -> Result<String> {
    let malformed = || DataGenError::Parse {
        path: path.to_path_buf(),
        detail: "tag file name is not valid UTF-8".to_string(),
    };

    let relative = path.strip_prefix(dir).unwrap_or(path).with_extension("");
    let mut segments = Vec::new();
    for component in relative.components() {
        if let Component::Normal(segment) = component {
            segments.push(segment.to_str().ok_or_else(malformed)?);
        }
    }

    Ok(format!("{}:{}", namespace, segments.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_blocks() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "blocks.json",
            r#"{
                "minecraft:stone": { "states": [{ "id": 1, "default": true }] },
                "minecraft:oak_log": {
                    "properties": { "axis": ["x", "y", "z"] },
                    "states": [
                        { "id": 2, "properties": { "axis": "x" } },
                        { "id": 3, "default": true, "properties": { "axis": "y" } },
                        { "id": 4, "properties": { "axis": "z" } }
                    ]
                }
            }"#,
        );

        let blocks = load_blocks(dir.path().join("blocks.json")).unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "minecraft:stone");
        assert_eq!(blocks[0].default_values, None);
        assert_eq!(blocks[1].name, "minecraft:oak_log");
        assert_eq!(blocks[1].properties[0].values, vec!["x", "y", "z"]);
        assert_eq!(blocks[1].default_values, Some(vec!["y".to_string()]));
    }

    #[test]
    fn test_default_state_without_properties_object() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "blocks.json",
            r#"{
                "minecraft:x": {
                    "properties": { "a": ["1"] },
                    "states": [{ "id": 0, "default": true }]
                }
            }"#,
        );

        let blocks = load_blocks(dir.path().join("blocks.json")).unwrap();

        assert_eq!(blocks[0].default_values, Some(vec![]));
        assert_eq!(
            crate::output::block_records(&blocks),
            vec!["key minecraft:x", "property a 1", "default_values ", ""]
        );
    }

    #[test]
    fn test_load_registries_bare_and_qualified_lookup() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "registries.json",
            r#"{
                "minecraft:block": {
                    "default": "minecraft:air",
                    "protocol_id": 0,
                    "entries": {
                        "minecraft:stone": { "protocol_id": 1 },
                        "minecraft:air": { "protocol_id": 0 }
                    }
                }
            }"#,
        );

        let registries = load_registries(dir.path().join("registries.json")).unwrap();

        let block = registries.get("block").unwrap();
        assert_eq!(block.name, "minecraft:block");
        assert_eq!(block.entries[0], RegistryEntry::new("minecraft:stone", 1));
        assert_eq!(registries.get("minecraft:block").unwrap(), block);
        assert!(matches!(
            registries.get("item"),
            Err(DataGenError::UnknownRegistry { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_blocks(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DataGenError::MissingInput { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "blocks.json", "{ not json");
        let err = load_blocks(dir.path().join("blocks.json")).unwrap_err();
        assert!(matches!(err, DataGenError::Parse { .. }));
    }

    #[test]
    fn test_load_tags_names_from_paths() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "logs.json",
            r##"{ "replace": false, "values": ["#minecraft:oak_logs", "minecraft:crimson_stem"] }"##,
        );
        write(
            dir.path(),
            "oak_logs.json",
            r#"{ "values": ["minecraft:oak_log", { "id": "minecraft:oak_wood", "required": false }] }"#,
        );
        write(dir.path(), "mineable/axe.json", r#"{ "values": [] }"#);
        write(dir.path(), "README.txt", "ignored");

        let tags = load_tags(dir.path(), &TagLoadOptions::default()).unwrap();

        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["minecraft:logs", "minecraft:mineable/axe", "minecraft:oak_logs"]
        );
        assert_eq!(
            tags.get("minecraft:logs").unwrap().entries,
            vec![
                TagEntry::Reference("minecraft:oak_logs".to_string()),
                TagEntry::Literal("minecraft:crimson_stem".to_string()),
            ]
        );
        assert_eq!(
            tags.get("minecraft:oak_logs").unwrap().entries[1],
            TagEntry::Literal("minecraft:oak_wood".to_string())
        );
    }

    #[test]
    fn test_load_tags_custom_namespace() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "gears.json", r#"{ "values": ["mymod:copper_gear"] }"#);

        let options = TagLoadOptions {
            namespace: "mymod".to_string(),
        };
        let tags = load_tags(dir.path(), &options).unwrap();

        assert!(tags.get("mymod:gears").is_some());
    }
}
