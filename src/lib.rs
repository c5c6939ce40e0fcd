//! # Datagen: Game Data Report Conversion
//!
//! Datagen converts the reports produced by the vanilla server's data
//! generator into a compact, line-oriented format that downstream code
//! generators read.
//!
//! ```text
//! java -DbundlerMainClass=net.minecraft.data.Main -jar server.jar --all
//! ```
//!
//! ## Features
//!
//! - **Tag resolution**: flattens nested `#tag` references into literal lists,
//!   rejecting dangling references and cycles
//! - **Registry ordering**: lists registry entries indexed by `protocol_id`
//! - **Block states**: property values and default state per block
//! - **Identifier names**: `minecraft:oak_log` to `OAK_LOG` style tokens
//!
//! ## Example: tag resolution
//!
//! ```rust
//! use datagen::{resolve, TagDefinition, TagSet};
//!
//! let tags: TagSet = vec![
//!     TagDefinition::from_raw("minecraft:logs", ["#minecraft:oak_logs", "minecraft:crimson_stem"]),
//!     TagDefinition::from_raw("minecraft:oak_logs", ["minecraft:oak_log"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let resolved = resolve(&tags).unwrap();
//! assert_eq!(resolved["minecraft:logs"], ["minecraft:oak_log", "minecraft:crimson_stem"]);
//! ```

pub mod error;
pub mod tags;
pub mod registry;
pub mod blocks;
pub mod identifier;
pub mod output;

// Report decoding and per-format pipelines
pub mod loader;
pub mod generate;
pub mod fs_utils;

// Re-export key types
pub use error::{DataGenError, Result};
pub use tags::{resolve, resolve_with, ResolveOptions, ResolvedTags, TagDefinition, TagEntry, TagSet};
pub use registry::{order, Registry, RegistryEntry};
pub use blocks::{BlockDefinition, BlockProperty};
pub use identifier::{normalize, Normalizer};
pub use output::LineWriter;
pub use loader::{load_blocks, load_registries, load_tags, Registries, TagLoadOptions};
