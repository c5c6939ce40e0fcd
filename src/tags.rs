//! Tag collections and their resolution.
//!
//! A tag is an ordered list of entries, each either a literal identifier or a
//! reference to another tag. Resolution flattens every tag into the literal
//! identifiers it stands for, substituting references in place.
//!
//! ```text
//! minecraft:logs          = [#minecraft:oak_logs, minecraft:crimson_stem]
//! minecraft:oak_logs      = [minecraft:oak_log, minecraft:oak_wood]
//!
//! resolve(minecraft:logs) = [minecraft:oak_log, minecraft:oak_wood, minecraft:crimson_stem]
//! ```

use crate::error::{DataGenError, Result};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Default limit on the length of a reference chain.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// One entry of a tag definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEntry {
    /// A concrete identifier.
    Literal(String),
    /// The name of another tag, replaced by that tag's resolved values.
    Reference(String),
}

impl TagEntry {
    /// Marker that distinguishes a reference from a literal in raw tag files.
    pub const REFERENCE_MARKER: char = '#';

    /// Parse the raw string form used in tag files (`#name` is a reference).
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(Self::REFERENCE_MARKER) {
            Some(target) => TagEntry::Reference(target.to_string()),
            None => TagEntry::Literal(raw.to_string()),
        }
    }
}

/// A named tag and its entries in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    pub name: String,
    pub entries: Vec<TagEntry>,
}

impl TagDefinition {
    pub fn new(name: impl Into<String>, entries: Vec<TagEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Build a definition from raw strings, parsing each with [`TagEntry::parse`].
    pub fn from_raw<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = values
            .into_iter()
            .map(|value| TagEntry::parse(value.as_ref()))
            .collect();
        Self::new(name, entries)
    }
}

/// Tag definitions keyed by name, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    tags: IndexMap<String, TagDefinition>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition, returning the one it replaced if the name was taken.
    ///
    /// A replaced definition keeps its original declaration position.
    pub fn insert(&mut self, definition: TagDefinition) -> Option<TagDefinition> {
        self.tags.insert(definition.name.clone(), definition)
    }

    pub fn get(&self, name: &str) -> Option<&TagDefinition> {
        self.tags.get(name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagDefinition> {
        self.tags.values()
    }
}

impl FromIterator<TagDefinition> for TagSet {
    fn from_iter<T: IntoIterator<Item = TagDefinition>>(iter: T) -> Self {
        let mut set = TagSet::new();
        for definition in iter {
            set.insert(definition);
        }
        set
    }
}

/// Knobs for a resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Maximum number of tags on one reference chain, the root included.
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Resolved values per tag, in the tag set's declaration order.
pub type ResolvedTags = IndexMap<String, Vec<String>>;

/// Resolve every tag in `tags` with the default options.
pub fn resolve(tags: &TagSet) -> Result<ResolvedTags> {
    resolve_with(tags, ResolveOptions::default())
}

/// Resolve every tag in `tags`.
///
/// Fails on the first dangling reference, cycle or over-deep chain; no
/// partial result is returned.
pub fn resolve_with(tags: &TagSet, options: ResolveOptions) -> Result<ResolvedTags> {
    let mut resolver = Resolver::new(tags, options);
    let mut resolved = ResolvedTags::with_capacity(tags.len());

    for definition in tags.iter() {
        let values = resolver.resolve_tag(definition)?;
        resolved.insert(definition.name.clone(), values);
    }

    tracing::debug!(tags = resolved.len(), "resolved tag set");
    Ok(resolved)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolveState {
    Unvisited,
    InProgress,
    Resolved,
}

/// A tag whose entries are being expanded.
struct Frame<'a> {
    definition: &'a TagDefinition,
    next: usize,
    values: Vec<String>,
    /// Tallest chain below this tag seen so far.
    below: usize,
}

impl<'a> Frame<'a> {
    fn new(definition: &'a TagDefinition) -> Self {
        Self {
            definition,
            next: 0,
            values: Vec::new(),
            below: 0,
        }
    }
}

/// A finished tag: its values and the length of the longest chain it starts.
struct ResolvedTag {
    values: Vec<String>,
    height: usize,
}

/// Working set of one pass. Resolved tags are reused by later references.
struct Resolver<'a> {
    tags: &'a TagSet,
    options: ResolveOptions,
    states: HashMap<&'a str, ResolveState>,
    resolved: HashMap<&'a str, ResolvedTag>,
}

impl<'a> Resolver<'a> {
    fn new(tags: &'a TagSet, options: ResolveOptions) -> Self {
        Self {
            tags,
            options,
            states: HashMap::with_capacity(tags.len()),
            resolved: HashMap::with_capacity(tags.len()),
        }
    }

    fn state(&self, name: &str) -> ResolveState {
        self.states
            .get(name)
            .copied()
            .unwrap_or(ResolveState::Unvisited)
    }

    fn resolve_tag(&mut self, root: &'a TagDefinition) -> Result<Vec<String>> {
        if let Some(done) = self.resolved.get(root.name.as_str()) {
            return Ok(done.values.clone());
        }

        let tags = self.tags;
        let limit = self.options.max_depth;
        self.states.insert(&root.name, ResolveState::InProgress);
        let mut stack = vec![Frame::new(root)];

        loop {
            let depth = stack.len();
            let Some(frame) = stack.last_mut() else { break };
            let definition = frame.definition;

            match definition.entries.get(frame.next) {
                Some(TagEntry::Literal(value)) => {
                    frame.next += 1;
                    frame.values.push(value.clone());
                }
                Some(TagEntry::Reference(target)) => {
                    frame.next += 1;
                    match self.state(target) {
                        ResolveState::Resolved => {
                            if let Some(done) = self.resolved.get(target.as_str()) {
                                // The reused tag's own chain still counts.
                                if depth + done.height > limit {
                                    return Err(depth_error(root, limit));
                                }
                                frame.values.extend(done.values.iter().cloned());
                                frame.below = frame.below.max(done.height);
                            }
                        }
                        ResolveState::InProgress => {
                            return Err(cycle_error(&stack, target));
                        }
                        ResolveState::Unvisited => {
                            let referenced = tags.get(target).ok_or_else(|| {
                                DataGenError::UnknownTagReference {
                                    tag: definition.name.clone(),
                                    reference: target.clone(),
                                }
                            })?;
                            if depth >= limit {
                                return Err(depth_error(root, limit));
                            }
                            self.states
                                .insert(&referenced.name, ResolveState::InProgress);
                            stack.push(Frame::new(referenced));
                        }
                    }
                }
                None => {
                    let Some(finished) = stack.pop() else { break };
                    let name = finished.definition.name.as_str();
                    let height = finished.below + 1;
                    self.states.insert(name, ResolveState::Resolved);
                    if let Some(parent) = stack.last_mut() {
                        parent.values.extend(finished.values.iter().cloned());
                        parent.below = parent.below.max(height);
                    }
                    self.resolved.insert(
                        name,
                        ResolvedTag {
                            values: finished.values,
                            height,
                        },
                    );
                }
            }
        }

        Ok(self
            .resolved
            .get(root.name.as_str())
            .map(|done| done.values.clone())
            .unwrap_or_default())
    }
}

fn depth_error(root: &TagDefinition, limit: usize) -> DataGenError {
    DataGenError::MaxDepthExceeded {
        tag: root.name.clone(),
        limit,
    }
}

/// Build the chain from the first expansion of `target` back to `target`.
fn cycle_error(stack: &[Frame<'_>], target: &str) -> DataGenError {
    let start = stack
        .iter()
        .position(|frame| frame.definition.name == target)
        .unwrap_or(0);
    let mut chain: Vec<String> = stack[start..]
        .iter()
        .map(|frame| frame.definition.name.clone())
        .collect();
    chain.push(target.to_string());
    DataGenError::CyclicReference { chain }
}
