//! Line-oriented record format read by the code generators.
//!
//! ```text
//! key minecraft:oak_log
//! property axis x y z
//! default_values y
//!
//! key minecraft:logs
//! value minecraft:oak_log
//! value minecraft:birch_log
//!
//! ```
//!
//! Every record opens with a `key` line and ends with a blank line. Listing
//! outputs use bare lines instead, one token each.

use crate::blocks::BlockDefinition;
use crate::tags::ResolvedTags;
use std::io::{self, Write};

/// Accumulates output lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineWriter {
    lines: Vec<String>,
}

impl LineWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a record.
    pub fn key(&mut self, name: &str) -> &mut Self {
        self.lines.push(format!("key {}", name));
        self
    }

    pub fn value(&mut self, value: &str) -> &mut Self {
        self.lines.push(format!("value {}", value));
        self
    }

    pub fn property(&mut self, name: &str, values: &[String]) -> &mut Self {
        self.lines
            .push(join_line(&format!("property {}", name), values));
        self
    }

    pub fn default_values(&mut self, values: &[String]) -> &mut Self {
        self.lines.push(join_line("default_values", values));
        self
    }

    /// Terminate the current record.
    pub fn end_record(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// A bare listing token, with a trailing comma when `comma` is set.
    pub fn bare(&mut self, token: &str, comma: bool) -> &mut Self {
        if comma {
            self.lines.push(format!("{},", token));
        } else {
            self.lines.push(token.to_string());
        }
        self
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// `head` and the space-joined values. The separating space is written even
/// when there are no values.
fn join_line(head: &str, values: &[String]) -> String {
    format!("{} {}", head, values.join(" "))
}

/// One `key`/`value` record per resolved tag.
pub fn tag_records(resolved: &ResolvedTags) -> Vec<String> {
    let mut writer = LineWriter::new();
    for (name, values) in resolved {
        writer.key(name);
        for value in values {
            writer.value(value);
        }
        writer.end_record();
    }
    writer.into_lines()
}

/// One record per block: its properties, then its default state.
pub fn block_records(blocks: &[BlockDefinition]) -> Vec<String> {
    let mut writer = LineWriter::new();
    for block in blocks {
        writer.key(&block.name);
        for property in &block.properties {
            writer.property(&property.name, &property.values);
        }
        if let Some(defaults) = &block.default_values {
            writer.default_values(defaults);
        }
        writer.end_record();
    }
    writer.into_lines()
}

/// An empty record per key.
pub fn key_records<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut writer = LineWriter::new();
    for key in keys {
        writer.key(key).end_record();
    }
    writer.into_lines()
}

/// Bare tokens, each followed by a comma.
pub fn token_list<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut writer = LineWriter::new();
    for token in tokens {
        writer.bare(token.as_ref(), true);
    }
    writer.into_lines()
}

/// Write `lines` newline-terminated.
pub fn write_lines<W: Write>(mut out: W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
