// src/utils/text.rs

//! Text extraction and normalization.
//!
//! Every human-readable string leaves the tree through [`extract_text`];
//! field parsers then shape it with [`Pipeline`] stages.

use std::collections::HashSet;

use crate::utils::tree::{self, NodeRef};

/// Payloads of all text leaves under `node` (itself included), in document
/// order and untrimmed.
pub fn extract_text(node: NodeRef<'_>) -> Vec<String> {
    tree::find_all(node, tree::is_text())
        .into_iter()
        .filter_map(|n| n.value().as_text().map(|t| (**t).to_owned()))
        .collect()
}

/// Trim every entry, dropping blanks and exact members of `remove`.
pub fn strip_and_filter<S: AsRef<str>>(lines: Vec<String>, remove: &[S]) -> Vec<String> {
    let remove: HashSet<&str> = remove.iter().map(AsRef::as_ref).collect();
    strip_with(lines, &remove)
}

fn strip_with(lines: Vec<String>, remove: &HashSet<&str>) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !remove.contains(line))
        .map(str::to_string)
        .collect()
}

/// Split every entry on newlines, dropping blank lines (empty or
/// whitespace-only). Other lines are kept verbatim.
pub fn flatten_by_line(lines: Vec<String>) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| line.split('\n'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// One normalization step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    StripAndFilter(HashSet<String>),
    FlattenByLine,
}

impl Stage {
    fn apply(&self, lines: Vec<String>) -> Vec<String> {
        match self {
            Stage::StripAndFilter(remove) => {
                let remove: HashSet<&str> = remove.iter().map(String::as_str).collect();
                strip_with(lines, &remove)
            }
            Stage::FlattenByLine => flatten_by_line(lines),
        }
    }
}

/// Ordered normalization stages, applied left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flatten_by_line(mut self) -> Self {
        self.stages.push(Stage::FlattenByLine);
        self
    }

    pub fn strip_and_filter(mut self, remove: &[&str]) -> Self {
        self.stages.push(Stage::StripAndFilter(
            remove.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    pub fn apply(&self, lines: Vec<String>) -> Vec<String> {
        self.stages
            .iter()
            .fold(lines, |acc, stage| stage.apply(acc))
    }

    /// Extract the text under `node` and run it through every stage.
    pub fn extract(&self, node: NodeRef<'_>) -> Vec<String> {
        self.apply(extract_text(node))
    }
}
