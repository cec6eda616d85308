//! Source-to-target token tables.
//!
//! A table is written as two space-separated token lists. The last entry of
//! each list is a run of single characters that expands into one token per
//! character, so word tokens ("キロ", "kg") and plain alphabets can share one
//! literal. Tokens are kept ordered by descending byte length so that a
//! pattern built from them never lets a short token shadow a longer one that
//! starts with it.

use std::collections::HashMap;

use tracing::debug;

use crate::error::TableError;

#[derive(Debug, Clone)]
pub struct TokenTable {
    map: HashMap<String, String>,
    sources: Vec<String>,
    targets: Vec<String>,
}

impl TokenTable {
    /// Build a table from a source spec and a target spec.
    pub fn build(source_spec: &str, target_spec: &str) -> Result<Self, TableError> {
        Self::from_tokens(expand_spec(source_spec), expand_spec(target_spec))
    }

    /// Build a table from already-split token lists.
    ///
    /// Both lists are reordered together by descending source length; equal
    /// lengths keep their input order. When a source token repeats, the last
    /// occurrence decides the mapped target.
    pub fn from_tokens(sources: Vec<String>, targets: Vec<String>) -> Result<Self, TableError> {
        if sources.len() != targets.len() {
            return Err(TableError::LengthMismatch {
                source_len: sources.len(),
                target_len: targets.len(),
            });
        }
        if sources.is_empty() {
            return Err(TableError::Empty);
        }

        let mut order: Vec<usize> = (0..sources.len()).collect();
        // sort_by_key is stable
        order.sort_by_key(|&i| std::cmp::Reverse(sources[i].len()));

        let mut sources: Vec<Option<String>> = sources.into_iter().map(Some).collect();
        let mut targets: Vec<Option<String>> = targets.into_iter().map(Some).collect();
        let sources: Vec<String> = order.iter().filter_map(|&i| sources[i].take()).collect();
        let targets: Vec<String> = order.iter().filter_map(|&i| targets[i].take()).collect();

        let mut map = HashMap::with_capacity(sources.len());
        for (src, tgt) in sources.iter().zip(&targets) {
            if map.insert(src.clone(), tgt.clone()).is_some() {
                debug!(token = %src, "duplicate source token, later entry wins");
            }
        }

        Ok(Self {
            map,
            sources,
            targets,
        })
    }

    /// Concatenate several tables, in the given order, into one table.
    pub fn concat(parts: &[&TokenTable]) -> Result<Self, TableError> {
        let sources = parts
            .iter()
            .flat_map(|t| t.sources.iter().cloned())
            .collect();
        let targets = parts
            .iter()
            .flat_map(|t| t.targets.iter().cloned())
            .collect();
        Self::from_tokens(sources, targets)
    }

    /// Swap sources and targets.
    pub fn inverted(&self) -> Result<Self, TableError> {
        Self::from_tokens(self.targets.clone(), self.sources.clone())
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(|s| s.as_str())
    }

    /// Source tokens, longest first.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Target tokens, aligned with [`TokenTable::sources`].
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Number of (source, target) pairs, duplicates included.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Split a spec into tokens: space-separated words, then one token per
/// character of the final run. A trailing space leaves the final run empty.
fn expand_spec(spec: &str) -> Vec<String> {
    let (words, tail) = match spec.rfind(' ') {
        Some(pos) => (&spec[..pos], &spec[pos + 1..]),
        None => ("", spec),
    };
    words
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .chain(tail.chars().map(String::from))
        .collect()
}
