//! Compiled substitution over a [`TokenTable`].
//!
//! All source tokens are joined, longest first, into a single alternation
//! `(tok1|tok2|...)`. The regex engine picks the leftmost match and, among
//! alternatives starting there, the first listed one, so the table order is
//! what gives longer tokens precedence over their prefixes.

use std::collections::HashMap;

use regex::{Captures, Regex, RegexBuilder};
use tracing::debug;

use crate::error::TableError;
use crate::settings::settings;
use crate::token_table::TokenTable;

/// Characters escaped inside a token before it is embedded in a pattern.
const META_CHARS: &[char] = &[
    '\\', '[', ']', '(', ')', '{', '}', '-', '+', '.', '*', '|', '?', '^', '$',
];

/// Escape regex metacharacters one character at a time.
pub fn escape_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for c in token.chars() {
        if META_CHARS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone)]
pub struct Replacer {
    map: HashMap<String, String>,
    regex: Regex,
}

impl Replacer {
    /// Compile `table` with an optional `suffix` pattern.
    ///
    /// `suffix` is raw regex syntax that must follow a token immediately for
    /// the token to match. The suffix text is consumed and dropped from the
    /// output.
    pub fn compile(table: &TokenTable, suffix: &str) -> Result<Self, TableError> {
        Self::compile_with_limit(table, suffix, settings().matcher.size_limit)
    }

    pub fn compile_with_limit(
        table: &TokenTable,
        suffix: &str,
        size_limit: usize,
    ) -> Result<Self, TableError> {
        if table.is_empty() {
            return Err(TableError::Empty);
        }
        let alternation: Vec<String> = table.sources().iter().map(|t| escape_token(t)).collect();
        let pattern = format!("({}){}", alternation.join("|"), suffix);
        let regex = RegexBuilder::new(&pattern)
            .size_limit(size_limit)
            .build()?;
        debug!(tokens = table.len(), pattern_len = pattern.len(), "compiled replacer");

        let map = table
            .sources()
            .iter()
            .filter_map(|src| table.get(src).map(|tgt| (src.clone(), tgt.to_string())))
            .collect();
        Ok(Self { map, regex })
    }

    /// Replace every matched token; everything else is copied through.
    pub fn replace(&self, text: &str) -> String {
        self.regex
            .replace_all(text, |caps: &Captures| {
                let token = caps.get(1).map_or("", |m| m.as_str());
                match self.map.get(token) {
                    Some(target) => target.clone(),
                    None => token.to_string(),
                }
            })
            .into_owned()
    }

    /// Look up the replacement for a single token.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(|s| s.as_str())
    }
}
