//! Table catalog: every literal table compiled once into a [`TableSet`].
//!
//! The literal tables are embedded from `default_tables.toml`. A replacement
//! catalog can be installed with [`init_custom`] before the first call to
//! [`global`]; after that the set is immutable for the life of the process.

mod config;

use std::sync::OnceLock;

use tracing::{debug, debug_span};

pub use config::{parse_tables_toml, TableSpec, TableSpecs};

use crate::decorate::Style;
use crate::error::TableError;
use crate::replace::Replacer;
use crate::token_table::TokenTable;
use crate::unicode::{COMBINING_SEMI_VOICED, COMBINING_VOICED};

pub const DEFAULT_TABLES_TOML: &str = include_str!("default_tables.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<TableSet> = OnceLock::new();

/// Sub-tables of the composite "ascii" style, in concatenation order.
pub const ASCII_ORDER: [Style; 14] = [
    Style::Rune,
    Style::DoubleStruck,
    Style::Script,
    Style::BoldScript,
    Style::Fraktur,
    Style::Flag,
    Style::Square,
    Style::Squared,
    Style::SquareBlack,
    Style::Circled,
    Style::CircledBlack,
    Style::Superscript,
    Style::SmallCaps,
    Style::Subscript,
];

/// Set custom table TOML before first `global()` call.
///
/// Building the catalog reads [`settings`](crate::settings::settings), so any
/// custom settings must be installed first.
pub fn init_custom(toml_content: String) -> Result<(), TableError> {
    // Validate eagerly, including token alignment and pattern compilation.
    TableSet::build(&parse_tables_toml(&toml_content)?)?;
    if INSTANCE.get().is_some() {
        return Err(TableError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| TableError::AlreadyInitialized)
}

/// Get or initialize the global table set.
///
/// Panics if the catalog is malformed; a misaligned table is a data-entry
/// error that must not be papered over at runtime.
pub fn global() -> &'static TableSet {
    INSTANCE.get_or_init(|| {
        let _span = debug_span!("tables_init").entered();
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_TABLES_TOML);
        let specs = parse_tables_toml(toml_str).expect("table TOML must be valid");
        match TableSet::build(&specs) {
            Ok(set) => set,
            Err(e) => panic!("invalid table catalog: {e}"),
        }
    })
}

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLES_TOML
}

/// A token table together with its compiled replacer.
#[derive(Debug, Clone)]
pub struct Compiled {
    pub table: TokenTable,
    pub replacer: Replacer,
}

impl Compiled {
    fn new(name: &'static str, table: TokenTable, suffix: &str) -> Result<Self, TableError> {
        let replacer = Replacer::compile(&table, suffix).map_err(TableError::in_table(name))?;
        debug!(table = name, tokens = table.len(), "table compiled");
        Ok(Self { table, replacer })
    }

    fn from_spec(name: &'static str, spec: &TableSpec, suffix: &str) -> Result<Self, TableError> {
        let table =
            TokenTable::build(&spec.source, &spec.target).map_err(TableError::in_table(name))?;
        Self::new(name, table, suffix)
    }
}

#[derive(Debug)]
pub struct TableSet {
    semi_voice: Compiled,
    full_voice: Compiled,
    devoice: Compiled,
    /// Indexed by `Style as usize`.
    styles: Vec<Compiled>,
}

impl TableSet {
    /// Build all tables: leaf tables first, then the derived devoice table,
    /// then the composite.
    pub fn build(specs: &TableSpecs) -> Result<Self, TableError> {
        let semi_voice = Compiled::from_spec(
            "semi_voice",
            &specs.semi_voice,
            &format!("[{COMBINING_SEMI_VOICED}]"),
        )?;
        let full_voice = Compiled::from_spec(
            "full_voice",
            &specs.full_voice,
            &format!("[{COMBINING_VOICED}]"),
        )?;
        let devoice_table = TokenTable::concat(&[&full_voice.table, &semi_voice.table])
            .and_then(|t| t.inverted())
            .map_err(TableError::in_table("devoice"))?;
        let devoice = Compiled::new("devoice", devoice_table, "")?;

        let mut styles = Vec::with_capacity(Style::ALL.len());
        for style in Style::ALL {
            let compiled = match leaf_spec(specs, style) {
                Some(spec) => Compiled::from_spec(style.name(), spec, "")?,
                None => {
                    let parts: Vec<&TokenTable> =
                        ASCII_ORDER.iter().map(|s| &styles_ref(&styles, *s).table).collect();
                    let table =
                        TokenTable::concat(&parts).map_err(TableError::in_table(style.name()))?;
                    Compiled::new(style.name(), table, "")?
                }
            };
            styles.push(compiled);
        }

        Ok(Self {
            semi_voice,
            full_voice,
            devoice,
            styles,
        })
    }

    pub fn semi_voice(&self) -> &Compiled {
        &self.semi_voice
    }

    pub fn full_voice(&self) -> &Compiled {
        &self.full_voice
    }

    /// Voiced and semi-voiced kana back to their plain forms.
    pub fn devoice(&self) -> &Compiled {
        &self.devoice
    }

    pub fn style(&self, style: Style) -> &Compiled {
        styles_ref(&self.styles, style)
    }
}

fn styles_ref(styles: &[Compiled], style: Style) -> &Compiled {
    &styles[style as usize]
}

fn leaf_spec(specs: &TableSpecs, style: Style) -> Option<&TableSpec> {
    let spec = match style {
        Style::Small => &specs.small,
        Style::Subscript => &specs.subscript,
        Style::SmallCaps => &specs.small_caps,
        Style::Superscript => &specs.superscript,
        Style::Rune => &specs.rune,
        Style::DoubleStruck => &specs.double_struck,
        Style::Script => &specs.script,
        Style::BoldScript => &specs.bold_script,
        Style::Fraktur => &specs.fraktur,
        Style::Flag => &specs.flag,
        Style::Square => &specs.square,
        Style::Squared => &specs.squared,
        Style::SquareBlack => &specs.square_black,
        Style::Circled => &specs.circled,
        Style::CircledBlack => &specs.circled_black,
        Style::AsciiDecorative => return None,
    };
    Some(spec)
}

#[cfg(test)]
mod tests;
