use serde::Deserialize;

use crate::error::TableError;

/// One literal table: two space-separated token lists.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpec {
    pub source: String,
    pub target: String,
}

/// Every literal table of the catalog, by name.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpecs {
    pub semi_voice: TableSpec,
    pub full_voice: TableSpec,
    pub small: TableSpec,
    pub subscript: TableSpec,
    pub small_caps: TableSpec,
    pub superscript: TableSpec,
    pub rune: TableSpec,
    pub double_struck: TableSpec,
    pub script: TableSpec,
    pub bold_script: TableSpec,
    pub fraktur: TableSpec,
    pub flag: TableSpec,
    pub square: TableSpec,
    pub squared: TableSpec,
    pub square_black: TableSpec,
    pub circled: TableSpec,
    pub circled_black: TableSpec,
}

/// Parse table TOML text. Token alignment is checked when the set is built.
pub fn parse_tables_toml(toml_str: &str) -> Result<TableSpecs, TableError> {
    toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))
}
