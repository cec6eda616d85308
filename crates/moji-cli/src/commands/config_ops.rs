use std::fs;

use moji_engine::settings::SettingsError;
use moji_engine::tables::{parse_tables_toml, TableSet};
use moji_engine::{settings, tables, TableError};

#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("tables: {0}")]
    Tables(#[from] TableError),
}

/// Install custom settings and tables TOML into the global singletons.
///
/// Settings go first because compiling the table catalog reads them.
pub fn install(
    settings_toml: Option<String>,
    tables_toml: Option<String>,
) -> Result<(), InstallError> {
    if let Some(content) = settings_toml {
        settings::init_custom(content)?;
    }
    if let Some(content) = tables_toml {
        tables::init_custom(content)?;
    }
    Ok(())
}

pub fn tables_export() {
    print!("{}", tables::default_toml());
}

pub fn tables_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let specs = die!(parse_tables_toml(&content), "Error: {}");
    let set = die!(TableSet::build(&specs), "Error: {}");
    println!(
        "OK: semi_voice={}, full_voice={}, devoice={}, styles={}",
        set.semi_voice().table.len(),
        set.full_voice().table.len(),
        set.devoice().table.len(),
        moji_engine::decorate::Style::ALL.len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: numeric.separator={:?}, matcher.size_limit={}",
        s.numeric.separator, s.matcher.size_limit
    );
}
