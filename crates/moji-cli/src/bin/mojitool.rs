use std::fs;
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use moji_cli::commands::{apply_ops, config_ops};

#[derive(Parser)]
#[command(name = "mojitool", about = "Table-driven kana and decorative text transforms")]
struct Cli {
    /// Custom table catalog TOML (replaces the embedded one)
    #[arg(long, global = true)]
    tables: Option<String>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON trace logs to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a named transform to the given text, or to each stdin line
    Apply {
        /// Transform name (see `list`)
        transform: String,
        /// Input text; reads stdin when omitted
        text: Vec<String>,
        /// Print one JSON record per line
        #[arg(long)]
        json: bool,
    },
    /// List transform names
    List,
    /// Export the default table catalog as TOML
    TablesExport,
    /// Validate a custom table catalog TOML file
    TablesValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn read_or_exit(file: &str) -> String {
    fs::read_to_string(file).unwrap_or_else(|e| {
        eprintln!("Error reading {file}: {e}");
        process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    moji_engine::init_tracing(cli.trace_dir.as_deref().map(Path::new));

    let settings_toml = cli.settings.as_deref().map(read_or_exit);
    let tables_toml = cli.tables.as_deref().map(read_or_exit);
    if let Err(e) = config_ops::install(settings_toml, tables_toml) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    match cli.command {
        Command::Apply {
            transform,
            text,
            json,
        } => apply_ops::apply(&transform, &text, json),
        Command::List => apply_ops::list(),
        Command::TablesExport => config_ops::tables_export(),
        Command::TablesValidate { file } => config_ops::tables_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
