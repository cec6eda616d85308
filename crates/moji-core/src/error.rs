#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("token count mismatch: {source_len} source tokens vs {target_len} target tokens")]
    LengthMismatch {
        source_len: usize,
        target_len: usize,
    },
    #[error("table is empty")]
    Empty,
    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("table `{name}`: {source}")]
    InTable {
        name: &'static str,
        source: Box<TableError>,
    },
    #[error("tables already initialized")]
    AlreadyInitialized,
}

impl TableError {
    pub(crate) fn in_table(name: &'static str) -> impl FnOnce(TableError) -> TableError {
        move |e| TableError::InTable {
            name,
            source: Box::new(e),
        }
    }
}
