pub mod decorate;
mod error;
pub mod kana;
pub mod numeric;
pub mod replace;
pub mod settings;
pub mod tables;
pub mod token_table;
pub mod transform;
pub mod unicode;

pub use error::TableError;
pub use replace::Replacer;
pub use token_table::TokenTable;
pub use transform::Transform;
