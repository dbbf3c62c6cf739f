pub mod error;
pub mod file;

pub use error::FileError;
pub use file::{
    csv::{
        settings::CsvSettings,
        source::{CsvTableReader, TableSource},
    },
    rules::{load_rule_lines, load_rule_set, save_rule_set},
};
