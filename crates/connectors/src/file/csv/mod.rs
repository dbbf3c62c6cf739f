pub mod metadata;
pub mod settings;
pub mod source;
