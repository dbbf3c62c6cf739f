pub mod csv;
pub mod rules;
