use crate::error::FileError;
use model::RuleSet;
use std::{fs, path::Path};
use tracing::info;

/// Reads a rules text file: one expression per line.
///
/// Every line is returned, blanks and `#` comments included, so callers can
/// report failures by their line number.
pub fn load_rule_lines(path: impl AsRef<Path>) -> Result<Vec<String>, FileError> {
    let path = path.as_ref();
    let text = read_existing(path)?;
    Ok(text.lines().map(str::to_string).collect())
}

pub fn load_rule_set(path: impl AsRef<Path>) -> Result<RuleSet, FileError> {
    let path = path.as_ref();
    let set = RuleSet::from_json(&read_existing(path)?)?;
    info!("Loaded {} rule(s) from {}", set.rules.len(), path.display());
    Ok(set)
}

pub fn save_rule_set(path: impl AsRef<Path>, set: &RuleSet) -> Result<(), FileError> {
    let path = path.as_ref();
    fs::write(path, set.to_json()?)?;
    info!("Saved {} rule(s) to {}", set.rules.len(), path.display());
    Ok(())
}

fn read_existing(path: &Path) -> Result<String, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}
