//! Option sets shown by the demo.

use std::fs;
use std::path::Path;

use pickbox::SelectOption;

use crate::error::DemoError;

/// Read a JSON array of `{ "name": ..., "value": ... }` objects.
pub fn load(path: &Path) -> Result<Vec<SelectOption>, DemoError> {
    let text = fs::read_to_string(path).map_err(|source| DemoError::ReadOptions {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text).map_err(|source| DemoError::ParseOptions {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse(text: &str) -> Result<Vec<SelectOption>, serde_json::Error> {
    serde_json::from_str(text)
}

pub fn fruits() -> Vec<SelectOption> {
    [
        ("Apple", "apple"),
        ("Apricot", "apricot"),
        ("Banana", "banana"),
        ("Blueberry", "blueberry"),
        ("Cherry", "cherry"),
        ("Grape", "grape"),
        ("Mango", "mango"),
        ("Pineapple", "pineapple"),
    ]
    .into_iter()
    .map(|(name, value)| SelectOption::new(name, value))
    .collect()
}

pub fn sizes() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Small", "s"),
        SelectOption::new("Medium", "m"),
        SelectOption::new("Large", "l"),
    ]
}
