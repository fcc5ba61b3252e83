//! Category catalog loading from config.toml
//!
//! The categories listed in config.toml are seeded into the database by the
//! setup binary. Identifiers are fixed in the file so that clients can refer to
//! the same category across deployments.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Location of the catalog file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Category catalog to seed
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

/// Configuration for a single catalog category
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Stable identifier
    pub id: String,
    /// Display title
    pub title: String,
}

/// Loads the category catalog from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    parse_config(&contents)
}

/// Parses the catalog from TOML text, rejecting blank identifiers or titles.
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    if let Some(bad) = config
        .categories
        .iter()
        .find(|c| c.id.trim().is_empty() || c.title.trim().is_empty())
    {
        return Err(Error::Config {
            message: format!("Category entries need a non-empty id and title: {bad:?}"),
        });
    }

    Ok(config)
}

/// Loads the category catalog from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config(DEFAULT_CONFIG_PATH)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_category_config() {
        let toml_str = r#"
            [[categories]]
            id = "318baf68-71c8-410c-8e1d-21852fbf088e"
            title = "Hiking"

            [[categories]]
            id = "7c08b19f-5846-4b6b-a11e-861d004f8151"
            title = "Camping"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[0].id, "318baf68-71c8-410c-8e1d-21852fbf088e");
        assert_eq!(config.categories[0].title, "Hiking");
        assert_eq!(config.categories[1].title, "Camping");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_parse_rejects_blank_title() {
        let toml_str = r#"
            [[categories]]
            id = "c1"
            title = "   "
        "#;

        let result = parse_config(toml_str);
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let result = parse_config("[[categories]\nid = ");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_load_default_config() {
        // Tests run from the package root, next to the shipped catalog
        let config = load_default_config().unwrap();
        assert!(!config.categories.is_empty());
        assert!(config.categories.iter().any(|c| c.title == "Camping"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }
}
