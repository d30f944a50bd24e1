use std::path::Path;

use natsort::{SortOptions, SpecEntry, parse_entries};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Sort levels as written in a config file: either the textual form
/// (`"4:0,4:1,1:3"`) or a list of indices / `[field, subtoken]` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelsConfig {
    Text(String),
    Entries(Vec<SpecEntry>),
}

impl Default for LevelsConfig {
    fn default() -> Self {
        LevelsConfig::Entries(Vec::new())
    }
}

impl LevelsConfig {
    pub fn entries(&self) -> Result<Vec<SpecEntry>> {
        match self {
            LevelsConfig::Text(text) => parse_entries(text).map_err(CliError::InvalidLevels),
            LevelsConfig::Entries(entries) => Ok(entries.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub delimiter: char,
    pub output_delimiter: Option<char>,
    pub has_header: bool,
    pub trim_fields: bool,
    pub levels: LevelsConfig,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            output_delimiter: None,
            has_header: false,
            trim_fields: false,
            levels: LevelsConfig::default(),
        }
    }
}

impl SortConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` if given, falling back to defaults when it cannot be read
    /// or parsed.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        Self::load_from_file(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default sort config");
            Self::default()
        })
    }

    pub fn to_options(&self) -> SortOptions {
        SortOptions {
            delimiter: self.delimiter,
            output_delimiter: self.output_delimiter,
            has_header: self.has_header,
            trim_fields: self.trim_fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SortConfig::from_toml_str("").unwrap();
        assert_eq!(config, SortConfig::default());
        assert_eq!(config.to_options(), SortOptions::default());
    }

    #[test]
    fn pairs_and_indices() {
        let config = SortConfig::from_toml_str(
            r#"
            delimiter = "\t"
            has_header = true
            levels = [[4, 0], [4, 1], [1, 3]]
            "#,
        )
        .unwrap();
        assert_eq!(config.delimiter, '\t');
        assert!(config.has_header);
        assert_eq!(
            config.levels.entries().unwrap(),
            vec![
                SpecEntry::from((4, 0)),
                SpecEntry::from((4, 1)),
                SpecEntry::from((1, 3))
            ]
        );

        let config = SortConfig::from_toml_str("levels = [2, 0]").unwrap();
        assert_eq!(
            config.levels.entries().unwrap(),
            vec![SpecEntry::Index(2), SpecEntry::Index(0)]
        );
    }

    #[test]
    fn textual_levels() {
        let config =
            SortConfig::from_toml_str("levels = \"4:0,1:3\"\noutput_delimiter = \";\"").unwrap();
        assert_eq!(
            config.levels.entries().unwrap(),
            vec![SpecEntry::from((4, 0)), SpecEntry::from((1, 3))]
        );
        assert_eq!(config.to_options().output_delimiter(), ';');
    }

    #[test]
    fn bad_config_is_an_error() {
        assert!(matches!(
            SortConfig::from_toml_str("delimiter = 3"),
            Err(CliError::ConfigError(_))
        ));
        let config = SortConfig::from_toml_str("levels = \"1:x\"").unwrap();
        assert!(matches!(
            config.levels.entries(),
            Err(CliError::InvalidLevels(_))
        ));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("natsort.toml");
        std::fs::write(&path, "trim_fields = true\nlevels = [1]\n").unwrap();

        let config = SortConfig::load_from_file(&path).unwrap();
        assert!(config.trim_fields);

        let missing = dir.path().join("missing.toml");
        assert!(SortConfig::load_from_file(&missing).is_err());
        assert_eq!(
            SortConfig::load_or_default(Some(&missing)),
            SortConfig::default()
        );
        assert_eq!(SortConfig::load_or_default(None), SortConfig::default());
    }
}
