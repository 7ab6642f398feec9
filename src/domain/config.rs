use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for the interactive shell.
///
/// The registry itself takes no configuration; these settings only affect
/// how the shell presents itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The title shown above the main menu.
    title: String,

    /// Whether to colour output.
    pub color: ColorChoice,
}

/// When to colour terminal output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour output when the terminal supports it.
    #[default]
    Auto,
    /// Always colour output.
    Always,
    /// Never colour output.
    Never,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            color: ColorChoice::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Returns the title shown above the main menu.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title shown above the main menu.
    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }
}

fn default_title() -> String {
    "Hospital Management System".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_title")]
        title: String,

        #[serde(default)]
        color: ColorChoice,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { title, color } => Self { title, color },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            title: config.title,
            color: config.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ntitle = \"St. Elsewhere\"\ncolor = \"never\"\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.title(), "St. Elsewhere");
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ncolor = \"sometimes\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising an empty file returns the default configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn round_trips_through_versioned_envelope() {
        let mut config = Config::default();
        config.set_title("Mercy General".to_string());
        config.color = ColorChoice::Always;

        let serialized = toml::to_string(&config).unwrap();
        assert!(serialized.contains("_version = \"1\""));

        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
