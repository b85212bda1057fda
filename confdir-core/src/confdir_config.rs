//! Global confdir configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ConfdirError, ConfdirResult};

static DEFAULT_DATA_PATH: &str = "~/conference";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

/// Global configuration at ~/.config/confdir/config.toml
///
/// Programme-specific configuration (contributed slots, exclusion lists,
/// fallback day) is stored in the data directory's program.toml instead.
#[derive(Deserialize, Clone)]
pub struct ConfdirConfig {
    #[serde(default = "default_data_path")]
    pub data_dir: PathBuf,
}

impl ConfdirConfig {
    pub fn config_path() -> ConfdirResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfdirError::Config("Could not determine config directory".into()))?
            .join("confdir");

        Ok(config_dir.join("config.toml"))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> ConfdirResult<()> {
        let contents = format!(
            "\
# confdir configuration

# Where your conference data lives:
# data_dir = \"{}\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfdirError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ConfdirError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_defaults_when_absent() {
        let config: ConfdirConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("~/conference"));
    }

    #[test]
    fn default_config_file_is_commented_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("confdir").join("config.toml");

        ConfdirConfig::create_default_config(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# data_dir"));
    }
}
