//! Conference data directory management.

use std::path::{Path, PathBuf};

use config::{Config, File};

use crate::confdir_config::ConfdirConfig;
use crate::error::{ConfdirError, ConfdirResult};
use crate::program_config::ProgramConfig;
use crate::sources::{AbstractBundle, RawSources, abstracts, contributed, directory, sessions};

/// Handle on the conference data directory. All source files are read in
/// one eager pass through [`Confdir::sources`].
#[derive(Clone)]
pub struct Confdir {
    config: ConfdirConfig,
}

impl Confdir {
    /// Resolve the data directory from the global config file, creating a
    /// commented default config on first run.
    pub fn load() -> ConfdirResult<Self> {
        let config_path = ConfdirConfig::config_path()?;

        if !config_path.exists() {
            ConfdirConfig::create_default_config(&config_path)?;
        }

        let config: ConfdirConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| ConfdirError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfdirError::Config(e.to_string()))?;

        Ok(Confdir { config })
    }

    /// Use an explicit data directory, bypassing the global config.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Confdir {
            config: ConfdirConfig { data_dir: dir.into() },
        }
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the data directory path in display-friendly form, keeping
    /// `~` instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    /// One eager load of every source file in the data directory.
    ///
    /// Individual files degrade to empty data when missing or malformed;
    /// only a missing directory or an invalid program.toml is an error.
    pub fn sources(&self) -> ConfdirResult<RawSources> {
        let dir = self.data_path();
        if !dir.is_dir() {
            return Err(ConfdirError::DataDirNotFound(
                self.display_path().to_string_lossy().into_owned(),
            ));
        }

        let config = ProgramConfig::load(&dir)?;

        Ok(RawSources {
            structured: sessions::load(&read_or_empty(&dir.join("sessions.json"))),
            bundles: load_bundles(&dir.join("abstracts")),
            contributed: contributed::load(&read_or_empty(&dir.join("contributed.csv"))),
            participants: directory::load_participants(&read_or_empty(
                &dir.join("participants.json"),
            )),
            posters: directory::load_posters(&read_or_empty(&dir.join("posters.json"))),
            config,
        })
    }
}

/// Read a file, treating a missing or unreadable one as empty input.
fn read_or_empty(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

/// Abstract bundles in sorted filename order, one document per .json file.
fn load_bundles(dir: &Path) -> Vec<AbstractBundle> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    paths
        .iter()
        .filter_map(|path| abstracts::load(&read_or_empty(path)))
        .collect()
}
