//! Per-data-directory programme settings.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConfdirError, ConfdirResult};
use crate::slug::slugify;

/// Configuration stored in the data directory's program.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ProgramConfig {
    /// Display day for entries with no timestamp and no declared day.
    /// Unset, this is the Unix epoch date; deployments set the real
    /// conference opening day.
    pub fallback_day: NaiveDate,
    /// Default IANA zone name for entries that do not declare one.
    pub timezone: String,
    pub contributed: Vec<ContributedGroupConfig>,
    pub exclusions: Exclusions,
}

/// One contributed-talks group, filled from table rows at merge time.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ContributedGroupConfig {
    /// Reserved id code, kept verbatim through merge (never reassigned).
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub slots: Vec<SlotConfig>,
}

impl ContributedGroupConfig {
    /// Total number of talks this group can hold.
    pub fn capacity(&self) -> usize {
        self.slots.iter().map(|s| s.capacity).sum()
    }
}

/// A fixed-capacity session slot within a contributed group.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SlotConfig {
    pub capacity: usize,
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub room: Option<String>,
}

/// Contributed rows already promoted into a structured minisymposium by
/// hand; matching rows are dropped from the contributed group so the same
/// talk never appears twice.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Exclusions {
    pub titles: Vec<String>,
    pub speakers: Vec<String>,
}

impl Exclusions {
    /// Titles match on slug, so punctuation and case differences between
    /// the table and the list do not defeat the exclusion.
    pub fn matches_title(&self, title: &str) -> bool {
        let slug = slugify(title);
        !slug.is_empty() && self.titles.iter().any(|t| slugify(t) == slug)
    }

    /// Speaker names match trimmed and case-insensitively. A blank name
    /// never matches.
    pub fn matches_speaker(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        !needle.is_empty()
            && self
                .speakers
                .iter()
                .any(|s| s.trim().to_lowercase() == needle)
    }
}

fn default_slot() -> SlotConfig {
    SlotConfig {
        capacity: 8,
        start: None,
        end: None,
        room: None,
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            fallback_day: NaiveDate::default(),
            timezone: "UTC".to_string(),
            contributed: vec![ContributedGroupConfig {
                code: "CT".to_string(),
                title: "Contributed Talks".to_string(),
                slots: vec![default_slot(), default_slot()],
            }],
            exclusions: Exclusions::default(),
        }
    }
}

impl ProgramConfig {
    /// Load config from program.toml in the data directory.
    pub fn load(data_dir: &Path) -> ConfdirResult<Self> {
        let path = data_dir.join("program.toml");

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: ProgramConfig =
                toml::from_str(&content).map_err(|e| ConfdirError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}
