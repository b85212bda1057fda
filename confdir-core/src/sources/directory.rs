//! Directory listings: participants and posters.
//!
//! These are consumed by the presentation layer as-is; they do not feed
//! the merge pipeline.

use serde::{Deserialize, Serialize};

use crate::model::Talk;

use super::record::{BundleRecord, TalkRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub plenary: bool,
    #[serde(default, rename = "localOrganizer")]
    pub local_organizer: bool,
}

/// Posters grouped by topic, same document shape as an abstract bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterGroup {
    pub title: String,
    pub talks: Vec<Talk>,
}

/// Parse the participants listing. Malformed input degrades to empty.
pub fn load_participants(json: &str) -> Vec<Participant> {
    serde_json::from_str(json).unwrap_or_default()
}

/// Parse the posters listing. Malformed input degrades to empty.
pub fn load_posters(json: &str) -> Vec<PosterGroup> {
    let records: Vec<BundleRecord> = serde_json::from_str(json).unwrap_or_default();
    records
        .into_iter()
        .map(|record| PosterGroup {
            title: record.title,
            talks: record
                .talks
                .into_iter()
                .map(TalkRecord::into_talk)
                .collect(),
        })
        .collect()
}
