//! Source loaders for the conference data directory.
//!
//! Three independent loaders produce normalized draft records:
//! - `sessions`: the structured schedule (`sessions.json`)
//! - `abstracts`: per-topic abstract bundles (`abstracts/*.json`)
//! - `contributed`: the contributed-talks table (`contributed.csv`)
//!
//! plus the directory listings (`participants.json`, `posters.json`)
//! consumed by the presentation layer directly. Loaders degrade to empty
//! output on missing or malformed input; loading never fails fatally.

pub mod abstracts;
pub mod contributed;
pub mod directory;
mod record;
pub mod sessions;

pub use abstracts::AbstractBundle;
pub use contributed::ContributedRow;
pub use directory::{Participant, PosterGroup};

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{Speaker, Talk};
use crate::program_config::ProgramConfig;

/// Everything read from a data directory in one eager pass. A plain
/// snapshot, so the merger and the lookup index stay testable with
/// synthetic inputs.
#[derive(Debug, Clone, Default)]
pub struct RawSources {
    pub structured: Vec<DraftMinisymposium>,
    /// Abstract bundles in filename order.
    pub bundles: Vec<AbstractBundle>,
    pub contributed: Vec<ContributedRow>,
    pub participants: Vec<Participant>,
    pub posters: Vec<PosterGroup>,
    pub config: ProgramConfig,
}

/// A minisymposium before final id assignment. Drafts deliberately carry
/// no id field; codes exist only on the merged `Minisymposium`, so a
/// provisional id can never leak into display or export.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftMinisymposium {
    /// Normalized-title key for de-duplication and organizer matching.
    pub key: String,
    pub title: String,
    pub organizers: Vec<Speaker>,
    /// Hand-authored day from the source record, if any.
    pub declared_day: Option<NaiveDate>,
    pub room: Option<String>,
    pub timezone: Option<String>,
    pub sessions: Vec<DraftSession>,
    /// Fixed code for contributed groups, kept verbatim through merge.
    /// `None` for entries that get a sequential code.
    pub reserved_code: Option<String>,
}

impl DraftMinisymposium {
    /// Earliest start instant among this draft's sessions and talks.
    pub fn earliest_start(&self) -> Option<DateTime<Utc>> {
        self.sessions
            .iter()
            .flat_map(|s| s.talks.iter().filter_map(|t| t.start).chain(s.start))
            .min()
    }
}

/// A session block before its id exists.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSession {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub chair: Option<String>,
    pub room: Option<String>,
    pub talks: Vec<Talk>,
}
