//! Programme model types.
//!
//! These types represent the merged conference programme in a
//! source-agnostic way. The loaders normalize their inputs into talks and
//! draft records, the merger produces `Minisymposium` values with final
//! ids, and everything downstream (rendering, ICS export, lookup) works
//! exclusively with these types.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// A speaker or organizer. There is no global person identity; equality is
/// by name text within a single rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub affiliation: String,
}

/// A single talk. Identity is derived, not stored: `talk.slug()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    pub title: String,
    pub speakers: Vec<Speaker>,
    pub abstract_text: String,
    /// Absolute start instant; `None` when the source carries no timing.
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub cancelled: bool,
}

impl Talk {
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Comma-joined speaker names, e.g. for ICS summaries.
    pub fn speaker_names(&self) -> String {
        self.speakers
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A contiguous time block of talks within a minisymposium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Always `"<minisymposium id>-S<1-based index>"`, assigned after the
    /// parent's final id is known.
    pub id: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub chair: Option<String>,
    pub room: Option<String>,
    pub talks: Vec<Talk>,
}

impl Session {
    /// Declared start, else the earliest talk start in this session.
    pub fn start_bound(&self) -> Option<DateTime<Utc>> {
        self.start
            .or_else(|| self.talks.iter().filter_map(|t| t.start).min())
    }

    /// Declared end, else the latest talk end in this session.
    pub fn end_bound(&self) -> Option<DateTime<Utc>> {
        self.end
            .or_else(|| self.talks.iter().filter_map(|t| t.end).max())
    }
}

/// A themed cluster of talks with shared organizers, scheduled as one or
/// more sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Minisymposium {
    /// `MS<n>` assigned sequentially in merge order, or a reserved
    /// contributed-talks code such as `CT`.
    pub id: String,
    pub title: String,
    pub organizers: Vec<Speaker>,
    /// Display day: the earliest UTC calendar date among session/talk
    /// starts, with declared-day and configured fallbacks.
    pub day: NaiveDate,
    pub room: Option<String>,
    /// IANA zone name; a display-only concern (storage is UTC).
    pub timezone: String,
    pub sessions: Vec<Session>,
}

impl Minisymposium {
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Parsed display timezone, if the declared name is a known IANA zone.
    pub fn tz(&self) -> Option<Tz> {
        self.timezone.parse().ok()
    }

    pub fn talk_count(&self) -> usize {
        self.sessions.iter().map(|s| s.talks.len()).sum()
    }
}

/// The merged programme: minisymposia in final display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub minisymposia: Vec<Minisymposium>,
}

impl Program {
    /// Find a minisymposium by title slug.
    pub fn find(&self, slug: &str) -> Option<&Minisymposium> {
        self.minisymposia.iter().find(|ms| ms.slug() == slug)
    }

    pub fn is_empty(&self) -> bool {
        self.minisymposia.is_empty()
    }

    pub fn len(&self) -> usize {
        self.minisymposia.len()
    }
}
