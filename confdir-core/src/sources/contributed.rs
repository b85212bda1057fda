//! Contributed-talks table loader.
//!
//! The table is one flat CSV, one row per submission. Columns are found by
//! header name (slug-matched, so "First Name" and "first_name" both work),
//! not by position.

use csv::ReaderBuilder;

use crate::model::{Speaker, Talk};
use crate::program_config::{ContributedGroupConfig, Exclusions};
use crate::slug::slugify;

use super::{DraftMinisymposium, DraftSession};

/// One submission row. Rows with an empty title are discarded at parse
/// time; the speaker list has zero or one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributedRow {
    pub title: String,
    pub speakers: Vec<Speaker>,
    pub abstract_text: String,
    pub cancelled: bool,
}

/// Parse the contributed-talks table. Malformed input degrades to no rows.
pub fn load(csv_text: &str) -> Vec<ContributedRow> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(_) => return vec![],
    };
    let column = |name: &str| headers.iter().position(|h| slugify(h) == name);

    let title_col = match column("title") {
        Some(col) => col,
        None => return vec![],
    };
    let first_col = column("first-name");
    let last_col = column("last-name");
    let affiliation_col = column("affiliation");
    let abstract_col = column("abstract");
    // Free-text presentation-type column, only consulted for the
    // cancellation marker.
    let kind_col = headers
        .iter()
        .position(|h| slugify(h).contains("presentation"));

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(_) => continue,
        };
        let field = |col: Option<usize>| {
            col.and_then(|i| record.get(i))
                .unwrap_or_default()
                .trim()
                .to_string()
        };

        let title = field(Some(title_col));
        if title.is_empty() {
            continue;
        }

        let name = format!("{} {}", field(first_col), field(last_col))
            .trim()
            .to_string();
        let speakers = if name.is_empty() {
            vec![]
        } else {
            vec![Speaker {
                name,
                affiliation: field(affiliation_col),
            }]
        };

        rows.push(ContributedRow {
            title,
            speakers,
            abstract_text: field(abstract_col),
            cancelled: field(kind_col).contains("CANCELLED"),
        });
    }
    rows
}

/// Fill the configured fixed-capacity slots with table rows, skipping
/// exclusion-listed rows (they were promoted into a structured
/// minisymposium by hand). Rows beyond the total capacity are dropped, and
/// groups that receive no rows produce no draft.
pub fn build_groups(
    rows: &[ContributedRow],
    groups: &[ContributedGroupConfig],
    exclusions: &Exclusions,
) -> Vec<DraftMinisymposium> {
    let mut remaining = rows.iter().filter(|row| {
        !exclusions.matches_title(&row.title)
            && !row
                .speakers
                .iter()
                .any(|s| exclusions.matches_speaker(&s.name))
    });

    let mut drafts = Vec::new();
    for group in groups {
        let mut sessions = Vec::new();
        for slot in &group.slots {
            if slot.capacity == 0 {
                continue;
            }
            let talks: Vec<Talk> = remaining
                .by_ref()
                .take(slot.capacity)
                .map(ContributedRow::to_talk)
                .collect();
            if talks.is_empty() {
                break;
            }
            sessions.push(DraftSession {
                start: slot.start,
                end: slot.end,
                chair: None,
                room: slot.room.clone(),
                talks,
            });
        }
        if sessions.is_empty() {
            continue;
        }
        drafts.push(DraftMinisymposium {
            key: slugify(&group.title),
            title: group.title.clone(),
            organizers: vec![],
            declared_day: None,
            room: None,
            timezone: None,
            sessions,
            reserved_code: Some(group.code.clone()),
        });
    }
    drafts
}

impl ContributedRow {
    /// Untimed talk; timing comes from the slot the row lands in.
    fn to_talk(&self) -> Talk {
        Talk {
            title: self.title.clone(),
            speakers: self.speakers.clone(),
            abstract_text: self.abstract_text.clone(),
            start: None,
            end: None,
            cancelled: self.cancelled,
        }
    }
}
