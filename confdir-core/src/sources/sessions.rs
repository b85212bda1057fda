//! Structured schedule loader.

use crate::slug::slugify;

use super::record::{MinisymposiumRecord, SessionRecord, SpeakerRecord, TalkRecord};
use super::{DraftMinisymposium, DraftSession};

/// Parse the structured schedule (a JSON list of minisymposium records).
/// Malformed input degrades to no records.
pub fn load(json: &str) -> Vec<DraftMinisymposium> {
    let records: Vec<MinisymposiumRecord> = serde_json::from_str(json).unwrap_or_default();
    records.into_iter().map(normalize).collect()
}

fn normalize(record: MinisymposiumRecord) -> DraftMinisymposium {
    let sessions: Vec<DraftSession> = if !record.sessions.is_empty() {
        record.sessions.into_iter().map(into_session).collect()
    } else if !record.talks.is_empty() {
        // Legacy shape: a flat talk list becomes one session with
        // placeholder timing.
        vec![DraftSession {
            start: None,
            end: None,
            chair: None,
            room: None,
            talks: record.talks.into_iter().map(TalkRecord::into_talk).collect(),
        }]
    } else {
        vec![]
    };

    DraftMinisymposium {
        key: slugify(&record.title),
        title: record.title,
        organizers: record
            .organizers
            .into_iter()
            .map(SpeakerRecord::into_speaker)
            .collect(),
        declared_day: record.day,
        room: record.room,
        timezone: record.timezone,
        sessions,
        reserved_code: None,
    }
}

fn into_session(record: SessionRecord) -> DraftSession {
    DraftSession {
        start: record.start,
        end: record.end,
        chair: record.chair,
        room: record.room,
        talks: record.talks.into_iter().map(TalkRecord::into_talk).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_sessions_shape() {
        let drafts = load(
            r#"[{
                "minisymposium_title": "Graph Theory",
                "organizers": [{"name": "Ada Lovelace", "affiliation": "LMU"}],
                "day": "2026-07-14",
                "room": "HS 1",
                "timezone": "Europe/Berlin",
                "sessions": [{
                    "start": "2026-07-14T09:00:00Z",
                    "end": "2026-07-14T12:00:00Z",
                    "chair": "Kurt",
                    "talks": [{"title": "On graphs"}]
                }]
            }]"#,
        );

        assert_eq!(drafts.len(), 1);
        let draft = &drafts[0];
        assert_eq!(draft.key, "graph-theory");
        assert_eq!(draft.organizers[0].name, "Ada Lovelace");
        assert_eq!(draft.declared_day.map(|d| d.to_string()).as_deref(), Some("2026-07-14"));
        assert_eq!(draft.sessions.len(), 1);
        assert_eq!(draft.sessions[0].chair.as_deref(), Some("Kurt"));
        assert_eq!(draft.sessions[0].talks[0].title, "On graphs");
        assert_eq!(draft.reserved_code, None);
    }

    #[test]
    fn legacy_talks_become_one_placeholder_session() {
        let drafts = load(
            r#"[{
                "title": "Old Style",
                "talks": [{"title": "A"}, {"title": "B"}]
            }]"#,
        );

        assert_eq!(drafts[0].sessions.len(), 1);
        let session = &drafts[0].sessions[0];
        assert_eq!(session.start, None);
        assert_eq!(session.end, None);
        assert_eq!(session.talks.len(), 2);
    }

    #[test]
    fn record_without_talks_keeps_no_sessions() {
        let drafts = load(r#"[{"title": "Empty"}]"#);
        assert!(drafts[0].sessions.is_empty());
        assert_eq!(drafts[0].earliest_start(), None);
    }

    #[test]
    fn malformed_input_degrades_to_empty() {
        assert!(load("not json").is_empty());
        assert!(load(r#"{"title": "not a list"}"#).is_empty());
    }
}
