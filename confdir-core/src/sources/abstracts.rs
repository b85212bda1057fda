//! Abstract-bundle loader.

use crate::model::{Speaker, Talk};
use crate::slug::slugify;

use super::record::{BundleRecord, SpeakerRecord, TalkRecord};
use super::{DraftMinisymposium, DraftSession};

/// One per-topic document: a minisymposium's organizers and talk
/// abstracts, with no timing information.
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractBundle {
    /// Normalized-title key, matched against structured entries.
    pub key: String,
    pub title: String,
    pub organizers: Vec<Speaker>,
    pub talks: Vec<Talk>,
}

/// Parse one bundle document. Malformed input skips the file.
pub fn load(json: &str) -> Option<AbstractBundle> {
    let record: BundleRecord = serde_json::from_str(json).ok()?;
    Some(AbstractBundle {
        key: slugify(&record.title),
        title: record.title,
        organizers: record
            .organizers
            .into_iter()
            .map(SpeakerRecord::into_speaker)
            .collect(),
        talks: record.talks.into_iter().map(TalkRecord::into_talk).collect(),
    })
}

impl AbstractBundle {
    /// Standalone draft for a bundle with no structured schedule entry:
    /// a single session with placeholder timing and untimed talks.
    pub fn into_draft(self) -> DraftMinisymposium {
        DraftMinisymposium {
            key: self.key,
            title: self.title,
            organizers: self.organizers,
            declared_day: None,
            room: None,
            timezone: None,
            sessions: vec![DraftSession {
                start: None,
                end: None,
                chair: None,
                room: None,
                talks: self.talks,
            }],
            reserved_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bundle() {
        let bundle = load(
            r#"{
                "minisymposium_title": "Spectral Methods",
                "organizers": [{"name": "Emmy Noether", "affiliation": "FAU"}],
                "talks": [
                    {"title": "Eigenvalues", "abstract": "All of them.", "cancelled": true},
                    {"title": "Eigenvectors"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(bundle.key, "spectral-methods");
        assert_eq!(bundle.organizers.len(), 1);
        assert_eq!(bundle.talks.len(), 2);
        assert!(bundle.talks[0].cancelled);
        assert_eq!(bundle.talks[0].abstract_text, "All of them.");
    }

    #[test]
    fn malformed_bundle_is_skipped() {
        assert!(load("[1, 2]").is_none());
        assert!(load("").is_none());
    }

    #[test]
    fn standalone_draft_gets_one_placeholder_session() {
        let bundle = load(r#"{"title": "Solo", "talks": [{"title": "Only talk"}]}"#).unwrap();
        let draft = bundle.into_draft();

        assert_eq!(draft.key, "solo");
        assert_eq!(draft.sessions.len(), 1);
        assert_eq!(draft.sessions[0].start, None);
        assert_eq!(draft.sessions[0].talks[0].start, None);
        assert_eq!(draft.earliest_start(), None);
    }
}
