//! Serde wire records for the JSON sources.
//!
//! These mirror the upstream file shapes loosely: every field is optional,
//! the title field accepts both its spellings, and malformed timestamps
//! degrade to `None` instead of failing the whole document.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use crate::model::{Speaker, Talk};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SpeakerRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
}

impl SpeakerRecord {
    pub fn into_speaker(self) -> Speaker {
        Speaker {
            name: self.name,
            affiliation: self.affiliation,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TalkRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub speakers: Vec<SpeakerRecord>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default, deserialize_with = "de_opt_datetime")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_opt_datetime")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancelled: bool,
}

impl TalkRecord {
    pub fn into_talk(self) -> Talk {
        Talk {
            title: self.title,
            speakers: self
                .speakers
                .into_iter()
                .map(SpeakerRecord::into_speaker)
                .collect(),
            abstract_text: self.abstract_text,
            start: self.start,
            end: self.end,
            cancelled: self.cancelled,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SessionRecord {
    #[serde(default, deserialize_with = "de_opt_datetime")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_opt_datetime")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub chair: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub talks: Vec<TalkRecord>,
}

/// One structured schedule entry. `sessions` is the current shape; a bare
/// `talks` list is the legacy shape the loader wraps in one session.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MinisymposiumRecord {
    #[serde(default, alias = "minisymposium_title")]
    pub title: String,
    #[serde(default)]
    pub organizers: Vec<SpeakerRecord>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub day: Option<NaiveDate>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub talks: Vec<TalkRecord>,
}

/// One abstract-bundle document (also the poster listing shape).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BundleRecord {
    #[serde(default, alias = "minisymposium_title")]
    pub title: String,
    #[serde(default)]
    pub organizers: Vec<SpeakerRecord>,
    #[serde(default)]
    pub talks: Vec<TalkRecord>,
}

/// RFC 3339 timestamp, or `None` for anything absent or unparseable.
pub(crate) fn de_opt_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}

/// `YYYY-MM-DD` date, or `None` for anything absent or unparseable.
pub(crate) fn de_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn talk_record_fills_missing_fields() {
        let talk: TalkRecord = serde_json::from_str(r#"{"title": "Foo"}"#).unwrap();
        let talk = talk.into_talk();

        assert_eq!(talk.title, "Foo");
        assert!(talk.speakers.is_empty());
        assert_eq!(talk.abstract_text, "");
        assert_eq!(talk.start, None);
        assert!(!talk.cancelled);
    }

    #[test]
    fn talk_record_parses_timestamps_and_abstract() {
        let talk: TalkRecord = serde_json::from_str(
            r#"{
                "title": "Foo",
                "abstract": "On foo.",
                "start": "2026-07-14T09:00:00Z",
                "end": "not a timestamp"
            }"#,
        )
        .unwrap();

        assert_eq!(talk.abstract_text, "On foo.");
        assert_eq!(
            talk.start,
            Some(Utc.with_ymd_and_hms(2026, 7, 14, 9, 0, 0).unwrap())
        );
        assert_eq!(talk.end, None);
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let talk: TalkRecord =
            serde_json::from_str(r#"{"title": "Foo", "start": "2026-07-14T11:00:00+02:00"}"#)
                .unwrap();

        assert_eq!(
            talk.start,
            Some(Utc.with_ymd_and_hms(2026, 7, 14, 9, 0, 0).unwrap())
        );
    }

    #[test]
    fn minisymposium_title_spellings() {
        let a: MinisymposiumRecord =
            serde_json::from_str(r#"{"minisymposium_title": "Graph Theory"}"#).unwrap();
        let b: MinisymposiumRecord = serde_json::from_str(r#"{"title": "Graph Theory"}"#).unwrap();

        assert_eq!(a.title, "Graph Theory");
        assert_eq!(b.title, "Graph Theory");
    }

    #[test]
    fn day_is_lenient() {
        let record: MinisymposiumRecord =
            serde_json::from_str(r#"{"title": "X", "day": "2026-07-15"}"#).unwrap();
        assert_eq!(
            record.day,
            Some(chrono::NaiveDate::from_ymd_opt(2026, 7, 15).unwrap())
        );

        let bad: MinisymposiumRecord =
            serde_json::from_str(r#"{"title": "X", "day": "July 15th"}"#).unwrap();
        assert_eq!(bad.day, None);
    }
}
