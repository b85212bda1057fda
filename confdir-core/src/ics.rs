//! Calendar export.
//!
//! Renders a minisymposium (or a single session of one) as an iCalendar
//! document: one VEVENT per session followed by one VEVENT per talk, as a
//! flat sequence. Timestamps are absolute UTC instants; the declared
//! display timezone never reaches the document. The exporter only returns
//! text; writing files is the caller's concern.

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike, Property};

use crate::model::{Minisymposium, Session, Talk};

/// Export every session of a minisymposium as one calendar document.
pub fn export_minisymposium(ms: &Minisymposium) -> String {
    let mut cal = Calendar::new();
    cal.append_property(Property::new("X-WR-CALNAME", &ms.title));

    let stamp = Utc::now();
    for (index, session) in ms.sessions.iter().enumerate() {
        push_session(&mut cal, ms, session, index, stamp);
    }

    finish(cal)
}

/// Export one session on its own. `index` is the session's 0-based
/// position; ordinals render as `Session <index + 1>`.
pub fn export_session(ms: &Minisymposium, session: &Session, index: usize) -> String {
    let mut cal = Calendar::new();
    cal.append_property(Property::new(
        "X-WR-CALNAME",
        format!("{} (Session {})", ms.title, index + 1),
    ));

    push_session(&mut cal, ms, session, index, Utc::now());
    finish(cal)
}

fn push_session(
    cal: &mut Calendar,
    ms: &Minisymposium,
    session: &Session,
    index: usize,
    stamp: DateTime<Utc>,
) {
    // Declared bounds, else bounds inferred from the talks, else a
    // placeholder working day on the display day.
    let start = session
        .start_bound()
        .unwrap_or_else(|| ms.day.and_hms_opt(9, 0, 0).unwrap().and_utc());
    let end = session
        .end_bound()
        .unwrap_or_else(|| ms.day.and_hms_opt(17, 0, 0).unwrap().and_utc());

    let mut event = icalendar::Event::new();
    event.uid(&format!("{}@confdir", session.id));
    event.summary(&format!("{} (Session {})", ms.title, index + 1));
    event.add_property("DTSTAMP", stamp.format("%Y%m%dT%H%M%SZ").to_string());
    add_utc_property(&mut event, "DTSTART", start);
    add_utc_property(&mut event, "DTEND", end);
    if let Some(room) = session.room.as_deref().or(ms.room.as_deref()) {
        event.location(room);
    }
    cal.push(event.done());

    for (talk_index, talk) in session.talks.iter().enumerate() {
        cal.push(talk_event(session, talk, talk_index, start, end, stamp));
    }
}

fn talk_event(
    session: &Session,
    talk: &Talk,
    talk_index: usize,
    session_start: DateTime<Utc>,
    session_end: DateTime<Utc>,
    stamp: DateTime<Utc>,
) -> icalendar::Event {
    let mut event = icalendar::Event::new();
    event.uid(&format!("{}-T{}@confdir", session.id, talk_index + 1));

    let summary = if talk.speakers.is_empty() {
        talk.title.clone()
    } else {
        format!("{} ({})", talk.title, talk.speaker_names())
    };
    event.summary(&summary);

    event.add_property("DTSTAMP", stamp.format("%Y%m%dT%H%M%SZ").to_string());
    // Untimed talks inherit the session bounds.
    add_utc_property(&mut event, "DTSTART", talk.start.unwrap_or(session_start));
    add_utc_property(&mut event, "DTEND", talk.end.unwrap_or(session_end));

    if !talk.abstract_text.is_empty() {
        event.description(&talk.abstract_text);
    }
    if talk.cancelled {
        event.add_property("STATUS", "CANCELLED");
    }

    event.done()
}

/// UTC datetime with Z suffix.
fn add_utc_property(event: &mut icalendar::Event, name: &str, instant: DateTime<Utc>) {
    event.add_property(name, instant.format("%Y%m%dT%H%M%SZ").to_string());
}

fn finish(mut cal: Calendar) -> String {
    let cal = cal.done();
    strip_ics_bloat(&cal.to_string())
}

/// Clean up ICS output from the icalendar crate's serializer
/// - Replace PRODID with CONFDIR
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:CONFDIR\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
