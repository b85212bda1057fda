//! TUI rendering for confdir types.
//!
//! This module provides an extension trait that adds colored terminal
//! rendering to confdir-core types using owo_colors, plus line helpers
//! for the timed parts of the programme. Times render in the
//! minisymposium's declared timezone when it is a known IANA zone.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use confdir_core::model::{Minisymposium, Session, Speaker, Talk};
use confdir_core::sources::Participant;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Minisymposium {
    fn render(&self) -> String {
        let code = format!("{:>4}", self.id);
        let mut line = format!("{}  {}", code.green(), self.title.bold());
        if !self.organizers.is_empty() {
            let names: Vec<&str> = self.organizers.iter().map(|o| o.name.as_str()).collect();
            line.push_str(&format!(
                "  {}",
                format!("({})", names.join(", ")).dimmed()
            ));
        }
        if let Some(room) = &self.room {
            line.push_str(&format!("  {}", room.cyan()));
        }
        line
    }
}

impl Render for Speaker {
    fn render(&self) -> String {
        if self.affiliation.is_empty() {
            self.name.clone()
        } else {
            format!(
                "{} {}",
                self.name,
                format!("({})", self.affiliation).dimmed()
            )
        }
    }
}

impl Render for Participant {
    fn render(&self) -> String {
        let mut line = self.name.clone();
        if !self.affiliation.is_empty() {
            line.push_str(&format!(
                "  {}",
                format!("({})", self.affiliation).dimmed()
            ));
        }
        if self.plenary {
            line.push_str(&format!("  {}", "plenary".yellow()));
        }
        if self.local_organizer {
            line.push_str(&format!("  {}", "local organizer".cyan()));
        }
        line
    }
}

/// Bold day header, e.g. "Tuesday, July 14".
pub fn day_header(day: NaiveDate) -> String {
    day.format("%A, %B %-d").to_string().bold().to_string()
}

/// Session line: id, time range, room, chair.
pub fn session_line(session: &Session, tz: Option<Tz>) -> String {
    let mut line = format!(
        "{}  {}",
        session.id.green(),
        time_range(session.start_bound(), session.end_bound(), tz)
    );
    if let Some(room) = &session.room {
        line.push_str(&format!("  {}", room.cyan()));
    }
    if let Some(chair) = &session.chair {
        line.push_str(&format!("  {}", format!("chair: {}", chair).dimmed()));
    }
    line
}

/// Talk line: start time, title, speakers, cancellation tag.
pub fn talk_line(talk: &Talk, tz: Option<Tz>) -> String {
    let time = format!(
        "{:>5}",
        talk.start
            .map(|s| format_time(s, tz))
            .unwrap_or_else(|| "--:--".to_string())
    );

    let mut line = format!("{}  {}", time.dimmed(), talk.title);
    if !talk.speakers.is_empty() {
        let names: Vec<&str> = talk.speakers.iter().map(|s| s.name.as_str()).collect();
        line.push_str(&format!(
            "  {}",
            format!("({})", names.join(", ")).dimmed()
        ));
    }
    if talk.cancelled {
        line.push_str(&format!("  {}", "[CANCELLED]".red()));
    }
    line
}

/// Format "09:00-12:00", degrading when bounds are missing.
pub fn time_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    tz: Option<Tz>,
) -> String {
    match (start, end) {
        (Some(start), Some(end)) => {
            format!("{}-{}", format_time(start, tz), format_time(end, tz))
        }
        (Some(start), None) => format_time(start, tz),
        _ => "time tbd".to_string(),
    }
}

fn format_time(instant: DateTime<Utc>, tz: Option<Tz>) -> String {
    match tz {
        Some(tz) => instant.with_timezone(&tz).format("%H:%M").to_string(),
        None => instant.format("%H:%M").to_string(),
    }
}
