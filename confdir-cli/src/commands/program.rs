use anyhow::Result;
use chrono::NaiveDate;
use confdir_core::merge::merge;
use confdir_core::model::Minisymposium;
use confdir_core::sources::RawSources;
use owo_colors::OwoColorize;

use crate::render::{Render, day_header, session_line, talk_line};

pub fn run(
    sources: &RawSources,
    day: Option<&str>,
    filter: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let program = merge(sources);

    let day_filter = match day {
        Some(text) => Some(
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|_| anyhow::anyhow!("Invalid day '{}', expected YYYY-MM-DD", text))?,
        ),
        None => None,
    };
    let needle = filter.map(str::to_lowercase);

    let mut entries: Vec<&Minisymposium> = program
        .minisymposia
        .iter()
        .filter(|ms| day_filter.map_or(true, |d| ms.day == d))
        .filter(|ms| {
            needle
                .as_ref()
                .map_or(true, |n| ms.title.to_lowercase().contains(n))
        })
        .collect();

    if entries.is_empty() {
        println!("{}", "No minisymposia found".dimmed());
        return Ok(());
    }

    // Group by day, keeping merge order within each day.
    entries.sort_by_key(|ms| ms.day);

    let mut current_day: Option<NaiveDate> = None;
    for ms in entries {
        if current_day != Some(ms.day) {
            if current_day.is_some() {
                println!();
            }
            println!("{}", day_header(ms.day));
            current_day = Some(ms.day);
        }

        println!("  {}", ms.render());

        if verbose {
            let tz = ms.tz();
            for session in &ms.sessions {
                println!("       {}", session_line(session, tz));
                for talk in &session.talks {
                    println!("         {}", talk_line(talk, tz));
                }
            }
        }
    }

    Ok(())
}
