use anyhow::Result;
use confdir_core::sources::{Participant, RawSources};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(sources: &RawSources, filter: Option<&str>) -> Result<()> {
    let needle = filter.map(str::to_lowercase);

    let matching: Vec<&Participant> = sources
        .participants
        .iter()
        .filter(|p| {
            needle.as_ref().map_or(true, |n| {
                p.name.to_lowercase().contains(n) || p.affiliation.to_lowercase().contains(n)
            })
        })
        .collect();

    if matching.is_empty() {
        println!("{}", "No participants found".dimmed());
        return Ok(());
    }

    for participant in &matching {
        println!("{}", participant.render());
    }

    println!();
    println!(
        "{}",
        format!("{} of {} participants", matching.len(), sources.participants.len()).dimmed()
    );

    Ok(())
}
