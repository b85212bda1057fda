use anyhow::Result;
use confdir_core::lookup::{TalkEntry, TalkIndex, TalkLookup};
use confdir_core::sources::RawSources;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(sources: &RawSources, slug: &str, ms: Option<&str>) -> Result<()> {
    let index = TalkIndex::build(sources);

    match index.find(slug, ms) {
        TalkLookup::Found(entry) => print_talk(&entry),
        TalkLookup::AmbiguousDefault { entry, candidates } => {
            println!(
                "{}",
                format!(
                    "{} talks share this slug; showing the first. \
                    Pass --ms <minisymposium-slug> to pick another.",
                    candidates
                )
                .yellow()
            );
            println!();
            print_talk(&entry);
        }
        TalkLookup::NotFound => {
            println!("{}", format!("No talk found for '{}'", slug).dimmed());
        }
    }

    Ok(())
}

fn print_talk(entry: &TalkEntry) {
    let talk = &entry.talk;

    print!("{}", talk.title.bold());
    if talk.cancelled {
        print!("  {}", "[CANCELLED]".red());
    }
    println!();
    println!("{}", format!("in {}", entry.minisymposium_title).dimmed());

    if !talk.speakers.is_empty() {
        println!();
        for speaker in &talk.speakers {
            println!("  {}", speaker.render());
        }
    }

    if let (Some(start), Some(end)) = (talk.start, talk.end) {
        println!();
        println!(
            "  {}",
            format!(
                "{} - {} UTC",
                start.format("%Y-%m-%d %H:%M"),
                end.format("%H:%M")
            )
            .dimmed()
        );
    }

    if !talk.abstract_text.is_empty() {
        println!();
        println!("{}", talk.abstract_text);
    }
}
