use anyhow::Result;
use confdir_core::sources::RawSources;
use owo_colors::OwoColorize;

pub fn run(sources: &RawSources, filter: Option<&str>) -> Result<()> {
    let needle = filter.map(str::to_lowercase);

    let mut shown = 0;
    for group in &sources.posters {
        let group_matches = needle
            .as_ref()
            .map_or(true, |n| group.title.to_lowercase().contains(n));

        let posters: Vec<_> = group
            .talks
            .iter()
            .filter(|t| {
                group_matches
                    || needle
                        .as_ref()
                        .map_or(true, |n| t.title.to_lowercase().contains(n))
            })
            .collect();
        if posters.is_empty() {
            continue;
        }

        if shown > 0 {
            println!();
        }
        println!("{}", group.title.bold());
        for poster in posters {
            let mut line = format!("  {}", poster.title);
            if !poster.speakers.is_empty() {
                let names: Vec<&str> = poster.speakers.iter().map(|s| s.name.as_str()).collect();
                line.push_str(&format!(
                    "  {}",
                    format!("({})", names.join(", ")).dimmed()
                ));
            }
            println!("{}", line);
            shown += 1;
        }
    }

    if shown == 0 {
        println!("{}", "No posters found".dimmed());
    }

    Ok(())
}
