use std::path::{Path, PathBuf};

use anyhow::Result;
use confdir_core::ics;
use confdir_core::merge::merge;
use confdir_core::sources::RawSources;

pub fn run(
    sources: &RawSources,
    ms_arg: &str,
    session: Option<usize>,
    out: Option<&Path>,
) -> Result<()> {
    let program = merge(sources);

    let ms = match program.find(ms_arg).or_else(|| {
        program
            .minisymposia
            .iter()
            .find(|m| m.id.eq_ignore_ascii_case(ms_arg))
    }) {
        Some(ms) => ms,
        None => {
            let available: Vec<String> = program
                .minisymposia
                .iter()
                .map(|m| format!("{} ({})", m.slug(), m.id))
                .collect();
            anyhow::bail!(
                "Minisymposium '{}' not found. Available: {}",
                ms_arg,
                available.join(", ")
            );
        }
    };
    let base = if ms.slug().is_empty() {
        ms.id.to_lowercase()
    } else {
        ms.slug()
    };

    let (content, default_name) = match session {
        Some(ordinal) => {
            let index = ordinal
                .checked_sub(1)
                .filter(|i| *i < ms.sessions.len())
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Session {} not found, '{}' has {} session(s)",
                        ordinal,
                        ms.title,
                        ms.sessions.len()
                    )
                })?;
            (
                ics::export_session(ms, &ms.sessions[index], index),
                format!("{}-s{}.ics", base, ordinal),
            )
        }
        None => (ics::export_minisymposium(ms), format!("{}.ics", base)),
    };

    let path = match out {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_name),
    };

    std::fs::write(&path, content)?;
    println!("Wrote {}", path.display());

    Ok(())
}
