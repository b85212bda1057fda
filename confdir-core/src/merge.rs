//! Programme merger.
//!
//! Combines the three loaded sources into one ordered programme:
//! structured entries, then abstract-only entries, then contributed
//! groups. Final codes are assigned in a single walk at the very end, so
//! no provisional id can reach display or export.

use std::collections::{HashMap, HashSet};

use crate::model::{Minisymposium, Program, Session};
use crate::program_config::ProgramConfig;
use crate::sources::{AbstractBundle, DraftMinisymposium, RawSources, contributed};

/// Merge loaded sources into the displayable programme.
pub fn merge(sources: &RawSources) -> Program {
    let mut drafts = sources.structured.clone();
    fill_missing_organizers(&mut drafts, &sources.bundles);
    append_abstract_only(&mut drafts, &sources.bundles);
    append_contributed(&mut drafts, sources);
    finalize(drafts, &sources.config)
}

/// Structured entries with no organizers of their own take the organizer
/// list from the abstract bundle with the same normalized title.
fn fill_missing_organizers(drafts: &mut [DraftMinisymposium], bundles: &[AbstractBundle]) {
    let by_key: HashMap<&str, &AbstractBundle> =
        bundles.iter().map(|b| (b.key.as_str(), b)).collect();

    for draft in drafts.iter_mut() {
        if draft.organizers.is_empty() {
            if let Some(bundle) = by_key.get(draft.key.as_str()) {
                draft.organizers = bundle.organizers.clone();
            }
        }
    }
}

/// Bundles whose title matches no structured entry become standalone
/// minisymposia; a topic described by both sources stays single.
fn append_abstract_only(drafts: &mut Vec<DraftMinisymposium>, bundles: &[AbstractBundle]) {
    let mut taken: HashSet<String> = drafts.iter().map(|d| d.key.clone()).collect();

    for bundle in bundles {
        if taken.insert(bundle.key.clone()) {
            drafts.push(bundle.clone().into_draft());
        }
    }
}

/// Contributed groups filled from table rows, unless an earlier entry
/// already uses the group's title.
fn append_contributed(drafts: &mut Vec<DraftMinisymposium>, sources: &RawSources) {
    let taken: HashSet<String> = drafts.iter().map(|d| d.key.clone()).collect();

    let groups = contributed::build_groups(
        &sources.contributed,
        &sources.config.contributed,
        &sources.config.exclusions,
    );
    for group in groups {
        if !taken.contains(&group.key) {
            drafts.push(group);
        }
    }
}

/// The id-assignment walk: sequential `MS<n>` codes for everything
/// without a reserved code, then session ids derived from the final id.
fn finalize(drafts: Vec<DraftMinisymposium>, config: &ProgramConfig) -> Program {
    let mut next = 1;
    let minisymposia = drafts
        .into_iter()
        .map(|draft| {
            let id = match &draft.reserved_code {
                Some(code) => code.clone(),
                None => {
                    let id = format!("MS{next}");
                    next += 1;
                    id
                }
            };
            build(id, draft, config)
        })
        .collect();

    Program { minisymposia }
}

fn build(id: String, draft: DraftMinisymposium, config: &ProgramConfig) -> Minisymposium {
    // Display day: earliest UTC start date anywhere in the entry, else the
    // hand-authored day, else the configured fallback.
    let day = draft
        .earliest_start()
        .map(|dt| dt.date_naive())
        .or(draft.declared_day)
        .unwrap_or(config.fallback_day);

    let sessions = draft
        .sessions
        .into_iter()
        .enumerate()
        .map(|(index, s)| Session {
            id: format!("{id}-S{}", index + 1),
            start: s.start,
            end: s.end,
            chair: s.chair,
            room: s.room,
            talks: s.talks,
        })
        .collect();

    Minisymposium {
        id,
        title: draft.title,
        organizers: draft.organizers,
        day,
        room: draft.room,
        timezone: draft.timezone.unwrap_or_else(|| config.timezone.clone()),
        sessions,
    }
}
