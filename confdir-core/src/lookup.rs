//! Talk lookup.
//!
//! A flat index over the loaded sources, built independently of the
//! merger's final id assignment: lookup matches on title-derived slugs,
//! never on `MS<n>` codes. Entries follow source-enumeration order, which
//! makes the first-match fallback for colliding slugs deterministic.

use std::collections::HashSet;

use crate::model::Talk;
use crate::slug::slugify;
use crate::sources::{RawSources, contributed};

/// One index entry: a talk and the title of the minisymposium it sits in.
#[derive(Debug, Clone, PartialEq)]
pub struct TalkEntry {
    pub minisymposium_title: String,
    pub talk: Talk,
}

/// Result of a slug lookup. Not-found and ambiguity are ordinary results,
/// not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum TalkLookup {
    Found(TalkEntry),
    /// Several talks share the slug and no disambiguator matched. The
    /// first candidate in enumeration order is returned along with the
    /// candidate count, so callers can warn about the collision.
    AmbiguousDefault { entry: TalkEntry, candidates: usize },
    NotFound,
}

pub struct TalkIndex {
    entries: Vec<TalkEntry>,
}

impl TalkIndex {
    /// Build the flat index: structured sessions first, abstract bundles
    /// second, contributed talks last. A key already claimed by an earlier
    /// source skips the later one, the same rule the merger applies, so
    /// the index never lists a talk the programme dropped.
    pub fn build(sources: &RawSources) -> Self {
        let mut entries = Vec::new();

        let mut taken: HashSet<String> = sources
            .structured
            .iter()
            .map(|d| d.key.clone())
            .collect();

        for draft in &sources.structured {
            for session in &draft.sessions {
                for talk in &session.talks {
                    entries.push(TalkEntry {
                        minisymposium_title: draft.title.clone(),
                        talk: talk.clone(),
                    });
                }
            }
        }

        for bundle in &sources.bundles {
            if !taken.insert(bundle.key.clone()) {
                continue;
            }
            for talk in &bundle.talks {
                entries.push(TalkEntry {
                    minisymposium_title: bundle.title.clone(),
                    talk: talk.clone(),
                });
            }
        }

        let groups = contributed::build_groups(
            &sources.contributed,
            &sources.config.contributed,
            &sources.config.exclusions,
        );
        for group in groups {
            if taken.contains(&group.key) {
                continue;
            }
            for session in &group.sessions {
                for talk in &session.talks {
                    entries.push(TalkEntry {
                        minisymposium_title: group.title.clone(),
                        talk: talk.clone(),
                    });
                }
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a talk by slug, optionally disambiguated by the slug of the
    /// minisymposium it belongs to.
    pub fn find(&self, slug: &str, ms_slug: Option<&str>) -> TalkLookup {
        let candidates: Vec<&TalkEntry> = self
            .entries
            .iter()
            .filter(|e| e.talk.slug() == slug)
            .collect();

        match candidates.as_slice() {
            [] => TalkLookup::NotFound,
            [only] => TalkLookup::Found((*only).clone()),
            several => {
                if let Some(wanted) = ms_slug {
                    if let Some(hit) = several
                        .iter()
                        .find(|e| slugify(&e.minisymposium_title) == wanted)
                    {
                        return TalkLookup::Found((**hit).clone());
                    }
                }
                TalkLookup::AmbiguousDefault {
                    entry: several[0].clone(),
                    candidates: several.len(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Speaker;
    use crate::program_config::{ContributedGroupConfig, SlotConfig};
    use crate::sources::{AbstractBundle, ContributedRow, DraftMinisymposium, DraftSession};

    fn talk(title: &str) -> Talk {
        Talk {
            title: title.to_string(),
            speakers: vec![],
            abstract_text: String::new(),
            start: None,
            end: None,
            cancelled: false,
        }
    }

    fn draft(title: &str, talks: Vec<Talk>) -> DraftMinisymposium {
        DraftMinisymposium {
            key: slugify(title),
            title: title.to_string(),
            organizers: vec![],
            declared_day: None,
            room: None,
            timezone: None,
            sessions: vec![DraftSession {
                start: None,
                end: None,
                chair: None,
                room: None,
                talks,
            }],
            reserved_code: None,
        }
    }

    fn bundle(title: &str, talks: Vec<Talk>) -> AbstractBundle {
        AbstractBundle {
            key: slugify(title),
            title: title.to_string(),
            organizers: vec![],
            talks,
        }
    }

    fn sources_with_collision() -> RawSources {
        RawSources {
            structured: vec![draft("Graph Theory", vec![talk("TBD"), talk("Colorings")])],
            bundles: vec![bundle("Spectral Methods", vec![talk("TBD")])],
            ..Default::default()
        }
    }

    #[test]
    fn not_found_is_a_result() {
        let index = TalkIndex::build(&RawSources::default());
        assert_eq!(index.find("anything", None), TalkLookup::NotFound);
    }

    #[test]
    fn unique_slug_is_found() {
        let index = TalkIndex::build(&sources_with_collision());

        match index.find("colorings", None) {
            TalkLookup::Found(entry) => {
                assert_eq!(entry.minisymposium_title, "Graph Theory");
                assert_eq!(entry.talk.title, "Colorings");
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn collision_resolved_by_disambiguator() {
        let index = TalkIndex::build(&sources_with_collision());

        match index.find("tbd", Some("spectral-methods")) {
            TalkLookup::Found(entry) => {
                assert_eq!(entry.minisymposium_title, "Spectral Methods");
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn collision_without_disambiguator_takes_first_in_order() {
        let index = TalkIndex::build(&sources_with_collision());

        match index.find("tbd", None) {
            TalkLookup::AmbiguousDefault { entry, candidates } => {
                // Structured sources enumerate before bundles.
                assert_eq!(entry.minisymposium_title, "Graph Theory");
                assert_eq!(candidates, 2);
            }
            other => panic!("expected AmbiguousDefault, got {:?}", other),
        }
    }

    #[test]
    fn unmatched_disambiguator_still_defaults() {
        let index = TalkIndex::build(&sources_with_collision());

        match index.find("tbd", Some("no-such-minisymposium")) {
            TalkLookup::AmbiguousDefault { entry, .. } => {
                assert_eq!(entry.minisymposium_title, "Graph Theory");
            }
            other => panic!("expected AmbiguousDefault, got {:?}", other),
        }
    }

    #[test]
    fn double_described_bundle_is_not_indexed_twice() {
        let sources = RawSources {
            structured: vec![draft("Graph Theory", vec![talk("TBD")])],
            bundles: vec![bundle("Graph Theory", vec![talk("TBD")])],
            ..Default::default()
        };
        let index = TalkIndex::build(&sources);

        assert_eq!(index.len(), 1);
        assert!(matches!(index.find("tbd", None), TalkLookup::Found(_)));
    }

    #[test]
    fn duplicate_bundles_index_once() {
        let sources = RawSources {
            bundles: vec![
                bundle("Solo", vec![talk("First copy")]),
                bundle("Solo", vec![talk("Second copy")]),
            ],
            ..Default::default()
        };
        let index = TalkIndex::build(&sources);

        assert_eq!(index.len(), 1);
        assert_eq!(index.find("second-copy", None), TalkLookup::NotFound);
    }

    #[test]
    fn group_is_not_indexed_when_a_bundle_took_its_title() {
        let mut sources = RawSources {
            bundles: vec![bundle("Contributed Talks", vec![talk("Hand placed")])],
            contributed: vec![ContributedRow {
                title: "Knots".to_string(),
                speakers: vec![],
                abstract_text: String::new(),
                cancelled: false,
            }],
            ..Default::default()
        };
        sources.config.contributed = vec![ContributedGroupConfig {
            code: "CT".to_string(),
            title: "Contributed Talks".to_string(),
            slots: vec![SlotConfig {
                capacity: 8,
                start: None,
                end: None,
                room: None,
            }],
        }];

        let index = TalkIndex::build(&sources);
        assert!(matches!(index.find("hand-placed", None), TalkLookup::Found(_)));
        assert_eq!(index.find("knots", None), TalkLookup::NotFound);
    }

    #[test]
    fn contributed_rows_are_indexed_under_their_group() {
        let mut sources = RawSources {
            contributed: vec![ContributedRow {
                title: "Knots".to_string(),
                speakers: vec![Speaker {
                    name: "Maria Curie".to_string(),
                    affiliation: String::new(),
                }],
                abstract_text: String::new(),
                cancelled: false,
            }],
            ..Default::default()
        };
        sources.config.contributed = vec![ContributedGroupConfig {
            code: "CT".to_string(),
            title: "Contributed Talks".to_string(),
            slots: vec![SlotConfig {
                capacity: 8,
                start: None,
                end: None,
                room: None,
            }],
        }];

        let index = TalkIndex::build(&sources);
        match index.find("knots", None) {
            TalkLookup::Found(entry) => {
                assert_eq!(entry.minisymposium_title, "Contributed Talks");
                assert_eq!(entry.talk.speakers[0].name, "Maria Curie");
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn excluded_rows_are_not_indexed() {
        let mut sources = RawSources {
            contributed: vec![ContributedRow {
                title: "Promoted".to_string(),
                speakers: vec![],
                abstract_text: String::new(),
                cancelled: false,
            }],
            ..Default::default()
        };
        sources.config.exclusions.titles = vec!["Promoted".to_string()];

        let index = TalkIndex::build(&sources);
        assert_eq!(index.find("promoted", None), TalkLookup::NotFound);
    }

    #[test]
    fn degenerate_slug_does_not_crash() {
        let index = TalkIndex::build(&sources_with_collision());
        assert_eq!(index.find("", None), TalkLookup::NotFound);
    }
}
