//! Title slugs.
//!
//! A slug is the only identity a talk or minisymposium has across the
//! independently-maintained programme sources, so the rule is strict:
//! lowercase, every maximal run of characters outside `[a-z0-9]` collapses
//! to a single hyphen, no leading or trailing hyphen. The function is
//! idempotent and total; degenerate input (all symbols) yields `""`.

/// Derive a URL-safe slug from a free-text title.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("A BKM-type criterion!"), "a-bkm-type-criterion");
        assert_eq!(slugify("Graph Theory"), "graph-theory");
    }

    #[test]
    fn collapses_symbol_runs() {
        assert_eq!(slugify("a  --  b"), "a-b");
        assert_eq!(slugify("x (and) y"), "x-and-y");
    }

    #[test]
    fn strips_edges() {
        assert_eq!(slugify("  spaced out  "), "spaced-out");
        assert_eq!(slugify("-already-hyphenated-"), "already-hyphenated");
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!???"), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn non_ascii_becomes_separator() {
        // Identity must be stable across sources, so no transliteration.
        assert_eq!(slugify("Schrödinger"), "schr-dinger");
        assert_eq!(slugify("naïve approach"), "na-ve-approach");
    }

    #[test]
    fn idempotent() {
        for input in [
            "A BKM-type criterion!",
            "  spaced out  ",
            "Schrödinger",
            "!!!",
            "plain",
            "123 456",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn output_charset_is_clean() {
        for input in ["Mixed CASE 42", "a__b..c", " ... ", "Ω-limit sets"] {
            let slug = slugify(input);
            assert!(!slug.starts_with('-'), "leading hyphen in {:?}", slug);
            assert!(!slug.ends_with('-'), "trailing hyphen in {:?}", slug);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad char in {:?}",
                slug
            );
            assert!(!slug.contains("--"), "hyphen run in {:?}", slug);
        }
    }
}
