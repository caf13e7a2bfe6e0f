//! Alphabetical ordering of tracks within categories.
//!
//! The site shows each category's tracks A–Z. "Alphabetical" here means
//! what a reader expects, not what a byte comparison gives: case must not
//! matter ("iOS" sorts with "Io", not after "Zig") and accents must not
//! matter ("Élan" files next to "Elan", not after "Zulu"). There is no
//! full ICU collation in this stack; the folding below — compatibility
//! decomposition, drop the combining marks, lowercase — covers the
//! Latin-script titles the catalog actually holds.
//!
//! Sorting is non-destructive: callers keep their authored order, and get
//! back freshly allocated categories with freshly ordered item vectors.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::{Category, Track};

/// Fold a title into its collation key: NFKD, strip combining marks,
/// lowercase.
///
/// Two titles that differ only in case or diacritics produce the same key.
#[must_use]
pub fn collation_key(title: &str) -> String {
    title
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Return a new vector with the tracks sorted A–Z by title.
///
/// Equal collation keys fall back to the raw title, so the result is
/// fully deterministic. The input slice is untouched.
#[must_use]
pub fn sorted_tracks(tracks: &[Track]) -> Vec<Track> {
    let mut sorted = tracks.to_vec();
    sorted.sort_by_cached_key(|t| (collation_key(&t.title), t.title.clone()));
    sorted
}

/// Return a new category list with each category's tracks sorted A–Z.
///
/// Category order is preserved exactly; only item order changes. Every
/// category and item in the result is an independent clone — the input is
/// never mutated, and calling this twice yields equal, separately owned
/// outputs.
#[must_use]
pub fn sorted_categories(categories: &[Category]) -> Vec<Category> {
    categories
        .iter()
        .map(|c| Category {
            category: c.category.clone(),
            items: sorted_tracks(&c.items),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use lantern_color::Rgb;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Concept, Difficulty};

    fn track(title: &str) -> Track {
        Track {
            title: title.to_string(),
            desc: format!("About {title}"),
            color: Rgb::new(0x12, 0x34, 0x56),
            href: format!("/{}", title.to_lowercase()),
            icon: "📘".to_string(),
            difficulty: Difficulty::Beginner,
            prerequisites: vec!["Nothing".to_string()],
            concepts: vec![Concept {
                title: "Basics".to_string(),
                desc: "First steps.".to_string(),
                href: format!("/{}/basics", title.to_lowercase()),
            }],
        }
    }

    fn category(name: &str, titles: &[&str]) -> Category {
        Category {
            category: name.to_string(),
            items: titles.iter().map(|t| track(t)).collect(),
        }
    }

    fn titles(c: &Category) -> Vec<&str> {
        c.items.iter().map(|t| t.title.as_str()).collect()
    }

    // ── Collation key ───────────────────────────────────────────────

    #[test]
    fn key_folds_case() {
        assert_eq!(collation_key("Python"), collation_key("pYTHON"));
    }

    #[test]
    fn key_folds_accents() {
        assert_eq!(collation_key("Élan"), collation_key("elan"));
    }

    #[test]
    fn key_folds_compatibility_forms() {
        // U+FB01 LATIN SMALL LIGATURE FI decomposes to "fi" under NFKD.
        assert_eq!(collation_key("ﬁle"), "file");
    }

    // ── sorted_tracks ───────────────────────────────────────────────

    #[test]
    fn backend_tracks_sort_java_before_python() {
        let sorted = sorted_tracks(&[track("Python"), track("Java")]);
        let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Java", "Python"]);
    }

    #[test]
    fn sort_ignores_case() {
        let sorted = sorted_tracks(&[track("react"), track("Astro"), track("HTML")]);
        let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Astro", "HTML", "react"]);
    }

    #[test]
    fn sort_ignores_accents() {
        // Byte order would put "Élan" after "Zig"; collation must not.
        let sorted = sorted_tracks(&[track("Zig"), track("Élan"), track("Ada")]);
        let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Ada", "Élan", "Zig"]);
    }

    #[test]
    fn equal_keys_break_ties_on_raw_title() {
        let sorted = sorted_tracks(&[track("java"), track("Java")]);
        let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
        // "Java" < "java" bytewise — deterministic either way it lands.
        assert_eq!(titles, ["Java", "java"]);
    }

    #[test]
    fn single_track_is_a_noop_copy() {
        let input = vec![track("Java")];
        let sorted = sorted_tracks(&input);
        assert_eq!(sorted, input);
    }

    // ── sorted_categories ───────────────────────────────────────────

    #[test]
    fn category_order_is_preserved() {
        let input = vec![
            category("Frontend", &["React", "Astro", "HTML"]),
            category("Backend", &["Python", "Java"]),
        ];
        let sorted = sorted_categories(&input);
        assert_eq!(sorted[0].category, "Frontend");
        assert_eq!(sorted[1].category, "Backend");
    }

    #[test]
    fn each_category_sorts_independently() {
        let input = vec![
            category("Frontend", &["React", "Astro", "HTML"]),
            category("Backend", &["Python", "Java"]),
        ];
        let sorted = sorted_categories(&input);
        assert_eq!(titles(&sorted[0]), ["Astro", "HTML", "React"]);
        assert_eq!(titles(&sorted[1]), ["Java", "Python"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![category("Backend", &["Python", "Java"])];
        let _ = sorted_categories(&input);
        assert_eq!(titles(&input[0]), ["Python", "Java"]);
    }

    #[test]
    fn output_is_a_permutation_per_category() {
        let input = vec![category("Backend", &["Python", "Java", "Go"])];
        let sorted = sorted_categories(&input);
        assert_eq!(sorted.len(), input.len());
        assert_eq!(sorted[0].items.len(), input[0].items.len());
        let mut expected = titles(&input[0]);
        expected.sort_unstable();
        let mut got = titles(&sorted[0]);
        got.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(sorted_categories(&[]), Vec::<Category>::new());
        let empty = vec![category("Empty", &[])];
        let sorted = sorted_categories(&empty);
        assert!(sorted[0].items.is_empty());
    }

    #[test]
    fn already_sorted_is_a_noop_copy() {
        let input = vec![category("Backend", &["Java", "Python"])];
        let sorted = sorted_categories(&input);
        assert_eq!(sorted, input);
    }

    #[test]
    fn sorting_twice_yields_equal_outputs() {
        let input = vec![category("Backend", &["Python", "Java"])];
        let once = sorted_categories(&input);
        let twice = sorted_categories(&input);
        assert_eq!(once, twice);
    }

    #[test]
    fn non_title_fields_pass_through_untouched() {
        let input = vec![category("Backend", &["Python", "Java"])];
        let sorted = sorted_categories(&input);
        let java = &sorted[0].items[0];
        assert_eq!(java.href, "/java");
        assert_eq!(java.difficulty, Difficulty::Beginner);
        assert_eq!(java.prerequisites, ["Nothing"]);
        assert_eq!(java.concepts.len(), 1);
    }
}
