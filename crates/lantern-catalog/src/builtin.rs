//! The builtin catalog — the content set shipped with the browser.
//!
//! Used whenever no catalog file is supplied. This is plain data expressed
//! as constructors; it exists so `lantern` runs out of the box, not because
//! content belongs in code. Sites with their own catalogs load JSON instead
//! (see [`crate::model`] for the wire shape).

use lantern_color::Rgb;

use crate::model::{Category, Concept, Difficulty, Track};

fn concept(title: &str, desc: &str, href: &str) -> Concept {
    Concept {
        title: title.to_string(),
        desc: desc.to_string(),
        href: href.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn track(
    title: &str,
    desc: &str,
    color: Rgb,
    href: &str,
    icon: &str,
    difficulty: Difficulty,
    prerequisites: &[&str],
    concepts: Vec<Concept>,
) -> Track {
    Track {
        title: title.to_string(),
        desc: desc.to_string(),
        color,
        href: href.to_string(),
        icon: icon.to_string(),
        difficulty,
        prerequisites: prerequisites.iter().map(ToString::to_string).collect(),
        concepts,
    }
}

/// Build the builtin catalog: Backend and Frontend categories with the
/// five launch tracks.
///
/// Returns an owned value each call — there is no shared global catalog.
#[must_use]
pub fn catalog() -> Vec<Category> {
    vec![
        Category {
            category: "Backend".to_string(),
            items: vec![
                track(
                    "Java",
                    "Build robust, scalable enterprise applications and backend systems",
                    Rgb::new(0xf8, 0x98, 0x20),
                    "/java",
                    "☕",
                    Difficulty::Intermediate,
                    &["Nothing"],
                    vec![
                        concept(
                            "Basic Syntax",
                            "Variables, operators and control structures.",
                            "/java/basic-syntax",
                        ),
                        concept(
                            "Collections",
                            "ArrayList, HashMap and Stream API.",
                            "/java/collections",
                        ),
                        concept(
                            "Object-Oriented Programming",
                            "Classes, inheritance, polymorphism, and interfaces.",
                            "/java/oop",
                        ),
                    ],
                ),
                track(
                    "Python",
                    "Versatile language for data science, AI, and web development",
                    Rgb::new(0x37, 0x76, 0xab),
                    "/python",
                    "🐍",
                    Difficulty::Beginner,
                    &["Nothing"],
                    vec![
                        concept(
                            "Basic Syntax",
                            "Variables, data types, operators, and indentation rules.",
                            "/python/basic-syntax",
                        ),
                        concept(
                            "Data Structures",
                            "Lists, Tuples, Dictionaries, and Sets.",
                            "/python/data-structures",
                        ),
                        concept(
                            "Object-Oriented Programming",
                            "Classes, inheritance, and methods.",
                            "/python/oop",
                        ),
                    ],
                ),
            ],
        },
        Category {
            category: "Frontend".to_string(),
            items: vec![
                track(
                    "Astro",
                    "Build fast websites with modern frontend frameworks",
                    Rgb::new(0xff, 0x5a, 0x03),
                    "/astro",
                    "🚀",
                    Difficulty::Beginner,
                    &["HTML", "CSS", "Basic JavaScript", "Markdown"],
                    vec![
                        concept(
                            "Components",
                            "Creating reusable UI components using Astro or framework components.",
                            "/astro/components",
                        ),
                        concept(
                            "Pages & Routing",
                            "How to create pages and manage routes in an Astro project.",
                            "/astro/pages-routing",
                        ),
                        concept(
                            "Markdown Content",
                            "Generate pages automatically from Markdown files or content collections.",
                            "/astro/markdown-content",
                        ),
                    ],
                ),
                track(
                    "React",
                    "A powerful library for building reusable and interactive components",
                    Rgb::new(0x61, 0xda, 0xfb),
                    "/react",
                    "⚛️",
                    Difficulty::Intermediate,
                    &["HTML", "CSS", "JavaScript"],
                    vec![
                        concept(
                            "Fundamentals",
                            "Understanding one-way data flow and how components manage their own state.",
                            "/react/fundamentals",
                        ),
                        concept(
                            "Hooks",
                            "Managing side effects and logic with useState and useEffect.",
                            "/react/hooks",
                        ),
                        concept(
                            "Context API",
                            "Sharing global data without prop drilling between components.",
                            "/react/context",
                        ),
                    ],
                ),
                track(
                    "HTML",
                    "The standard markup language for creating web pages and applications",
                    Rgb::new(0xe3, 0x4c, 0x26),
                    "/html",
                    "🌐",
                    Difficulty::Fundamental,
                    &["Nothing"],
                    vec![
                        concept(
                            "Elements & Structure",
                            "Understanding tags, attributes, nesting, and the basic DOM tree skeleton.",
                            "/html/elements-structure",
                        ),
                        concept(
                            "Semantic HTML",
                            "Using meaningful tags (header, article, footer) for better accessibility and SEO.",
                            "/html/semantic-html",
                        ),
                        concept(
                            "Forms & Inputs",
                            "Collecting user data effectively using form elements, input types, and validation.",
                            "/html/forms-inputs",
                        ),
                    ],
                ),
            ],
        },
    ]
}

/// List the track titles in the builtin catalog, in authored order.
#[must_use]
pub fn track_titles() -> Vec<String> {
    catalog()
        .iter()
        .flat_map(|c| c.items.iter().map(|t| t.title.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use lantern_color::{TextColor, text_color_for};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sort::sorted_categories;

    #[test]
    fn has_backend_and_frontend() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, ["Backend", "Frontend"]);
    }

    #[test]
    fn five_launch_tracks() {
        assert_eq!(
            track_titles(),
            ["Java", "Python", "Astro", "React", "HTML"]
        );
    }

    #[test]
    fn every_track_has_three_concepts() {
        for category in catalog() {
            for track in &category.items {
                assert_eq!(track.concepts.len(), 3, "Track {} concept count", track.title);
            }
        }
    }

    #[test]
    fn every_track_has_prerequisites() {
        for category in catalog() {
            for track in &category.items {
                assert!(
                    !track.prerequisites.is_empty(),
                    "Track {} has no prerequisites entry",
                    track.title
                );
            }
        }
    }

    #[test]
    fn concept_hrefs_live_under_track_href() {
        for category in catalog() {
            for track in &category.items {
                for concept in &track.concepts {
                    assert!(
                        concept.href.starts_with(&track.href),
                        "Concept {} outside {}",
                        concept.href,
                        track.href
                    );
                }
            }
        }
    }

    #[test]
    fn builtin_sorts_cleanly() {
        let sorted = sorted_categories(&catalog());
        let backend: Vec<&str> = sorted[0].items.iter().map(|t| t.title.as_str()).collect();
        let frontend: Vec<&str> = sorted[1].items.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(backend, ["Java", "Python"]);
        assert_eq!(frontend, ["Astro", "HTML", "React"]);
    }

    #[test]
    fn brand_colors_resolve_text_colors() {
        // Python's mid-dark blue is the only launch brand dark enough for
        // white text; the rest take black.
        let catalog = catalog();
        let by_title = |title: &str| {
            catalog
                .iter()
                .flat_map(|c| &c.items)
                .find(|t| t.title == title)
                .unwrap()
                .color
        };
        assert_eq!(text_color_for(by_title("Python")), TextColor::White);
        assert_eq!(text_color_for(by_title("Java")), TextColor::Black);
        assert_eq!(text_color_for(by_title("Astro")), TextColor::Black);
        assert_eq!(text_color_for(by_title("React")), TextColor::Black);
        assert_eq!(text_color_for(by_title("HTML")), TextColor::Black);
    }
}
