//! The catalog schema — categories, tracks, concepts, difficulty.
//!
//! One current schema, serde-compatible with the site's JSON catalog:
//!
//! ```json
//! [{ "category": "Backend",
//!    "items": [{ "title": "Java", "desc": "...", "color": "#f89820",
//!                "href": "/java", "icon": "☕",
//!                "difficulty": "Intermediate",
//!                "prerequisites": ["Nothing"],
//!                "concepts": [{ "title": "...", "desc": "...", "href": "..." }] }] }]
//! ```
//!
//! These are pure data types — no behavior beyond accessors. Rendering
//! lives in the browser binary, ordering in [`crate::sort`].

use std::fmt;

use lantern_color::Rgb;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// How much a learner should already know before starting a track.
///
/// Ordered from least to most demanding, so `Ord` can drive difficulty
/// filters and badge styling tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Foundational material with no assumed background (HTML, CSS).
    Fundamental,
    /// First-language territory; gentle on prior experience.
    Beginner,
    /// Assumes programming fundamentals are already in place.
    Intermediate,
    /// Deep-end material for experienced learners.
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fundamental => f.write_str("Fundamental"),
            Self::Beginner => f.write_str("Beginner"),
            Self::Intermediate => f.write_str("Intermediate"),
            Self::Advanced => f.write_str("Advanced"),
        }
    }
}

// ---------------------------------------------------------------------------
// Concept
// ---------------------------------------------------------------------------

/// A single article/topic within a track.
///
/// `href` is the route to the rendered content; the catalog doesn't know
/// or care what lives behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Display title ("Basic Syntax", "Hooks").
    pub title: String,
    /// One-line summary shown in listings.
    pub desc: String,
    /// Route to the content page.
    pub href: String,
}

// ---------------------------------------------------------------------------
// Track
// ---------------------------------------------------------------------------

/// One language or framework entry: the unit a learner picks.
///
/// Carries the visual identity (brand color, icon), the educational
/// metadata (difficulty, prerequisites), and the ordered concept list.
/// The brand color is what the contrast resolver picks label colors
/// against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Display title — also the sort key within a category.
    pub title: String,
    /// One-line pitch for the track.
    pub desc: String,
    /// Brand color used for the track's badge background.
    pub color: Rgb,
    /// Route to the track's landing page.
    pub href: String,
    /// Icon glyph shown next to the title.
    pub icon: String,
    /// Difficulty tier for badge styling and filtering.
    pub difficulty: Difficulty,
    /// What a learner should know first. `["Nothing"]` means a clean start.
    pub prerequisites: Vec<String>,
    /// The ordered topics this track covers.
    pub concepts: Vec<Concept>,
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A named, ordered grouping of tracks ("Backend", "Frontend").
///
/// Category order is whatever the catalog author wrote — it is never
/// reordered. Track order within a category is either authored order or
/// alphabetical via [`crate::sort::sorted_categories`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Section name. Serialized as `category` to match the site's JSON.
    pub category: String,
    /// The tracks in this section, in authored order.
    pub items: Vec<Track>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
