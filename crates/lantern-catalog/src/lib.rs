//! # lantern-catalog — learning-path catalog model and sorting
//!
//! The catalog is the site's content skeleton: categories ("Backend",
//! "Frontend") holding tracks (Java, Python, Astro, ...), each track
//! holding the concepts a learner works through. This crate owns:
//!
//! - the one current schema for that data ([`model`]), serde-compatible
//!   with the site's JSON catalog files
//! - alphabetical ordering of tracks within categories ([`sort`]),
//!   accent- and case-insensitive so "Élan" files next to "Elan"
//! - the builtin content set ([`builtin`]) used when no catalog file is
//!   supplied
//!
//! Everything is immutable value data. Sorting returns new collections
//! and never touches its input; there is no global catalog state —
//! callers load (or take the builtin) once and pass it around.

pub mod builtin;
pub mod model;
pub mod sort;

pub use model::{Category, Concept, Difficulty, Track};
pub use sort::sorted_categories;
