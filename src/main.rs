// SPDX-License-Identifier: MIT
//
// lantern — a terminal browser for learning-path catalogs.
//
// This is the main binary that wires together the crates:
//
//   lantern-catalog → catalog schema, builtin content, A–Z sorting
//   lantern-color   → hex colors, WCAG contrast, text-color picking
//
// A run flows through:
//
//   args → catalog (builtin or JSON file) → optional sort
//        → render to String (pure) → stdout
//
// Each track is shown as a truecolor badge: the track's brand color as
// background, with the label color chosen by the contrast resolver so the
// title stays legible on any brand. Rendering builds a String and prints
// it once; all the interesting logic stays pure and testable.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::process;

use lantern_catalog::builtin;
use lantern_catalog::model::{Category, Track};
use lantern_catalog::sort::sorted_categories;
use lantern_color::{Rgb, text_color_for};

const USAGE: &str = "\
lantern — a terminal browser for learning-path catalogs

Usage: lantern [OPTIONS] [FILE]

Arguments:
  [FILE]    JSON catalog to browse (defaults to the builtin catalog)

Options:
  --sorted  Sort each category's tracks alphabetically by title
  --json    Print the catalog as pretty JSON instead of rendering it
  -h, --help  Print this help
";

// ─── Options ─────────────────────────────────────────────────────────────────

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    /// Apply `sorted_categories` before output.
    sorted: bool,
    /// Emit pretty JSON instead of the terminal rendering.
    json: bool,
    /// Catalog file; `None` means the builtin content set.
    file: Option<String>,
}

/// Parse arguments (everything after argv[0]).
///
/// Returns `Err` with a message for unknown flags or extra positionals;
/// `Ok(None)` means help was requested.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--sorted" => options.sorted = true,
            "--json" => options.json = true,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option `{arg}`"));
            }
            _ if options.file.is_some() => {
                return Err(format!("unexpected argument `{arg}`"));
            }
            _ => options.file = Some(arg),
        }
    }
    Ok(Some(options))
}

// ─── Catalog loading ─────────────────────────────────────────────────────────

/// Load the catalog: a JSON file if one was given, the builtin set otherwise.
fn load_catalog(file: Option<&str>) -> Result<Vec<Category>, String> {
    let Some(path) = file else {
        return Ok(builtin::catalog());
    };
    let text = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("{path}: {e}"))
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// SGR prefix for a truecolor badge: `bg` as background, a contrast-picked
/// label color as foreground.
fn badge_sgr(bg: Rgb) -> String {
    let fg = text_color_for(bg).to_rgb();
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m",
        bg.r, bg.g, bg.b, fg.r, fg.g, fg.b
    )
}

/// Render one track: badge line, description, prerequisites, concepts.
fn render_track(out: &mut String, track: &Track) {
    let _ = writeln!(
        out,
        "  {}{} {} {}\x1b[0m  [{}]",
        badge_sgr(track.color),
        track.icon,
        track.title,
        track.color,
        track.difficulty
    );
    let _ = writeln!(out, "      {}", track.desc);
    let _ = writeln!(out, "      needs: {}", track.prerequisites.join(", "));
    for concept in &track.concepts {
        let _ = writeln!(out, "      • {} — {}", concept.title, concept.desc);
    }
}

/// Render the whole catalog to a String.
fn render_catalog(categories: &[Category]) -> String {
    let mut out = String::new();
    for category in categories {
        let _ = writeln!(out, "\x1b[1m{}\x1b[0m", category.category);
        for track in &category.items {
            render_track(&mut out, track);
        }
        out.push('\n');
    }
    out
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn run(options: &Options) -> Result<String, String> {
    let mut catalog = load_catalog(options.file.as_deref())?;
    if options.sorted {
        catalog = sorted_categories(&catalog);
    }
    if options.json {
        serde_json::to_string_pretty(&catalog).map_err(|e| e.to_string())
    } else {
        Ok(render_catalog(&catalog))
    }
}

fn main() {
    let options = match parse_args(env::args().skip(1)) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print!("{USAGE}");
            return;
        }
        Err(message) => {
            eprintln!("lantern: {message}");
            eprint!("{USAGE}");
            process::exit(2);
        }
    };

    match run(&options) {
        Ok(output) => print!("{output}"),
        Err(message) => {
            eprintln!("lantern: {message}");
            process::exit(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
