//! Letter-to-escape lookup for the markup engine.
//!
//! The sixteen standard letters are fixed and documented; extra letters can be layered on at
//! run time (see the `[colors]` config section), which is why runtime validation checks the
//! live palette instead of a fixed alphabet.

use super::Color;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Ends any active color so the rest of the line returns to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// The documented standard table.
pub const STANDARD_COLORS: [(char, &str); 16] = [
    ('r', "\x1b[31m"), // red
    ('g', "\x1b[32m"), // green
    ('y', "\x1b[33m"), // yellow
    ('b', "\x1b[34m"), // blue
    ('p', "\x1b[35m"), // purple
    ('a', "\x1b[36m"), // aqua
    ('l', "\x1b[92m"), // lime
    ('s', "\x1b[97m"), // silver
    ('m', "\x1b[91m"), // maroon
    ('o', "\x1b[93m"), // olive
    ('t', "\x1b[96m"), // teal
    ('n', "\x1b[94m"), // navy
    ('f', "\x1b[95m"), // fuchsia
    ('z', "\x1b[90m"), // gray
    ('w', "\x1b[37m"), // white
    ('k', "\x1b[30m"), // black
];

/// Read-only after construction; loggers own their palette so runtime additions never touch
/// the shared standard table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<char, String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: STANDARD_COLORS
                .iter()
                .map(|&(letter, code)| (letter, code.to_string()))
                .collect(),
        }
    }
}

impl Palette {
    /// Process-wide standard table, built on first use and never mutated.
    #[must_use]
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<Palette> = OnceLock::new();
        STANDARD.get_or_init(Self::default)
    }

    /// A palette with no letters at all; every span renders uncolored.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Adds or replaces a letter backed by a 24-bit color.
    #[must_use]
    pub fn with_color(self, letter: char, color: Color) -> Self {
        self.with_escape(letter, color.fg_ansi())
    }

    /// Adds or replaces a letter with a raw escape sequence.
    #[must_use]
    pub fn with_escape(mut self, letter: char, escape: impl Into<String>) -> Self {
        self.colors.insert(letter, escape.into());
        self
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<&str> {
        self.colors.get(&letter).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.colors.contains_key(&letter)
    }

    /// All known letters, sorted so listings are stable.
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.colors.keys().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
