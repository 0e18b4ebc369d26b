//! The standard palette only covers the sixteen 4-bit terminal colors; config files can add
//! letters backed by 24-bit colors written as `#RRGGBB`.

use std::fmt;

/// A dedicated type keeps raw `u8` triples from leaking into palette code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (the `#` is optional). Returns `None` for anything else so config
    /// loading can report the offending entry instead of silently picking a color.
    #[must_use]
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }

    /// Lenient variant of [`Color::parse_hex`]: malformed input falls back to white.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        Self::parse_hex(hex).unwrap_or(Self::WHITE)
    }

    /// Terminals need the raw `\x1b[38;2;R;G;Bm` escape.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
