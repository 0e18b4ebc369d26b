//! Severity levels that gate which messages reach the outputs.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a message's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Development detail, hidden unless the minimum level is lowered.
    Debug = 0,
    /// Normal operational milestones.
    #[default]
    Info = 1,
    /// Non-fatal anomalies that may need attention.
    Warn = 2,
    /// Failures, and the replacement notice for messages with broken markup.
    Error = 3,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Uppercase name shown inside the `[LEVEL]` tag of a formatted line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Palette letter used to color the level tag on a console line.
    #[must_use]
    pub const fn color_letter(self) -> char {
        match self {
            Self::Debug => 'b',
            Self::Info => 'g',
            Self::Warn => 'y',
            Self::Error => 'r',
        }
    }

    /// Convenience for iteration in help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Debug, Self::Info, Self::Warn, Self::Error]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
