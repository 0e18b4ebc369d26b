//! TOML configuration loading, `source = "..."` include resolution, and per-app overrides.
//!
//! Struct definitions live in `structs`; this module owns file I/O, cycle detection and the
//! merge strategy.

mod structs;

pub use structs::{
    AppConfig, AppConsoleConfig, AppFileConfig, ConsoleConfig, DebugConfig, FileConfig,
    GeneralConfig,
};

use crate::fmt::{Color, DELIMITER, Palette};
use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file is a valid config: every section falls back to its defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
    pub debug: DebugConfig,
    /// Tag letter to `#rrggbb`, added to or replacing the standard palette entries.
    pub colors: HashMap<String, String>,
    pub apps: HashMap<String, AppConfig>,
}

/// Pulls `source = "..."` lines out of raw TOML before deserialization.
/// Returns the include paths and the remaining content.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("source")
            && let Some(value) = rest.trim_start().strip_prefix('=')
        {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads the user's config from [`Config::get_config_path`], includes resolved.
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// No config directory on this platform, unreadable files, TOML syntax errors and
    /// cyclic includes.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_with_sources(&config_path, &mut HashSet::new())?;
        internal::info(&format!("Config loaded from {}", config_path.display()));
        Ok(config)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Unreadable files, TOML syntax errors and cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(&format!("Cyclic include detected: {}", canonical.display()));
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug(&format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let mut source_file = PathBuf::from(expanded.as_ref());
            if source_file.is_relative()
                && let Some(parent) = path.parent()
            {
                source_file = parent.join(source_file);
            }

            if source_file.exists() {
                let source_config = Self::load_with_sources(&source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn(&format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Folds an included config's map sections into `self`. Keys already present win.
    pub fn merge(&mut self, other: Self) {
        for (k, v) in other.colors {
            self.colors.entry(k).or_insert(v);
        }
        for (k, v) in other.apps {
            self.apps.entry(k).or_insert(v);
        }
    }

    /// A copy with the `[apps.<app_name>]` overrides applied. Unknown apps get the plain
    /// config back.
    #[must_use]
    pub fn for_app(&self, app_name: &str) -> Self {
        let mut config = self.clone();

        if let Some(app_config) = self.apps.get(app_name) {
            if let Some(ref level) = app_config.level {
                config.general.level.clone_from(level);
            }

            if let Some(ref console) = app_config.console {
                if let Some(enabled) = console.enabled {
                    config.console.enabled = enabled;
                }
                if let Some(colors) = console.colors {
                    config.console.colors = colors;
                }
            }

            if let Some(ref file) = app_config.file {
                if let Some(enabled) = file.enabled {
                    config.file.enabled = enabled;
                }
                if let Some(ref path) = file.path {
                    config.file.path.clone_from(path);
                }
            }
        }

        config
    }

    /// `<config_dir>/taglog/taglog.toml`, e.g. `~/.config/taglog/taglog.toml` on Linux.
    ///
    /// # Errors
    /// The platform has no config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("taglog").join("taglog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown level names fall back to Info.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_else(|e| {
            internal::warn(&format!("{e}, using info"));
            Level::Info
        })
    }

    /// The standard palette with the `[colors]` entries applied. Keys must be a single
    /// character other than the delimiter, values a hex color; anything else is skipped.
    #[must_use]
    pub fn palette(&self) -> Palette {
        let mut entries: Vec<_> = self.colors.iter().collect();
        entries.sort_unstable();

        entries
            .into_iter()
            .fold(Palette::standard().clone(), |palette, (key, hex)| {
                let mut chars = key.chars();
                let letter = match (chars.next(), chars.next()) {
                    (Some(letter), None) if letter != DELIMITER => letter,
                    _ => {
                        internal::warn(&format!("Ignoring color '{key}': not a single letter"));
                        return palette;
                    }
                };

                match Color::parse_hex(hex) {
                    Some(color) => palette.with_color(letter, color),
                    None => {
                        internal::warn(&format!("Ignoring color '{key}': bad hex '{hex}'"));
                        palette
                    }
                }
            })
    }
}
