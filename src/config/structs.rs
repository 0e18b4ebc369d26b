//! Configuration struct definitions.

use crate::fmt::FormatTemplate;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Console output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable console output.
    pub enabled: bool,
    /// Render markup as ANSI colors; strip it when off.
    pub colors: bool,
    /// Line template.
    pub structure: String,
    /// Buffer capacity in bytes, 0 for unbuffered.
    pub buffer_size: usize,
    /// Send warn and error lines to stderr.
    pub stderr: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
            structure: FormatTemplate::DEFAULT.to_string(),
            buffer_size: 0,
            stderr: true,
        }
    }
}

/// File output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable file output.
    pub enabled: bool,
    /// Log file, `~` is expanded.
    pub path: String,
    /// Line template.
    pub structure: String,
    /// Buffer capacity in bytes, 0 for unbuffered.
    pub buffer_size: usize,
}

impl Default for FileConfig {
    fn default() -> Self {
        let path = directories::ProjectDirs::from("", "", "taglog").map_or_else(
            || "taglog.log".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("taglog.log")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: false,
            path,
            structure: FormatTemplate::DEFAULT.to_string(),
            buffer_size: crate::BUFFER_SIZE,
        }
    }
}

/// Debug output configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DebugConfig {
    /// Echo every line with its escape codes spelled out.
    pub enabled: bool,
}

/// Per-app overrides.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Override log level.
    pub level: Option<String>,
    /// Override console settings.
    pub console: Option<AppConsoleConfig>,
    /// Override file settings.
    pub file: Option<AppFileConfig>,
}

/// Per-app console overrides.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConsoleConfig {
    pub enabled: Option<bool>,
    pub colors: Option<bool>,
}

/// Per-app file overrides.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppFileConfig {
    pub enabled: Option<bool>,
    pub path: Option<String>,
}
