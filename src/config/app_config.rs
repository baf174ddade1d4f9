//! Application-level configuration
//!
//! Defines the top-level configuration: which glyph set and color policy the
//! renderer uses, the default box styles, and logging.

use anyhow::{Context, Result};
use console_draw_core::charset::{self, Charset, CHARSET_NAMES};
use console_draw_core::{
    AnsiColor, ColorSink, EncodingMode, FillStyle, LineStyle, NoColor, TextMetrics,
};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Embedded default configuration file
const DEFAULT_CONFIG: &str = include_str!("../../console-draw.config.toml");

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "console-draw.config.toml";

/// Environment variable naming a configuration file
pub const CONFIG_PATH_ENV: &str = "CONSOLE_DRAW_CONFIG";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the first file found, or the embedded default
    pub fn load() -> Result<Self> {
        for path in Self::search_paths() {
            match std::fs::read_to_string(&path) {
                Ok(content) => return Self::parse(&content, &path),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(e)
                        .context(format!("Failed to read config file {}", path.display()));
                }
            }
        }

        Self::embedded_default()
    }

    /// Candidate configuration files, in lookup order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(
                base_dirs
                    .home_dir()
                    .join(".console-draw")
                    .join(CONFIG_FILE_NAME),
            );
        }

        if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
            if !config_path.trim().is_empty() {
                paths.push(PathBuf::from(config_path));
            }
        }

        paths
    }

    /// Load configuration from a specific file path
    /// If the file doesn't exist, creates it with default settings
    pub fn load_from_file(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                eprintln!(
                    "Configuration file not found at {}. Creating with default settings...",
                    path.display()
                );

                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)
                            .context(format!("Failed to create directory {}", parent.display()))?;
                    }
                }

                std::fs::write(path, DEFAULT_CONFIG).context(format!(
                    "Failed to create config file at {}",
                    path.display()
                ))?;

                Self::embedded_default()
            }
            Err(e) => Err(anyhow::anyhow!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            )),
        }
    }

    /// The configuration shipped with the binary
    pub fn embedded_default() -> Result<Self> {
        toml::from_str(DEFAULT_CONFIG)
            .map_err(|e| anyhow::anyhow!("Failed to parse embedded default config: {}", e))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file {}: {}", path.display(), e))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if charset::by_name(&self.render.charset).is_none() {
            return Err(anyhow::anyhow!(
                "Invalid charset: {} (expected one of {})",
                self.render.charset,
                CHARSET_NAMES.join(", ")
            ));
        }

        ColorMode::from_str(&self.render.color)?;

        LineStyle::from_str(&self.render.line_style)
            .map_err(|e| anyhow::anyhow!("Invalid line style: {}", e))?;

        match self.render.encoding.to_lowercase().as_str() {
            "auto" => {}
            other => {
                EncodingMode::from_str(other)
                    .map_err(|e| anyhow::anyhow!("Invalid encoding: {}", e))?;
            }
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(anyhow::anyhow!("Invalid log level: {}", self.logging.level)),
        }

        Ok(())
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(charset) = std::env::var("CONSOLE_DRAW_CHARSET") {
            self.render.charset = charset;
        }
        if let Ok(color) = std::env::var("CONSOLE_DRAW_COLOR") {
            self.render.color = color;
        }
        if let Ok(level) = std::env::var("CONSOLE_DRAW_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Get a summary of the configuration
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Configuration loaded:\n");
        summary.push_str(&format!("Charset: {}\n", self.render.charset));
        summary.push_str(&format!("Color: {}\n", self.render.color));
        summary.push_str(&format!("Line Style: {}\n", self.render.line_style));
        summary.push_str(&format!("Fill Style: {}\n", self.render.fill_style));
        summary.push_str(&format!("Encoding: {}\n", self.render.encoding));
        summary.push_str(&format!("Logging Level: {}\n", self.logging.level));
        summary
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Glyph set name (utf8, utf8-heavy, ascii, dec)
    #[serde(default = "default_charset")]
    pub charset: String,
    /// Color policy (auto, always, never)
    #[serde(default = "default_color")]
    pub color: String,
    /// Default border style for boxes
    #[serde(default = "default_line_style")]
    pub line_style: String,
    /// Default interior fill for boxes
    #[serde(default = "default_fill_style")]
    pub fill_style: String,
    /// Width measurement (auto, utf8, bytes)
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_charset() -> String {
    "utf8".to_string()
}

fn default_color() -> String {
    "auto".to_string()
}

fn default_line_style() -> String {
    "single".to_string()
}

fn default_fill_style() -> String {
    "none".to_string()
}

fn default_encoding() -> String {
    "auto".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            charset: default_charset(),
            color: default_color(),
            line_style: default_line_style(),
            fill_style: default_fill_style(),
            encoding: default_encoding(),
        }
    }
}

impl RenderConfig {
    /// The configured charset
    ///
    /// An unknown name degrades to plain UTF-8 box drawing.
    pub fn charset(&self) -> Box<dyn Charset> {
        charset::by_name(&self.charset).unwrap_or_else(|| {
            tracing::warn!(charset = %self.charset, "Unknown charset, using utf8");
            Box::new(charset::Utf8)
        })
    }

    /// Color sink for the configured policy
    ///
    /// `is_tty` decides the `auto` policy.
    pub fn color_sink(&self, is_tty: bool) -> Box<dyn ColorSink> {
        let mode = ColorMode::from_str(&self.color).unwrap_or_default();
        if mode.enabled(is_tty) {
            Box::new(AnsiColor)
        } else {
            Box::new(NoColor)
        }
    }

    pub fn line_style(&self) -> Result<LineStyle> {
        LineStyle::from_str(&self.line_style)
            .map_err(|e| anyhow::anyhow!("Invalid line style: {}", e))
    }

    pub fn fill_style(&self) -> FillStyle {
        FillStyle::parse(&self.fill_style)
    }

    /// Text metrics for the configured encoding
    ///
    /// `auto` follows the device: `device_utf8` is what the output device
    /// reports through `Device::is_utf8`.
    pub fn text_metrics(&self, device_utf8: bool) -> Result<TextMetrics> {
        if self.encoding.trim().eq_ignore_ascii_case("auto") {
            let mode = if device_utf8 {
                EncodingMode::Utf8
            } else {
                EncodingMode::Bytes
            };
            return Ok(TextMetrics::new(mode));
        }
        let mode = EncodingMode::from_str(&self.encoding)
            .map_err(|e| anyhow::anyhow!("Invalid encoding: {}", e))?;
        Ok(TextMetrics::new(mode))
    }
}

/// When colored output is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Only when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "on" => Ok(ColorMode::Always),
            "never" | "off" => Ok(ColorMode::Never),
            _ => Err(anyhow::anyhow!("Invalid color mode: {}", s)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
