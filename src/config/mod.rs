//! Configuration file management
//!
//! Loads TOML configuration files and provides rendering settings for the
//! `segdisp` binary.
//! Default config path: ~/.config/segdisp/config.toml

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::canvas::{CellAttrs, CellStyle, Color};
use crate::constants::{MIN_COLS, MIN_ROWS};
use crate::utils::parse_color;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Appearance settings
    pub appearance: AppearanceConfig,
    /// Layout settings
    pub layout: LayoutConfig,
}

/// Appearance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Foreground color: "default", palette index (0-255) or RRGGBB
    pub foreground: String,
    /// Background color: "default", palette index (0-255) or RRGGBB
    pub background: String,
    /// Draw segments in bold
    pub bold: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            foreground: "e06c75".to_string(), // Muted red, LED-like
            background: "default".to_string(),
            bold: false,
        }
    }
}

impl AppearanceConfig {
    /// Parse a color setting, falling back to the terminal default
    fn color(name: &str, spec: &str) -> Color {
        parse_color(spec).unwrap_or_else(|| {
            warn!("Invalid {} color {:?}, using default", name, spec);
            Color::Default
        })
    }

    /// Cell style for the segments
    pub fn cell_style(&self) -> CellStyle {
        let attrs = if self.bold {
            CellAttrs::BOLD
        } else {
            CellAttrs::empty()
        };
        CellStyle::default()
            .fg(Self::color("foreground", &self.foreground))
            .bg(Self::color("background", &self.background))
            .attrs(attrs)
    }
}

/// Layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Cell columns available to each glyph
    pub cols: i32,
    /// Cell rows available to each glyph
    pub rows: i32,
    /// Blank columns between glyphs
    pub spacing: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cols: 12,
            rows: 10,
            spacing: 1,
        }
    }
}

impl LayoutConfig {
    /// Clamp values to what a display can be drawn in
    pub fn sanitized(&self) -> Self {
        let clamped = Self {
            cols: self.cols.max(MIN_COLS),
            rows: self.rows.max(MIN_ROWS),
            spacing: self.spacing.max(0),
        };
        if clamped != *self {
            warn!(
                "Layout {}x{} (spacing {}) adjusted to {}x{} (spacing {})",
                self.cols, self.rows, self.spacing, clamped.cols, clamped.rows, clamped.spacing
            );
        }
        clamped
    }
}

impl Config {
    /// Environment variable overriding the config path
    const CONFIG_ENV: &'static str = "SEGDISP_CONFIG";

    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        // 1. SEGDISP_CONFIG environment variable
        if let Ok(path) = std::env::var(Self::CONFIG_ENV) {
            let p = Path::new(&path);
            if p.exists() {
                return Some(p.to_path_buf());
            }
            warn!("{} points to missing file: {}", Self::CONFIG_ENV, path);
        }

        // 2. User config: ~/.config/segdisp/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("segdisp").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }
        }

        None
    }

    /// Load configuration with priority:
    /// 1. SEGDISP_CONFIG environment variable
    /// 2. ~/.config/segdisp/config.toml (user config)
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {:#}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Settings as TOML text (for template generation)
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(
            r#"
[appearance]
foreground = "00ff00"
bold = true

[layout]
rows = 20
"#,
        )
        .unwrap();
        assert_eq!(config.layout.rows, 20);
        assert_eq!(config.layout.cols, LayoutConfig::default().cols);
        let style = config.appearance.cell_style();
        assert_eq!(style.fg, Color::Rgb(0, 255, 0));
        assert_eq!(style.bg, Color::Default);
        assert!(style.attrs.contains(CellAttrs::BOLD));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml("[layout\ncols = 3").is_err());
        assert!(Config::from_toml("[layout]\ncols = \"wide\"").is_err());
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let appearance = AppearanceConfig {
            foreground: "nope".to_string(),
            ..Default::default()
        };
        assert_eq!(appearance.cell_style().fg, Color::Default);
    }

    #[test]
    fn test_layout_sanitized() {
        let layout = LayoutConfig {
            cols: 2,
            rows: 40,
            spacing: -3,
        };
        assert_eq!(
            layout.sanitized(),
            LayoutConfig {
                cols: MIN_COLS,
                rows: 40,
                spacing: 0
            }
        );
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let text = Config::default().to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from_file(Path::new("/nonexistent/segdisp.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
