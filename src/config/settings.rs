//! User settings for mdlive
//!
//! This module defines the `Settings` struct that holds the persisted
//! preferences the rendering core reads, with serde support for JSON
//! persistence.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Interface languages the application ships translations for.
pub const SUPPORTED_LANGUAGES: &[&str] = &["auto", "en", "es"];

// ─────────────────────────────────────────────────────────────────────────────
// Search Highlight Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Colours of the two search highlight layers, read by
/// [`MarkupHighlighter`](crate::search::MarkupHighlighter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Background of every match
    pub match_background: String,
    /// Background of the match under the cursor
    pub current_background: String,
}

impl SearchSettings {
    pub const DEFAULT_MATCH_BACKGROUND: &'static str = "#ffff00";
    pub const DEFAULT_CURRENT_BACKGROUND: &'static str = "#ff6600";
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            match_background: Self::DEFAULT_MATCH_BACKGROUND.to_string(),
            current_background: Self::DEFAULT_CURRENT_BACKGROUND.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences read by the rendering core.
///
/// All fields have defaults via `#[serde(default)]`, so partial or older
/// config files load cleanly. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme used by the preview renderer
    pub render_style: Theme,
    /// Whether the application chrome uses a dark variant. Only the
    /// embedding shell reads this; the preview palette comes from `render_style`.
    pub dark_theme: bool,
    /// Interface language code, or "auto" to follow the system locale
    pub language: String,
    pub search: SearchSettings,
    /// Delay before re-rendering after an edit; 0 renders on every keystroke.
    /// See [`PreviewDebounce`](crate::render::PreviewDebounce).
    pub preview_debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            render_style: Theme::default(),
            dark_theme: false,
            language: String::from("auto"),
            search: SearchSettings::default(),
            preview_debounce_ms: 0,
        }
    }
}

impl Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Validation Constants and Sanitization
    // ─────────────────────────────────────────────────────────────────────────

    /// Maximum allowed preview debounce.
    pub const MAX_DEBOUNCE_MS: u64 = 2000;

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// This is useful after loading settings from a file that might have
    /// been manually edited with invalid values.
    pub fn sanitize(&mut self) {
        self.preview_debounce_ms = self.preview_debounce_ms.min(Self::MAX_DEBOUNCE_MS);

        if !SUPPORTED_LANGUAGES.contains(&self.language.as_str()) {
            self.language = String::from("auto");
        }

        if !is_hex_color(&self.search.match_background) {
            self.search.match_background = SearchSettings::DEFAULT_MATCH_BACKGROUND.to_string();
        }
        if !is_hex_color(&self.search.current_background) {
            self.search.current_background =
                SearchSettings::DEFAULT_CURRENT_BACKGROUND.to_string();
        }
    }

    /// Load settings and sanitize them to ensure validity.
    ///
    /// This is a convenience method that deserializes and then sanitizes.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

/// `#rgb`, `#rrggbb` or `#rrggbbaa`.
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
