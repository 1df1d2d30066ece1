//! Render themes for the preview pane
//!
//! A [`Theme`] is a named bundle of presentation constants. Each theme maps
//! to exactly one static [`Palette`], and both renderers read every size,
//! colour and glyph from that table. Themes never change which Markdown
//! constructs are recognized, only how they look.
//!
//! # Usage
//!
//! ```ignore
//! use mdlive::theme::Theme;
//!
//! let palette = Theme::GitHub.palette();
//! let heading = palette.heading(1).wrap("Title");
//! ```
//!
//! # Theme Files
//!
//! - `light.rs` - palettes for light backgrounds (default, GitHub, GitLab, ...)
//! - `dark.rs` - palettes for dark backgrounds (GitHub Dark)

pub mod dark;
pub mod light;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::markup::{escape_markup, SpanAttrs};

// ─────────────────────────────────────────────────────────────────────────────
// Glyphs
// ─────────────────────────────────────────────────────────────────────────────

/// Marker for unordered list items.
pub const BULLET_GLYPH: &str = "• ";
/// Marker for ordered list items in the HTML path (the true ordinal is not tracked).
pub const ORDERED_GLYPH: &str = "1. ";
/// Marker for open task items.
pub const UNCHECKED_GLYPH: &str = "☐ ";
/// Marker for completed task items.
pub const CHECKED_GLYPH: &str = "☑ ";
/// Glyph used in image placeholders.
pub const IMAGE_GLYPH: &str = "🖼️";

/// Width of a horizontal rule, in glyphs.
pub const RULE_WIDTH: usize = 50;
/// Width of the dividers drawn under level 1 and level 2 headings.
pub const HEADING_RULE_WIDTHS: [usize; 2] = [60, 50];

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Available render themes for the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Default,
    GitHub,
    GitHubLight,
    GitHubDark,
    GitLab,
    Splendor,
    Modest,
    Retro,
    Air,
}

impl Theme {
    /// Get all available themes, in menu order.
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Default,
            Theme::GitHub,
            Theme::GitHubLight,
            Theme::GitHubDark,
            Theme::GitLab,
            Theme::Splendor,
            Theme::Modest,
            Theme::Retro,
            Theme::Air,
        ]
    }

    /// The persisted identifier of the theme.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::GitHub => "github",
            Theme::GitHubLight => "github-light",
            Theme::GitHubDark => "github-dark",
            Theme::GitLab => "gitlab",
            Theme::Splendor => "splendor",
            Theme::Modest => "modest",
            Theme::Retro => "retro",
            Theme::Air => "air",
        }
    }

    /// Get the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::GitHub => "GitHub",
            Theme::GitHubLight => "GitHub Light",
            Theme::GitHubDark => "GitHub Dark",
            Theme::GitLab => "GitLab",
            Theme::Splendor => "Splendor",
            Theme::Modest => "Modest",
            Theme::Retro => "Retro",
            Theme::Air => "Air",
        }
    }

    /// Look up a theme by its persisted identifier.
    pub fn parse(name: &str) -> Option<Theme> {
        let name = name.trim();
        Theme::all()
            .iter()
            .copied()
            .find(|theme| theme.name().eq_ignore_ascii_case(name))
    }

    /// Look up a theme by name, falling back to [`Theme::Default`] for unknown names.
    pub fn from_name(name: &str) -> Theme {
        Theme::parse(name).unwrap_or_default()
    }

    /// The presentation table for this theme.
    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Default => &light::DEFAULT,
            Theme::GitHub => &light::GITHUB,
            Theme::GitHubLight => &light::GITHUB_LIGHT,
            Theme::GitHubDark => &dark::GITHUB_DARK,
            Theme::GitLab => &light::GITLAB,
            Theme::Splendor => &light::SPLENDOR,
            Theme::Modest => &light::MODEST,
            Theme::Retro => &light::RETRO,
            Theme::Air => &light::AIR,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Theme::from_name(&name))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Palette
// ─────────────────────────────────────────────────────────────────────────────

/// Every presentation constant a renderer needs for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Font sizes for heading levels 1 to 6, in thousandths of a point
    pub heading_sizes: [u32; 6],
    /// Font weight of level 1 and level 2 headings (levels 3-6 are bold)
    pub heading_weights: [&'static str; 2],
    /// Foreground of level 1 and level 2 headings
    pub heading_colors: [Option<&'static str>; 2],
    /// Divider colours drawn after level 1 and level 2 headings
    pub heading_rules: [&'static str; 2],
    pub strong: SpanAttrs,
    pub emphasis: SpanAttrs,
    pub inline_code: SpanAttrs,
    /// Whether inline code gets a space of padding inside its span
    pub inline_code_padded: bool,
    pub code_block: SpanAttrs,
    pub link: SpanAttrs,
    pub quote: SpanAttrs,
    /// Marker emitted right after the blockquote span opens
    pub quote_prefix: &'static str,
    /// Text emitted right before the blockquote span closes
    pub quote_suffix: &'static str,
    pub rule_color: Option<&'static str>,
    pub rule_glyph: char,
    /// Colour for bullets, numbers and checkboxes
    pub list_glyph_color: Option<&'static str>,
}

impl Palette {
    /// Span attributes for a heading of the given level (clamped to 1..=6).
    pub fn heading(&self, level: u8) -> SpanAttrs {
        let level = level.clamp(1, 6);
        let size = self.heading_sizes[(level - 1) as usize];
        let attrs = SpanAttrs::new().size(size);
        if level <= 2 {
            let idx = (level - 1) as usize;
            attrs
                .weight(self.heading_weights[idx])
                .fg_opt(self.heading_colors[idx])
        } else {
            attrs.weight("bold")
        }
    }

    /// The divider line drawn after a level 1 or level 2 heading.
    pub fn heading_rule(&self, level: u8) -> Option<String> {
        if !(1..=2).contains(&level) {
            return None;
        }
        let idx = (level - 1) as usize;
        let line = "─".repeat(HEADING_RULE_WIDTHS[idx]);
        Some(SpanAttrs::new().fg(self.heading_rules[idx]).wrap(&line))
    }

    /// A horizontal rule of [`RULE_WIDTH`] glyphs.
    pub fn rule(&self) -> String {
        let line: String = std::iter::repeat(self.rule_glyph).take(RULE_WIDTH).collect();
        match self.rule_color {
            Some(color) => SpanAttrs::new().fg(color).wrap(&line),
            None => line,
        }
    }

    /// A list glyph, coloured when the theme colours list markers.
    pub fn list_glyph(&self, glyph: &str) -> String {
        match self.list_glyph_color {
            Some(color) => SpanAttrs::new().fg(color).wrap(glyph),
            None => glyph.to_string(),
        }
    }

    pub fn inline_code_open(&self) -> String {
        let mut open = self.inline_code.open();
        if self.inline_code_padded {
            open.push(' ');
        }
        open
    }

    pub fn inline_code_close(&self) -> &'static str {
        if self.inline_code_padded {
            " </span>"
        } else {
            "</span>"
        }
    }

    /// Wrap already-escaped inline code content.
    pub fn inline_code_wrap(&self, inner: &str) -> String {
        format!(
            "{}{}{}",
            self.inline_code_open(),
            inner,
            self.inline_code_close()
        )
    }

    pub fn quote_open(&self) -> String {
        format!("{}{}", self.quote.open(), escape_markup(self.quote_prefix))
    }

    pub fn quote_close(&self) -> String {
        format!("{}</span>", escape_markup(self.quote_suffix))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
