//! mdlive - Markdown to styled markup for a live preview pane
//!
//! The crate turns Markdown source into Pango-style span markup that a text
//! widget can display directly, and bundles the pieces a preview editor needs
//! around it: named render themes, case-insensitive in-document search,
//! document statistics with a table of contents, and persisted settings.
//!
//! ```ignore
//! use mdlive::{Renderer, Theme};
//!
//! let renderer = Renderer::new(Theme::GitHub);
//! let markup = renderer.render("# Hello\n\nSome **bold** text");
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod markup;
pub mod render;
pub mod search;
pub mod string_utils;
pub mod theme;

pub use config::{load_config, save_config, Settings};
pub use error::{Error, Result};
pub use render::{PreviewDebounce, RenderStrategy, Renderer};
pub use search::{
    find_matches, HighlightSurface, MarkupHighlighter, MatchSpan, SearchIndex, SearchStatus,
};
pub use theme::{Palette, Theme};
