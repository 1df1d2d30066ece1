//! Markdown rendering
//!
//! The [`Renderer`] facade owns the active theme and an ordered chain of
//! [`RenderStrategy`] implementations. Each strategy is tried in turn; the
//! first success wins. When every strategy fails the input is returned with
//! entity escaping only, so a render call always yields valid markup.
//!
//! Default chain:
//!
//! 1. [`HtmlPipeline`] - comrak conversion, then the HTML transducer
//! 2. [`LineFallback`] - line-oriented regex renderer
//! 3. raw text

pub mod debounce;
pub mod fallback;
pub mod html;
pub mod inline;
pub mod transducer;

use log::{debug, warn};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{Error, Result};
use crate::markup::escape_markup;
use crate::theme::{Palette, Theme};

pub use debounce::PreviewDebounce;
pub use fallback::render_fallback;
pub use html::ConversionOptions;
pub use inline::format_inline;
pub use transducer::{transduce, HtmlEvent, TagContext};

/// Name reported when every strategy failed and the raw text was returned.
pub const RAW_TEXT: &str = "raw-text";

// ─────────────────────────────────────────────────────────────────────────────
// Strategies
// ─────────────────────────────────────────────────────────────────────────────

/// One way of turning Markdown into markup.
pub trait RenderStrategy {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Render `text` with the given palette.
    fn render(&self, text: &str, palette: &Palette) -> Result<String>;
}

/// Markdown → HTML through comrak, then HTML → markup through the transducer.
#[derive(Debug, Clone, Default)]
pub struct HtmlPipeline {
    options: ConversionOptions,
}

impl HtmlPipeline {
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }
}

impl RenderStrategy for HtmlPipeline {
    fn name(&self) -> &'static str {
        "html-pipeline"
    }

    fn render(&self, text: &str, palette: &Palette) -> Result<String> {
        let html = html::markdown_to_html(text, &self.options)?;
        transduce(&html, palette)
    }
}

/// The line-oriented renderer, used when the HTML pipeline is not usable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFallback;

impl RenderStrategy for LineFallback {
    fn name(&self) -> &'static str {
        "line-fallback"
    }

    fn render(&self, text: &str, palette: &Palette) -> Result<String> {
        Ok(render_fallback(text, palette))
    }
}

/// The chain used by [`Renderer::new`].
pub fn default_strategies() -> Vec<Box<dyn RenderStrategy>> {
    vec![Box::new(HtmlPipeline::default()), Box::new(LineFallback)]
}

// ─────────────────────────────────────────────────────────────────────────────
// Renderer
// ─────────────────────────────────────────────────────────────────────────────

/// Renders Markdown to markup with the active theme.
pub struct Renderer {
    theme: Theme,
    strategies: Vec<Box<dyn RenderStrategy>>,
}

impl Renderer {
    /// Create a renderer with the default strategy chain.
    pub fn new(theme: Theme) -> Self {
        Self::with_strategies(theme, default_strategies())
    }

    /// Create a renderer with a custom strategy chain, tried in order.
    pub fn with_strategies(theme: Theme, strategies: Vec<Box<dyn RenderStrategy>>) -> Self {
        Self { theme, strategies }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Change the theme for subsequent renders.
    ///
    /// Existing output is not touched; callers re-render themselves.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            debug!("Render theme changed: {} -> {}", self.theme, theme);
        }
        self.theme = theme;
    }

    /// Names of the strategies in the order they are tried.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Render Markdown to markup. Never fails.
    pub fn render(&self, text: &str) -> String {
        self.render_traced(text).0
    }

    /// Render Markdown and report which strategy produced the markup.
    ///
    /// The second element is [`RAW_TEXT`] when the whole chain failed.
    pub fn render_traced(&self, text: &str) -> (String, &'static str) {
        let palette = self.theme.palette();

        for strategy in &self.strategies {
            match run_strategy(strategy.as_ref(), text, palette) {
                Ok(markup) => return (markup, strategy.name()),
                Err(err) => warn!("{} renderer failed: {}", strategy.name(), err),
            }
        }

        warn!("All renderers failed, showing raw text");
        (escape_markup(text), RAW_TEXT)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("theme", &self.theme)
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

/// Run one strategy, turning a panic into a [`Error::ParseFailure`].
fn run_strategy(strategy: &dyn RenderStrategy, text: &str, palette: &Palette) -> Result<String> {
    panic::catch_unwind(AssertUnwindSafe(|| strategy.render(text, palette)))
        .unwrap_or_else(|payload| Err(Error::ParseFailure(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {}", msg)
    } else {
        "panicked".to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
