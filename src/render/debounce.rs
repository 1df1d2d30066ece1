//! Re-render scheduling for the live preview
//!
//! The display surface reports every edit with [`PreviewDebounce::note_edit`]
//! and polls on its event loop. A render becomes due once the configured delay
//! has passed since the last edit. A zero delay renders on the next poll.

use std::time::{Duration, Instant};

use crate::config::Settings;

/// Tracks whether the preview is stale and when it should be re-rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDebounce {
    delay: Duration,
    /// Time of the most recent unrendered edit
    pending_since: Option<Instant>,
}

impl PreviewDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    /// Use the `preview_debounce_ms` setting.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Duration::from_millis(settings.preview_debounce_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an edit; restarts the wait.
    pub fn note_edit(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Returns `true` exactly once per burst of edits, when the delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(edited) if now.saturating_duration_since(edited) >= self.delay => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for PreviewDebounce {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
