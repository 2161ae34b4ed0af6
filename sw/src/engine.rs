//! Widget state derivation
//!
//! Turns a [`ProgressSnapshot`] plus the current calendar date into a
//! [`RenderPlan`]. Derivation is pure: no clock reads, no I/O, no state kept
//! between calls. The caller supplies `now`.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::copy::{self, CopyMode, CtaMode};
use crate::plan::RenderPlan;
use crate::snapshot::ProgressSnapshot;
use crate::window::{self, WindowMode};

/// Presentation options shared by all widget layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeriveOptions {
    /// Append `day`/`days` to the counter
    pub pluralize: bool,

    /// Subtitle rule set
    pub copy_mode: CopyMode,

    /// Call-to-action rule set; `None` for layouts without a CTA
    pub cta_mode: Option<CtaMode>,

    /// Slot-to-date mapping
    pub window: WindowMode,
}

impl DeriveOptions {
    /// Compact pill layout: bare counter, name-first copy, tiered CTA
    pub fn compact() -> Self {
        Self {
            pluralize: false,
            copy_mode: CopyMode::NameFirst,
            cta_mode: Some(CtaMode::Tiered),
            window: WindowMode::Rolling,
        }
    }

    /// Hero counter layout: pluralized counter, contextual copy, binary CTA
    pub fn hero() -> Self {
        Self {
            pluralize: true,
            copy_mode: CopyMode::Contextual,
            cta_mode: Some(CtaMode::Binary),
            window: WindowMode::Rolling,
        }
    }
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self::hero()
    }
}

/// Derivation engine bound to one set of presentation options
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetEngine {
    options: DeriveOptions,
}

impl WidgetEngine {
    /// Create an engine for the given options
    pub fn new(options: DeriveOptions) -> Self {
        Self { options }
    }

    /// Derive the render plan for `snapshot` as seen on `now`'s calendar date.
    ///
    /// Total over well-formed snapshots. Streaks are assumed already clamped
    /// to zero by whoever built the snapshot.
    pub fn derive<D: Datelike>(&self, snapshot: &ProgressSnapshot, now: &D) -> RenderPlan {
        let today = now.weekday();
        debug!(
            streak = snapshot.current_streak,
            has_any_habits = snapshot.has_any_habits,
            %today,
            window = %self.options.window,
            "WidgetEngine::derive: called"
        );

        let days = window::build_days(self.options.window, snapshot, today);
        let today_completed = snapshot.completed(self.options.window.today_index(today));

        let plan = RenderPlan {
            counter_text: copy::counter_text(snapshot.current_streak, self.options.pluralize),
            subtitle_text: copy::subtitle_text(self.options.copy_mode, snapshot, today_completed),
            cta_text: self
                .options
                .cta_mode
                .map(|mode| copy::cta_text(mode, snapshot.current_streak).to_string()),
            days,
        };

        debug!(subtitle = %plan.subtitle_text, "WidgetEngine::derive: done");
        plan
    }
}

/// Derive with the default (hero) options
pub fn derive<D: Datelike>(snapshot: &ProgressSnapshot, now: &D) -> RenderPlan {
    WidgetEngine::default().derive(snapshot, now)
}
