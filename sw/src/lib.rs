//! StreakWidget - habit streak widget state derivation
//!
//! Derives everything a home-screen streak widget shows from a small
//! persisted progress snapshot: counter text, subtitle, call-to-action and a
//! seven-day indicator. The platform adapter paints the resulting
//! [`RenderPlan`]; nothing here touches a UI surface or reads the clock.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use streakwidget::{DeriveOptions, ProgressSnapshot, WidgetEngine};
//!
//! let snapshot = ProgressSnapshot::new(5, &[true, true, false, true, true, true, false], true, "Alex");
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let plan = WidgetEngine::new(DeriveOptions::hero()).derive(&snapshot, &today);
//!
//! assert_eq!(plan.counter_text, "🔥 5 days");
//! assert_eq!(plan.subtitle_text, "Alex! Streak?");
//! ```

pub mod cli;
pub mod config;
pub mod copy;
pub mod engine;
pub mod plan;
pub mod snapshot;
pub mod window;

pub use copy::{CopyMode, CtaMode};
pub use engine::{DeriveOptions, WidgetEngine, derive};
pub use plan::{CircleState, DayCell, DaySymbol, LabelBrightness, RenderPlan};
pub use snapshot::ProgressSnapshot;
pub use window::WindowMode;

/// Number of slots in the day indicator
pub const WINDOW_DAYS: usize = 7;
