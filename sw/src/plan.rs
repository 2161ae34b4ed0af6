//! Render plan types handed to the platform render adapter

use serde::{Deserialize, Serialize};

/// Background state of a day circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleState {
    /// Past day with a completed habit
    Done,
    /// Today, completed
    DoneToday,
    /// Today, not completed yet
    TodayPending,
    /// Past day without a completion while habits exist
    Missed,
    /// Nothing to report (fresh install, or a future slot)
    Pending,
}

impl std::fmt::Display for CircleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done => write!(f, "done"),
            Self::DoneToday => write!(f, "done_today"),
            Self::TodayPending => write!(f, "today_pending"),
            Self::Missed => write!(f, "missed"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// Glyph drawn inside a day circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaySymbol {
    Check,
    Fire,
    Cross,
    None,
}

impl DaySymbol {
    /// Glyph used by text renderers; empty for `None`
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Check => "✓",
            Self::Fire => "🔥",
            Self::Cross => "✕",
            Self::None => "",
        }
    }
}

impl std::fmt::Display for DaySymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Check => write!(f, "check"),
            Self::Fire => write!(f, "fire"),
            Self::Cross => write!(f, "cross"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Logical brightness tier of a weekday label.
///
/// The adapter owns the numeric alpha for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelBrightness {
    Full,
    Dim,
}

impl std::fmt::Display for LabelBrightness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Dim => write!(f, "dim"),
        }
    }
}

/// One slot of the 7-day indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Single-letter weekday abbreviation
    pub weekday_label: char,
    pub label_brightness: LabelBrightness,
    pub circle_state: CircleState,
    pub symbol: DaySymbol,
    /// Whether this slot is today; exactly one cell per plan sets it
    pub is_today: bool,
}

/// Fully resolved description of what the widget displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub counter_text: String,
    pub subtitle_text: String,
    /// Absent for layouts without a call-to-action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    pub days: [DayCell; crate::WINDOW_DAYS],
}

impl RenderPlan {
    /// Index of the cell marked as today
    pub fn today_index(&self) -> Option<usize> {
        self.days.iter().position(|d| d.is_today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_state_serde() {
        let json = serde_json::to_string(&CircleState::DoneToday).unwrap();
        assert_eq!(json, "\"done_today\"");

        let state: CircleState = serde_json::from_str("\"today_pending\"").unwrap();
        assert_eq!(state, CircleState::TodayPending);
    }

    #[test]
    fn test_display_matches_serde_names() {
        assert_eq!(CircleState::Missed.to_string(), "missed");
        assert_eq!(DaySymbol::Cross.to_string(), "cross");
        assert_eq!(LabelBrightness::Dim.to_string(), "dim");
    }

    #[test]
    fn test_symbol_glyphs() {
        assert_eq!(DaySymbol::Check.glyph(), "✓");
        assert_eq!(DaySymbol::None.glyph(), "");
    }

    #[test]
    fn test_cta_omitted_when_absent() {
        let cell = DayCell {
            weekday_label: 'M',
            label_brightness: LabelBrightness::Dim,
            circle_state: CircleState::Pending,
            symbol: DaySymbol::None,
            is_today: false,
        };
        let plan = RenderPlan {
            counter_text: "🔥 0".to_string(),
            subtitle_text: "Start your journey".to_string(),
            cta_text: None,
            days: [cell; crate::WINDOW_DAYS],
        };

        let json = serde_json::to_string(&plan).unwrap();
        assert!(!json.contains("cta_text"));
        assert_eq!(plan.today_index(), None);
    }
}
