//! Seven-day indicator: slot classification and weekday labels

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::WINDOW_DAYS;
use crate::plan::{CircleState, DayCell, DaySymbol, LabelBrightness};
use crate::snapshot::ProgressSnapshot;

/// How the seven completion slots map onto calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Last slot is always today; the window rolls forward every day
    #[default]
    Rolling,
    /// Slots are Monday through Sunday of the current week
    CalendarWeek,
}

impl WindowMode {
    /// Slot holding today for a given weekday
    pub fn today_index(&self, today: Weekday) -> usize {
        match self {
            Self::Rolling => WINDOW_DAYS - 1,
            Self::CalendarWeek => today.num_days_from_monday() as usize,
        }
    }

    /// Weekday shown in slot `index`
    pub fn weekday_at(&self, index: usize, today: Weekday) -> Weekday {
        match self {
            Self::Rolling => (index..WINDOW_DAYS - 1).fold(today, |day, _| day.pred()),
            Self::CalendarWeek => (0..index).fold(Weekday::Mon, |day, _| day.succ()),
        }
    }
}

impl std::fmt::Display for WindowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rolling => write!(f, "rolling"),
            Self::CalendarWeek => write!(f, "calendar_week"),
        }
    }
}

impl std::str::FromStr for WindowMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rolling" => Ok(Self::Rolling),
            "calendar_week" | "calendar-week" | "week" => Ok(Self::CalendarWeek),
            _ => Err(format!("Unknown window mode: {}", s)),
        }
    }
}

/// Single-letter label: S M T W T F S
pub fn weekday_letter(day: Weekday) -> char {
    match day {
        Weekday::Sun | Weekday::Sat => 'S',
        Weekday::Mon => 'M',
        Weekday::Tue | Weekday::Thu => 'T',
        Weekday::Wed => 'W',
        Weekday::Fri => 'F',
    }
}

/// Classify one slot.
///
/// Future slots only exist in the calendar-week window and are never missed.
pub fn classify(
    weekday_label: char,
    completed: bool,
    is_today: bool,
    is_future: bool,
    has_any_habits: bool,
) -> DayCell {
    let is_missed = !is_today && !is_future && !completed && has_any_habits;

    let circle_state = match (is_today, completed) {
        (true, true) => CircleState::DoneToday,
        (true, false) => CircleState::TodayPending,
        (false, true) => CircleState::Done,
        (false, false) if is_missed => CircleState::Missed,
        (false, false) => CircleState::Pending,
    };

    let symbol = if completed {
        DaySymbol::Check
    } else if is_today {
        DaySymbol::Fire
    } else if is_missed {
        DaySymbol::Cross
    } else {
        DaySymbol::None
    };

    let label_brightness = if is_today { LabelBrightness::Full } else { LabelBrightness::Dim };

    DayCell {
        weekday_label,
        label_brightness,
        circle_state,
        symbol,
        is_today,
    }
}

/// Build all seven cells for `today`
pub fn build_days(mode: WindowMode, snapshot: &ProgressSnapshot, today: Weekday) -> [DayCell; WINDOW_DAYS] {
    let today_index = mode.today_index(today);
    std::array::from_fn(|i| {
        classify(
            weekday_letter(mode.weekday_at(i, today)),
            snapshot.completed(i),
            i == today_index,
            i > today_index,
            snapshot.has_any_habits,
        )
    })
}
