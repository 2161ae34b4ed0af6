//! Progress snapshot supplied by the host application
//!
//! The snapshot is the only input the engine reads besides the clock. Every
//! boundary default lives here so read sites never invent fallback literals.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::WINDOW_DAYS;

/// Preference key holding the current streak count
pub const KEY_STREAK_CURRENT: &str = "streak_current";

/// Preference key holding the completion flags, e.g. `"1100100"`
pub const KEY_STREAK_DAYS: &str = "streak_days";

/// Preference key set once the user tracks at least one habit
pub const KEY_HAS_ANY_HABITS: &str = "has_any_habits";

/// Preference key holding the display name
pub const KEY_USER_NAME: &str = "user_name";

/// Persisted view of the user's progress.
///
/// `completion[0]` is six days before today and `completion[6]` is today
/// (under the rolling window). Streaks are non-negative by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Consecutive-day count
    #[serde(default, deserialize_with = "de_streak")]
    pub current_streak: u32,

    /// Per-day completion flags
    #[serde(default, alias = "completion_bitmask", deserialize_with = "de_completion")]
    pub completion: [bool; WINDOW_DAYS],

    /// False only before the first habit is created
    #[serde(default)]
    pub has_any_habits: bool,

    /// Display name, empty when not set
    #[serde(default)]
    pub user_name: String,
}

impl ProgressSnapshot {
    /// Create a snapshot, normalizing the completion flags to the window size
    pub fn new(current_streak: u32, completion: &[bool], has_any_habits: bool, user_name: impl Into<String>) -> Self {
        Self {
            current_streak,
            completion: normalize_completion(completion),
            has_any_habits,
            user_name: user_name.into(),
        }
    }

    /// Read a snapshot from the host app's preference dictionary.
    ///
    /// Missing or mistyped entries fall back to their defaults; negative
    /// streaks clamp to zero.
    pub fn from_prefs(prefs: &Map<String, Value>) -> Self {
        debug!(keys = prefs.len(), "ProgressSnapshot::from_prefs: called");

        let current_streak = match prefs.get(KEY_STREAK_CURRENT) {
            None | Some(Value::Null) => 0,
            Some(Value::Number(n)) => match n.as_i64() {
                Some(v) => clamp_streak(v),
                None => {
                    warn!(key = KEY_STREAK_CURRENT, value = %n, "Non-integer streak, using 0");
                    0
                }
            },
            Some(other) => {
                warn!(key = KEY_STREAK_CURRENT, value = %other, "Mistyped streak, using 0");
                0
            }
        };

        let completion = match prefs.get(KEY_STREAK_DAYS) {
            None | Some(Value::Null) => [false; WINDOW_DAYS],
            Some(Value::String(bits)) => parse_bits(bits),
            Some(Value::Array(items)) => {
                let flags: Vec<bool> = items.iter().map(|v| v.as_bool().unwrap_or(false)).collect();
                normalize_completion(&flags)
            }
            Some(other) => {
                warn!(key = KEY_STREAK_DAYS, value = %other, "Mistyped completion flags, using none");
                [false; WINDOW_DAYS]
            }
        };

        let has_any_habits = match prefs.get(KEY_HAS_ANY_HABITS) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                warn!(key = KEY_HAS_ANY_HABITS, value = %other, "Mistyped habit flag, using false");
                false
            }
        };

        let user_name = match prefs.get(KEY_USER_NAME) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                warn!(key = KEY_USER_NAME, value = %other, "Mistyped user name, using empty");
                String::new()
            }
        };

        Self {
            current_streak,
            completion,
            has_any_habits,
            user_name,
        }
    }

    /// Completion flag at `index`, false outside the window
    pub fn completed(&self, index: usize) -> bool {
        self.completion.get(index).copied().unwrap_or(false)
    }

    /// Whether the last slot of the rolling window is completed
    pub fn today_completed(&self) -> bool {
        self.completion[WINDOW_DAYS - 1]
    }

    /// Whether a display name is set
    pub fn has_user_name(&self) -> bool {
        !self.user_name.is_empty()
    }
}

/// Right-pad with `false` (or truncate) to exactly the window size
pub fn normalize_completion(flags: &[bool]) -> [bool; WINDOW_DAYS] {
    if flags.len() != WINDOW_DAYS {
        warn!(len = flags.len(), "Completion flags are not {} long, normalizing", WINDOW_DAYS);
    }
    let mut out = [false; WINDOW_DAYS];
    for (slot, flag) in out.iter_mut().zip(flags) {
        *slot = *flag;
    }
    out
}

/// Parse the `"1100100"` form; only `'1'` counts as completed
pub fn parse_bits(bits: &str) -> [bool; WINDOW_DAYS] {
    let flags: Vec<bool> = bits.chars().map(|c| c == '1').collect();
    normalize_completion(&flags)
}

fn clamp_streak(value: i64) -> u32 {
    if value < 0 {
        warn!(value, "Negative streak, clamping to 0");
    }
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn de_streak<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(clamp_streak(value))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCompletion {
    Bits(String),
    Flags(Vec<bool>),
}

fn de_completion<'de, D>(deserializer: D) -> Result<[bool; WINDOW_DAYS], D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawCompletion::deserialize(deserializer)? {
        RawCompletion::Bits(bits) => parse_bits(&bits),
        RawCompletion::Flags(flags) => normalize_completion(&flags),
    })
}
