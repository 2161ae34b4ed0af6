//! Copy selection for the counter, subtitle and call-to-action

use serde::{Deserialize, Serialize};

use crate::snapshot::ProgressSnapshot;

/// How the subtitle line is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyMode {
    /// Reacts to whether today is already completed
    #[default]
    Contextual,
    /// Greets by name first, ignores today's completion
    NameFirst,
    /// Cheers by streak length only
    StreakTiered,
}

impl std::fmt::Display for CopyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contextual => write!(f, "contextual"),
            Self::NameFirst => write!(f, "name_first"),
            Self::StreakTiered => write!(f, "streak_tiered"),
        }
    }
}

impl std::str::FromStr for CopyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contextual" => Ok(Self::Contextual),
            "name_first" | "name-first" | "namefirst" => Ok(Self::NameFirst),
            "streak_tiered" | "streak-tiered" => Ok(Self::StreakTiered),
            _ => Err(format!("Unknown copy mode: {}", s)),
        }
    }
}

/// How the call-to-action line is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaMode {
    /// Five tiers by streak length
    #[default]
    Tiered,
    /// Zero versus non-zero streak
    Binary,
}

impl std::fmt::Display for CtaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tiered => write!(f, "tiered"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

impl std::str::FromStr for CtaMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tiered" => Ok(Self::Tiered),
            "binary" => Ok(Self::Binary),
            _ => Err(format!("Unknown CTA mode: {}", s)),
        }
    }
}

/// Streak counter, e.g. `🔥 5` or `🔥 5 days`
pub fn counter_text(streak: u32, pluralize: bool) -> String {
    if !pluralize {
        return format!("🔥 {}", streak);
    }
    let unit = if streak == 1 { "day" } else { "days" };
    format!("🔥 {} {}", streak, unit)
}

/// Subtitle under the counter.
///
/// `today_completed` is passed in because its slot depends on the window mode.
pub fn subtitle_text(mode: CopyMode, snapshot: &ProgressSnapshot, today_completed: bool) -> String {
    let name = snapshot.user_name.as_str();
    match mode {
        CopyMode::Contextual => {
            if !snapshot.has_any_habits {
                "Start your journey".to_string()
            } else if snapshot.has_user_name() && !today_completed {
                format!("{}! Streak?", name)
            } else if snapshot.has_user_name() {
                format!("Keep it up, {}", name)
            } else if today_completed {
                "Great job today!".to_string()
            } else {
                "Keep the streak going!".to_string()
            }
        }
        CopyMode::NameFirst => {
            if snapshot.has_user_name() {
                format!("Keep it up, {}", name)
            } else if !snapshot.has_any_habits {
                "Create your first task to start your streak".to_string()
            } else {
                "Keep going — you're building a great habit".to_string()
            }
        }
        CopyMode::StreakTiered => match snapshot.current_streak {
            0 => "Your journey starts now".to_string(),
            1 => "Great start — day 1 done!".to_string(),
            2..=6 => "Building momentum…".to_string(),
            7..=29 => "You're on a roll!".to_string(),
            _ => "You're unstoppable!".to_string(),
        },
    }
}

/// Call-to-action label
pub fn cta_text(mode: CtaMode, streak: u32) -> &'static str {
    match mode {
        CtaMode::Tiered => match streak {
            0 => "Start your streak today",
            1..=2 => "Keep the momentum going",
            3..=6 => "Stay consistent",
            7..=29 => "You're doing great!",
            _ => "Legendary streak — keep going",
        },
        CtaMode::Binary => match streak {
            0 => "Start your streak today",
            _ => "Stay Consistent",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(has_any_habits: bool, user_name: &str) -> ProgressSnapshot {
        ProgressSnapshot::new(0, &[], has_any_habits, user_name)
    }

    #[test]
    fn test_counter_text_bare() {
        assert_eq!(counter_text(0, false), "🔥 0");
        assert_eq!(counter_text(12, false), "🔥 12");
    }

    #[test]
    fn test_counter_text_pluralized() {
        assert_eq!(counter_text(0, true), "🔥 0 days");
        assert_eq!(counter_text(1, true), "🔥 1 day");
        assert_eq!(counter_text(2, true), "🔥 2 days");
    }

    #[test]
    fn test_contextual_fresh_install_beats_name() {
        let s = snapshot(false, "Alex");
        assert_eq!(subtitle_text(CopyMode::Contextual, &s, true), "Start your journey");
        assert_eq!(subtitle_text(CopyMode::Contextual, &s, false), "Start your journey");
    }

    #[test]
    fn test_contextual_rules() {
        let named = snapshot(true, "Alex");
        let anon = snapshot(true, "");
        assert_eq!(subtitle_text(CopyMode::Contextual, &named, false), "Alex! Streak?");
        assert_eq!(subtitle_text(CopyMode::Contextual, &named, true), "Keep it up, Alex");
        assert_eq!(subtitle_text(CopyMode::Contextual, &anon, true), "Great job today!");
        assert_eq!(subtitle_text(CopyMode::Contextual, &anon, false), "Keep the streak going!");
    }

    #[test]
    fn test_name_first_rules() {
        assert_eq!(
            subtitle_text(CopyMode::NameFirst, &snapshot(false, "Alex"), false),
            "Keep it up, Alex"
        );
        assert_eq!(
            subtitle_text(CopyMode::NameFirst, &snapshot(false, ""), true),
            "Create your first task to start your streak"
        );
        assert_eq!(
            subtitle_text(CopyMode::NameFirst, &snapshot(true, ""), true),
            "Keep going — you're building a great habit"
        );
    }

    #[test]
    fn test_streak_tiered_boundaries() {
        let subtitle = |streak| {
            let s = ProgressSnapshot::new(streak, &[], true, "Alex");
            subtitle_text(CopyMode::StreakTiered, &s, false)
        };
        assert_eq!(subtitle(0), "Your journey starts now");
        assert_eq!(subtitle(1), "Great start — day 1 done!");
        assert_eq!(subtitle(2), "Building momentum…");
        assert_eq!(subtitle(6), "Building momentum…");
        assert_eq!(subtitle(7), "You're on a roll!");
        assert_eq!(subtitle(29), "You're on a roll!");
        assert_eq!(subtitle(30), "You're unstoppable!");
    }

    #[test]
    fn test_streak_tiered_ignores_name_and_today() {
        let named = ProgressSnapshot::new(1, &[], false, "Alex");
        assert_eq!(
            subtitle_text(CopyMode::StreakTiered, &named, true),
            "Great start — day 1 done!"
        );
    }

    #[test]
    fn test_cta_tiered_boundaries() {
        assert_eq!(cta_text(CtaMode::Tiered, 0), "Start your streak today");
        assert_eq!(cta_text(CtaMode::Tiered, 1), "Keep the momentum going");
        assert_eq!(cta_text(CtaMode::Tiered, 2), "Keep the momentum going");
        assert_eq!(cta_text(CtaMode::Tiered, 3), "Stay consistent");
        assert_eq!(cta_text(CtaMode::Tiered, 6), "Stay consistent");
        assert_eq!(cta_text(CtaMode::Tiered, 7), "You're doing great!");
        assert_eq!(cta_text(CtaMode::Tiered, 29), "You're doing great!");
        assert_eq!(cta_text(CtaMode::Tiered, 30), "Legendary streak — keep going");
    }

    #[test]
    fn test_cta_binary() {
        assert_eq!(cta_text(CtaMode::Binary, 0), "Start your streak today");
        assert_eq!(cta_text(CtaMode::Binary, 1), "Stay Consistent");
        assert_eq!(cta_text(CtaMode::Binary, 400), "Stay Consistent");
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("CONTEXTUAL".parse::<CopyMode>().unwrap(), CopyMode::Contextual);
        assert_eq!("name-first".parse::<CopyMode>().unwrap(), CopyMode::NameFirst);
        assert_eq!("streak-tiered".parse::<CopyMode>().unwrap(), CopyMode::StreakTiered);
        assert_eq!("binary".parse::<CtaMode>().unwrap(), CtaMode::Binary);
        assert!("loud".parse::<CtaMode>().is_err());
    }

    #[test]
    fn test_mode_serde() {
        assert_eq!(serde_json::to_string(&CopyMode::NameFirst).unwrap(), "\"name_first\"");
        let copy: CopyMode = serde_json::from_str("\"streak_tiered\"").unwrap();
        assert_eq!(copy, CopyMode::StreakTiered);
        assert_eq!(CopyMode::StreakTiered.to_string(), "streak_tiered");
        let mode: CtaMode = serde_json::from_str("\"tiered\"").unwrap();
        assert_eq!(mode, CtaMode::Tiered);
    }
}
