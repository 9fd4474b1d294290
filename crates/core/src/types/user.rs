//! Users and reading streaks

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive-day reading streak
///
/// Days are UTC calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Streak {
    #[serde(rename = "currentStreak")]
    pub current: u32,
    #[serde(rename = "longestStreak")]
    pub longest: u32,
    #[serde(rename = "lastActiveDate")]
    pub last_active: Option<NaiveDate>,
}

impl Streak {
    /// Records reading activity on `today`
    ///
    /// Same day leaves the streak unchanged, the next day extends it, and a
    /// longer gap restarts it at 1. An activity dated before the last one
    /// is ignored.
    pub fn record_activity(&mut self, today: NaiveDate) {
        let Some(last) = self.last_active else {
            self.current = 1;
            self.longest = self.longest.max(1);
            self.last_active = Some(today);
            return;
        };

        match (today - last).num_days() {
            0 => {}
            1 => {
                self.current += 1;
                self.longest = self.longest.max(self.current);
                self.last_active = Some(today);
            }
            d if d > 1 => {
                self.current = 1;
                self.last_active = Some(today);
            }
            _ => {}
        }
    }
}

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub name: String,
    #[serde(flatten)]
    pub streak: Streak,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            streak: Streak::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_first_activity() {
        let mut streak = Streak::default();
        streak.record_activity(day(1));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 1);
        assert_eq!(streak.last_active, Some(day(1)));
    }

    #[test]
    fn test_same_day_unchanged() {
        let mut streak = Streak::default();
        streak.record_activity(day(1));
        streak.record_activity(day(1));
        assert_eq!(streak.current, 1);
    }

    #[test]
    fn test_consecutive_days_extend() {
        let mut streak = Streak::default();
        for d in 1..=4 {
            streak.record_activity(day(d));
        }
        assert_eq!(streak.current, 4);
        assert_eq!(streak.longest, 4);
    }

    #[test]
    fn test_gap_resets_current_keeps_longest() {
        let mut streak = Streak::default();
        streak.record_activity(day(1));
        streak.record_activity(day(2));
        streak.record_activity(day(3));
        streak.record_activity(day(6));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 3);
        streak.record_activity(day(7));
        assert_eq!(streak.current, 2);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn test_user_serializes_streak_flat() {
        let user = User::new("reader@example.com", "Reader");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["email"], "reader@example.com");
        assert_eq!(json["currentStreak"], 0);
        assert!(json["lastActiveDate"].is_null());
    }
}
