//! Age-based evidence weighting
//!
//! Dated entries are discounted smoothly with a 30-day exponential
//! decay. Undated and future-dated entries always weigh 1.0: ambiguity
//! is never penalized. Weights scale evidence strength and insight
//! ranking only; entries are never discarded for being old.

use chrono::NaiveDate;

/// Decay window in days for the recency weight
pub const RECENCY_DECAY_DAYS: f64 = 30.0;

/// Weight in (0,1] for an optionally dated entry relative to `today`.
pub fn temporal_weight(date: Option<NaiveDate>, today: NaiveDate) -> f64 {
    let Some(date) = date else {
        return 1.0;
    };
    if date > today {
        return 1.0;
    }

    let age_days = (today - date).num_days() as f64;
    (-age_days / RECENCY_DECAY_DAYS).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_undated_is_full_weight() {
        let today = day(2024, 6, 1);
        assert!((temporal_weight(None, today) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_future_date_is_full_weight() {
        let today = day(2024, 6, 1);
        let future = day(2025, 1, 1);
        assert!((temporal_weight(Some(future), today) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_today_is_full_weight() {
        let today = day(2024, 6, 1);
        assert!((temporal_weight(Some(today), today) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_past_dates_decay() {
        let today = day(2024, 6, 1);
        let recent = temporal_weight(Some(day(2024, 5, 25)), today);
        let older = temporal_weight(Some(day(2024, 3, 1)), today);

        assert!(recent < 1.0);
        assert!(older < recent);
        assert!(older > 0.0);
    }

    #[test]
    fn test_thirty_day_decay_value() {
        let today = day(2024, 6, 1);
        let thirty_ago = day(2024, 5, 2);
        let weight = temporal_weight(Some(thirty_ago), today);
        // exp(-1) after one full decay window
        assert!((weight - (-1.0_f64).exp()).abs() < 1e-9);
    }
}
