//! # Progress Indicator
//!
//! Computes how full a stipend's progress bar is. The window starts a fixed
//! number of days before the wall-clock moment of computation, not at the
//! record's creation, so the reading drifts as real time passes.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressLabel {
    Completed,
    Unlocked,
    InProgress,
}

impl ProgressLabel {
    pub fn text(&self) -> &'static str {
        match self {
            ProgressLabel::Completed => "Completed",
            ProgressLabel::Unlocked => "Unlocked",
            ProgressLabel::InProgress => "In progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReading {
    /// Elapsed share of the window in [0, 100], or 100 when withdrawn
    pub percent: f64,
    /// Rendered bar width, never below the configured floor
    pub bar_width: f64,
    pub label: ProgressLabel,
}

impl ProgressReading {
    pub fn compute(
        unlock_date: DateTime<Utc>,
        now: DateTime<Utc>,
        wall_clock: DateTime<Utc>,
        withdrawn: bool,
    ) -> Self {
        Self::compute_with_config(unlock_date, now, wall_clock, withdrawn, &DashboardConfig::default())
    }

    pub fn compute_with_config(
        unlock_date: DateTime<Utc>,
        now: DateTime<Utc>,
        wall_clock: DateTime<Utc>,
        withdrawn: bool,
        config: &DashboardConfig,
    ) -> Self {
        let window_start = wall_clock - Duration::days(config.progress_window_days);
        let range = (unlock_date - window_start).num_seconds().max(1) as f64;
        let elapsed = (now - window_start).num_seconds() as f64;
        let filled = (elapsed / range).clamp(0.0, 1.0) * 100.0;

        let percent = if withdrawn { 100.0 } else { filled };
        let label = if withdrawn {
            ProgressLabel::Completed
        } else if percent >= 100.0 {
            ProgressLabel::Unlocked
        } else {
            ProgressLabel::InProgress
        };

        Self {
            percent,
            bar_width: percent.max(config.progress_floor_percent),
            label,
        }
    }

    pub fn rounded_percent(&self) -> u32 {
        self.percent.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_withdrawn_is_full() {
        let now = Utc::now();
        let reading = ProgressReading::compute(now + Duration::days(10), now, now, true);

        assert_eq!(reading.percent, 100.0);
        assert_eq!(reading.bar_width, 100.0);
        assert_eq!(reading.label, ProgressLabel::Completed);
    }

    #[test]
    fn test_past_unlock_is_full() {
        let now = Utc::now();
        let reading = ProgressReading::compute(now - Duration::days(3), now, now, false);

        assert_eq!(reading.percent, 100.0);
        assert_eq!(reading.label, ProgressLabel::Unlocked);
    }

    #[test]
    fn test_halfway_through_window() {
        let now = Utc::now();
        // window starts 30 days ago, unlock is 30 days out
        let reading = ProgressReading::compute(now + Duration::days(30), now, now, false);

        assert!((reading.percent - 50.0).abs() < 1e-6);
        assert_eq!(reading.rounded_percent(), 50);
        assert_eq!(reading.label, ProgressLabel::InProgress);
    }

    #[test]
    fn test_floor_keeps_bar_visible() {
        let now = Utc::now();
        let reading = ProgressReading::compute(now + Duration::days(3650), now, now, false);

        assert!(reading.percent < 6.0);
        assert_eq!(reading.bar_width, 6.0);
    }

    #[test]
    fn test_now_before_window_start_clamps_to_zero() {
        let wall_clock = Utc::now();
        let now = wall_clock - Duration::days(60);
        let reading = ProgressReading::compute(wall_clock + Duration::days(1), now, wall_clock, false);

        assert_eq!(reading.percent, 0.0);
        assert_eq!(reading.bar_width, 6.0);
    }

    #[test]
    fn test_unlock_before_window_start_uses_minimum_range() {
        let now = Utc::now();
        let reading = ProgressReading::compute(now - Duration::days(90), now, now, false);

        assert_eq!(reading.percent, 100.0);
    }

    #[test]
    fn test_bar_width_always_in_range() {
        let now = Utc::now();
        for offset_days in [-400, -31, -1, 0, 1, 15, 29, 30, 31, 365, 5000] {
            for withdrawn in [false, true] {
                let reading = ProgressReading::compute(now + Duration::days(offset_days), now, now, withdrawn);
                assert!(reading.bar_width >= 6.0 && reading.bar_width <= 100.0);
                assert_eq!(reading.percent == 100.0 && withdrawn, withdrawn);
            }
        }
    }
}
