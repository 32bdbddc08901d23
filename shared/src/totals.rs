//! Aggregate figures shown in the dashboard summary cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stipend::{StipendRecord, StipendStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StipendTotals {
    /// Sum of every amount, withdrawn or not
    pub total_assigned: f64,
    /// Sum over records that can be withdrawn right now
    pub available: f64,
    /// `max(0, total - available - withdrawn)`
    pub locked: f64,
    /// Sum over withdrawn records
    pub withdrawn: f64,
    /// Records whose unlock date is still in the future
    pub upcoming_count: usize,
    pub available_count: usize,
    pub locked_count: usize,
}

impl StipendTotals {
    pub fn calculate(records: &[StipendRecord], now: DateTime<Utc>) -> Self {
        let mut totals = Self::default();

        for record in records {
            totals.total_assigned += record.amount;
            if record.is_upcoming(now) {
                totals.upcoming_count += 1;
            }
            match record.status(now) {
                StipendStatus::Available => {
                    totals.available += record.amount;
                    totals.available_count += 1;
                }
                StipendStatus::Locked => totals.locked_count += 1,
                StipendStatus::Withdrawn => totals.withdrawn += record.amount,
            }
        }

        let locked = totals.total_assigned - totals.available - totals.withdrawn;
        totals.locked = if locked >= 0.0 { locked } else { 0.0 };
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stipend::test_utils::record;

    #[test]
    fn test_empty_input_is_all_zero() {
        assert_eq!(StipendTotals::calculate(&[], Utc::now()), StipendTotals::default());
    }

    #[test]
    fn test_available_and_locked_split() {
        let now = Utc::now();
        let records = vec![
            record("a", 120.0, -1000, false, now),
            record("b", 50.0, 1000, false, now),
        ];

        let totals = StipendTotals::calculate(&records, now);

        assert_eq!(totals.available, 120.0);
        assert_eq!(totals.locked, 50.0);
        assert_eq!(totals.total_assigned, 170.0);
        assert_eq!(totals.upcoming_count, 1);
        assert_eq!(totals.available_count, 1);
        assert_eq!(totals.locked_count, 1);
    }

    #[test]
    fn test_total_matches_sum_of_parts() {
        let now = Utc::now();
        let records = vec![
            record("s1", 120.0, -3 * 86_400, false, now),
            record("s2", 300.0, 7 * 86_400, false, now),
            record("s3", 50.0, 30 * 86_400, false, now),
            record("s4", 75.0, -10 * 86_400, true, now),
            record("s5", 12.34, 0, false, now),
        ];

        let totals = StipendTotals::calculate(&records, now);
        let parts = totals.available + totals.locked + totals.withdrawn;

        assert!((totals.total_assigned - parts).abs() < 1e-9);
        assert_eq!(totals.withdrawn, 75.0);
        assert_eq!(totals.upcoming_count, 2);
    }

    #[test]
    fn test_withdrawn_upcoming_counts_as_upcoming_only() {
        let now = Utc::now();
        let records = vec![record("a", 40.0, 500, true, now)];

        let totals = StipendTotals::calculate(&records, now);

        assert_eq!(totals.upcoming_count, 1);
        assert_eq!(totals.locked_count, 0);
        assert_eq!(totals.locked, 0.0);
        assert_eq!(totals.withdrawn, 40.0);
    }
}
