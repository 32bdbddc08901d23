//! Hard-coded demo boards, positioned relative to the moment they are built.

use chrono::{DateTime, Duration, Utc};

use crate::stipend::StipendRecord;

/// Stipends the parent dashboard starts with
pub fn parent_stipends(now: DateTime<Utc>) -> Vec<StipendRecord> {
    vec![
        StipendRecord {
            id: "p1".to_string(),
            student: Some("0x3a...9f2".to_string()),
            amount: 120.0,
            category: "Living Support".to_string(),
            description: None,
            unlock_date: now + Duration::days(3),
            created_at: Some(now - Duration::days(2)),
            withdrawn: false,
        },
        StipendRecord {
            id: "p2".to_string(),
            student: Some("0x7b...c13".to_string()),
            amount: 50.0,
            category: "Books".to_string(),
            description: None,
            unlock_date: now + Duration::days(14),
            created_at: Some(now - Duration::days(1)),
            withdrawn: false,
        },
    ]
}

fn student_stipend(
    id: &str,
    amount: f64,
    unlock_date: DateTime<Utc>,
    withdrawn: bool,
    category: &str,
    description: &str,
) -> StipendRecord {
    StipendRecord {
        id: id.to_string(),
        student: None,
        amount,
        category: category.to_string(),
        description: Some(description.to_string()),
        unlock_date,
        created_at: None,
        withdrawn,
    }
}

/// Stipends the student dashboard loads
pub fn student_stipends(now: DateTime<Utc>) -> Vec<StipendRecord> {
    vec![
        student_stipend("s1", 120.0, now - Duration::days(3), false, "Living Support", "Monthly living stipend"),
        student_stipend("s2", 300.0, now + Duration::days(7), false, "Tuition", "Semester tuition allocation"),
        student_stipend("s3", 50.0, now + Duration::days(30), false, "Books", "Books and supplies"),
        student_stipend("s4", 75.0, now - Duration::days(10), true, "Transport", "Transport reimbursement"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totals::StipendTotals;

    #[test]
    fn test_student_sample_totals() {
        let now = Utc::now();
        let totals = StipendTotals::calculate(&student_stipends(now), now);

        assert_eq!(totals.total_assigned, 545.0);
        assert_eq!(totals.available, 120.0);
        assert_eq!(totals.locked, 350.0);
        assert_eq!(totals.withdrawn, 75.0);
        assert_eq!(totals.available_count, 1);
        assert_eq!(totals.locked_count, 2);
    }

    #[test]
    fn test_parent_sample_totals() {
        let now = Utc::now();
        let totals = StipendTotals::calculate(&parent_stipends(now), now);

        assert_eq!(totals.total_assigned, 170.0);
        assert_eq!(totals.upcoming_count, 2);
    }
}
