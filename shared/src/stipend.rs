use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category used when the assign form leaves the category blank
pub const UNSPECIFIED_CATEGORY: &str = "Unspecified";

/// A monetary allocation that unlocks at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StipendRecord {
    /// Opaque id, unique within a board
    pub id: String,
    /// Recipient wallet address or student id (parent view only)
    pub student: Option<String>,
    /// Amount in the display currency unit (never negative)
    pub amount: f64,
    pub category: String,
    /// Free-text note shown on student cards
    pub description: Option<String>,
    /// Eligible for withdrawal from this instant on
    pub unlock_date: DateTime<Utc>,
    /// Set when a parent assigns the stipend
    pub created_at: Option<DateTime<Utc>>,
    /// Monotonic: once true it is never reset
    pub withdrawn: bool,
}

/// The three mutually exclusive states a record can be in at a given time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StipendStatus {
    Withdrawn,
    Available,
    Locked,
}

impl StipendRecord {
    /// Generate a fresh record id
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn status(&self, now: DateTime<Utc>) -> StipendStatus {
        if self.withdrawn {
            StipendStatus::Withdrawn
        } else if self.unlock_date <= now {
            StipendStatus::Available
        } else {
            StipendStatus::Locked
        }
    }

    pub fn is_available(&self, now: DateTime<Utc>) -> bool {
        self.status(now) == StipendStatus::Available
    }

    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        self.status(now) == StipendStatus::Locked
    }

    /// Unlock lies in the future, regardless of the withdrawn flag
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.unlock_date > now
    }

    /// First character of the category, used as the card badge
    pub fn category_initial(&self) -> String {
        self.category
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

impl StipendStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StipendStatus::Withdrawn => "Withdrawn",
            StipendStatus::Available => "Available",
            StipendStatus::Locked => "Locked",
        }
    }

    /// CSS modifier for status text and buttons
    pub fn css_class(&self) -> &'static str {
        match self {
            StipendStatus::Withdrawn => "status-withdrawn",
            StipendStatus::Available => "status-available",
            StipendStatus::Locked => "status-locked",
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;
    use chrono::Duration;

    pub fn record(id: &str, amount: f64, unlock_offset_secs: i64, withdrawn: bool, now: DateTime<Utc>) -> StipendRecord {
        StipendRecord {
            id: id.to_string(),
            student: None,
            amount,
            category: "Books".to_string(),
            description: None,
            unlock_date: now + Duration::seconds(unlock_offset_secs),
            created_at: None,
            withdrawn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::record;
    use super::*;

    #[test]
    fn test_status_is_exclusive() {
        let now = Utc::now();

        assert_eq!(record("a", 10.0, -60, false, now).status(now), StipendStatus::Available);
        assert_eq!(record("b", 10.0, 60, false, now).status(now), StipendStatus::Locked);
        assert_eq!(record("c", 10.0, -60, true, now).status(now), StipendStatus::Withdrawn);
        assert_eq!(record("d", 10.0, 60, true, now).status(now), StipendStatus::Withdrawn);
    }

    #[test]
    fn test_unlock_at_now_is_available() {
        let now = Utc::now();
        let stipend = record("a", 10.0, 0, false, now);

        assert!(stipend.is_available(now));
        assert!(!stipend.is_locked(now));
        assert!(!stipend.is_upcoming(now));
    }

    #[test]
    fn test_withdrawn_future_record_is_still_upcoming() {
        let now = Utc::now();
        let stipend = record("a", 10.0, 3600, true, now);

        assert!(stipend.is_upcoming(now));
        assert!(!stipend.is_locked(now));
    }

    #[test]
    fn test_generate_id_is_unique() {
        assert_ne!(StipendRecord::generate_id(), StipendRecord::generate_id());
    }

    #[test]
    fn test_category_initial() {
        let now = Utc::now();
        let mut stipend = record("a", 10.0, 0, false, now);
        stipend.category = "living support".to_string();
        assert_eq!(stipend.category_initial(), "L");

        stipend.category = String::new();
        assert_eq!(stipend.category_initial(), "");
    }
}
