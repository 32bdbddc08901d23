//! Asynchronous operation contract standing in for remote stipend calls.
//!
//! The dashboards only talk to a [`StipendGateway`]. Today that is a fixed
//! delay mock; a contract or HTTP client can implement the same trait.

use async_trait::async_trait;
use chrono::Utc;

use crate::stipend::StipendRecord;
use crate::validation::AssignRequest;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Failed(String),
    #[error("Request was rejected: {0}")]
    Rejected(String),
}

#[async_trait(?Send)]
pub trait StipendGateway {
    /// Fetch the stipends visible on this board
    async fn load(&self) -> Result<Vec<StipendRecord>, GatewayError>;

    /// Re-fetch the board given what is currently shown
    async fn refresh(&self, current: Vec<StipendRecord>) -> Result<Vec<StipendRecord>, GatewayError>;

    /// Create a stipend and return the stored record
    async fn submit_assign(&self, request: AssignRequest) -> Result<StipendRecord, GatewayError>;

    /// Withdraw a stipend and return the updated record
    async fn submit_withdraw(&self, record: StipendRecord) -> Result<StipendRecord, GatewayError>;
}

/// Build the record a successful assign produces: fresh id, created now
pub fn record_from_request(request: AssignRequest) -> StipendRecord {
    StipendRecord {
        id: StipendRecord::generate_id(),
        student: Some(request.student),
        amount: request.amount,
        category: request.category,
        description: None,
        unlock_date: request.unlock_date,
        created_at: Some(Utc::now()),
        withdrawn: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_record_from_request() {
        let unlock = Utc::now() + Duration::days(3);
        let before = Utc::now();
        let record = record_from_request(AssignRequest {
            student: "ST1ABC".to_string(),
            amount: 42.0,
            category: "Books".to_string(),
            unlock_date: unlock,
        });

        assert!(!record.id.is_empty());
        assert_eq!(record.student.as_deref(), Some("ST1ABC"));
        assert_eq!(record.amount, 42.0);
        assert_eq!(record.unlock_date, unlock);
        assert!(!record.withdrawn);
        assert!(record.created_at.unwrap() >= before);
    }

    #[test]
    fn test_gateway_error_messages() {
        assert_eq!(
            GatewayError::Failed("timeout".to_string()).to_string(),
            "Request failed: timeout"
        );
    }
}
