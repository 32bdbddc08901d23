use async_trait::async_trait;
use shared::gateway::record_from_request;
use shared::{samples, AssignRequest, DashboardConfig, GatewayError, StipendGateway, StipendRecord};

use crate::services::date_utils::{delay, now};

/// Which dashboard a board belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardKind {
    Parent,
    Student,
}

impl BoardKind {
    pub fn currency<'a>(&self, config: &'a DashboardConfig) -> &'a str {
        match self {
            BoardKind::Parent => &config.parent_currency,
            BoardKind::Student => &config.student_currency,
        }
    }

    pub fn sample_stipends(&self) -> Vec<StipendRecord> {
        match self {
            BoardKind::Parent => samples::parent_stipends(now()),
            BoardKind::Student => samples::student_stipends(now()),
        }
    }
}

/// Design-only gateway: waits a fixed delay, then succeeds locally
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedGateway {
    kind: BoardKind,
    config: DashboardConfig,
}

impl SimulatedGateway {
    pub fn new(kind: BoardKind) -> Self {
        Self::with_config(kind, DashboardConfig::default())
    }

    pub fn with_config(kind: BoardKind, config: DashboardConfig) -> Self {
        Self { kind, config }
    }

    pub fn kind(&self) -> BoardKind {
        self.kind
    }
}

#[async_trait(?Send)]
impl StipendGateway for SimulatedGateway {
    async fn load(&self) -> Result<Vec<StipendRecord>, GatewayError> {
        delay(self.config.initial_load_delay_ms).await;
        Ok(self.kind.sample_stipends())
    }

    async fn refresh(&self, current: Vec<StipendRecord>) -> Result<Vec<StipendRecord>, GatewayError> {
        delay(self.config.refresh_delay_ms).await;
        Ok(current)
    }

    async fn submit_assign(&self, request: AssignRequest) -> Result<StipendRecord, GatewayError> {
        delay(self.config.assign_delay_ms).await;
        Ok(record_from_request(request))
    }

    async fn submit_withdraw(&self, mut record: StipendRecord) -> Result<StipendRecord, GatewayError> {
        delay(self.config.withdraw_delay_ms).await;
        record.withdrawn = true;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fast_config() -> DashboardConfig {
        DashboardConfig {
            assign_delay_ms: 1,
            withdraw_delay_ms: 1,
            initial_load_delay_ms: 1,
            refresh_delay_ms: 1,
            ..DashboardConfig::default()
        }
    }

    #[wasm_bindgen_test]
    async fn test_load_returns_board_samples() {
        let gateway = SimulatedGateway::with_config(BoardKind::Student, fast_config());
        let records = gateway.load().await.unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].id, "s1");
    }

    #[wasm_bindgen_test]
    async fn test_submit_assign_creates_record() {
        let gateway = SimulatedGateway::with_config(BoardKind::Parent, fast_config());
        let request = AssignRequest {
            student: "ST1ABC".to_string(),
            amount: 25.0,
            category: "Transport".to_string(),
            unlock_date: now() + Duration::days(2),
        };

        let record = gateway.submit_assign(request).await.unwrap();
        assert_eq!(record.amount, 25.0);
        assert!(record.created_at.is_some());
        assert!(!record.withdrawn);
    }

    #[wasm_bindgen_test]
    async fn test_submit_withdraw_flips_flag() {
        let gateway = SimulatedGateway::with_config(BoardKind::Student, fast_config());
        let record = samples::student_stipends(now()).remove(0);

        let updated = gateway.submit_withdraw(record).await.unwrap();
        assert!(updated.withdrawn);
    }

    #[wasm_bindgen_test]
    fn test_currency_per_board() {
        let config = DashboardConfig::default();
        assert_eq!(BoardKind::Parent.currency(&config), "STX");
        assert_eq!(BoardKind::Student.currency(&config), "EDU");
    }
}
