//! Stipend workflow for the dashboards.
//!
//! Records move `Locked -> Available -> Withdrawn`; removal deletes them from
//! the board. Withdrawals run in two steps around a simulated remote call:
//! [`StipendWorkflow::begin_withdraw`] checks eligibility and claims the single
//! in-flight slot, [`StipendWorkflow::complete_withdraw`] flips the flag once
//! the call returns.

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::repository::StipendRepository;
use crate::stipend::StipendRecord;
use crate::totals::StipendTotals;

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Stipend {0} not found")]
    NotFound(String),
    #[error("Stipend is not yet available.")]
    NotAvailable,
    #[error("Another withdrawal is already in progress")]
    WithdrawInFlight,
    #[error("No withdrawal of stipend {0} is in progress")]
    NotInFlight(String),
    #[error("Storage error: {0}")]
    Store(#[from] anyhow::Error),
}

/// Board state: stored records plus the id of the withdrawal in flight
#[derive(Debug, Clone, PartialEq)]
pub struct StipendWorkflow<R: StipendRepository> {
    repository: R,
    withdrawing: Option<String>,
}

impl<R: StipendRepository> StipendWorkflow<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            withdrawing: None,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn list(&self) -> Result<Vec<StipendRecord>, WorkflowError> {
        Ok(self.repository.list()?)
    }

    pub fn totals(&self, now: DateTime<Utc>) -> Result<StipendTotals, WorkflowError> {
        Ok(StipendTotals::calculate(&self.list()?, now))
    }

    /// Id of the withdrawal currently in flight, if any
    pub fn withdrawing(&self) -> Option<&str> {
        self.withdrawing.as_deref()
    }

    pub fn is_withdrawing(&self) -> bool {
        self.withdrawing.is_some()
    }

    /// Store a freshly assigned record at the top of the board
    pub fn assign(&mut self, record: StipendRecord) -> Result<StipendRecord, WorkflowError> {
        self.repository.create(record.clone())?;
        info!("Assigned stipend {} ({} for {:?})", record.id, record.amount, record.student);
        Ok(record)
    }

    /// Check eligibility and claim the in-flight slot
    pub fn begin_withdraw(&mut self, id: &str, now: DateTime<Utc>) -> Result<StipendRecord, WorkflowError> {
        if let Some(current) = &self.withdrawing {
            warn!("Withdrawal of {} rejected, {} still in flight", id, current);
            return Err(WorkflowError::WithdrawInFlight);
        }

        let record = self
            .repository
            .get(id)?
            .ok_or_else(|| WorkflowError::NotFound(id.to_string()))?;

        if !record.is_available(now) {
            return Err(WorkflowError::NotAvailable);
        }

        self.withdrawing = Some(id.to_string());
        info!("Withdrawal of stipend {} started", id);
        Ok(record)
    }

    /// Mark the in-flight record withdrawn and release the slot
    pub fn complete_withdraw(&mut self, id: &str) -> Result<StipendRecord, WorkflowError> {
        if self.withdrawing.as_deref() != Some(id) {
            warn!("Completion of {} rejected, it was never started", id);
            return Err(WorkflowError::NotInFlight(id.to_string()));
        }
        self.release(id);

        let mut record = self
            .repository
            .get(id)?
            .ok_or_else(|| WorkflowError::NotFound(id.to_string()))?;
        record.withdrawn = true;
        self.repository.update(&record)?;

        info!("Stipend {} withdrawn", id);
        Ok(record)
    }

    /// Release the in-flight slot without touching the record
    pub fn abort_withdraw(&mut self, id: &str) {
        self.release(id);
        warn!("Withdrawal of stipend {} aborted", id);
    }

    pub fn remove(&mut self, id: &str) -> Result<bool, WorkflowError> {
        let removed = self.repository.delete(id)?;
        if removed {
            info!("Removed stipend {}", id);
        }
        Ok(removed)
    }

    /// Replace the board with a freshly loaded list.
    ///
    /// A record already withdrawn on this board stays withdrawn.
    pub fn replace_all(&mut self, records: Vec<StipendRecord>) -> Result<(), WorkflowError> {
        let current = self.repository.list()?;
        for existing in &current {
            self.repository.delete(&existing.id)?;
        }

        for mut record in records.into_iter().rev() {
            if current.iter().any(|r| r.id == record.id && r.withdrawn) {
                record.withdrawn = true;
            }
            if self.repository.get(&record.id)?.is_some() {
                warn!("Skipping duplicate stipend id {}", record.id);
                continue;
            }
            self.repository.create(record)?;
        }
        Ok(())
    }

    fn release(&mut self, id: &str) {
        if self.withdrawing.as_deref() == Some(id) {
            self.withdrawing = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStipendRepository;
    use crate::stipend::test_utils::record;

    fn board(now: DateTime<Utc>) -> StipendWorkflow<InMemoryStipendRepository> {
        StipendWorkflow::new(InMemoryStipendRepository::with_records(vec![
            record("s1", 120.0, -3 * 86_400, false, now),
            record("s2", 300.0, 7 * 86_400, false, now),
            record("s4", 75.0, -10 * 86_400, true, now),
        ]))
    }

    #[test]
    fn test_withdraw_eligible_record() {
        let now = Utc::now();
        let mut workflow = board(now);
        let before = workflow.list().unwrap();

        let started = workflow.begin_withdraw("s1", now).unwrap();
        assert_eq!(started.amount, 120.0);
        assert_eq!(workflow.withdrawing(), Some("s1"));

        let done = workflow.complete_withdraw("s1").unwrap();
        assert!(done.withdrawn);
        assert!(!workflow.is_withdrawing());

        let after = workflow.list().unwrap();
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == "s1" {
                assert!(new.withdrawn);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_withdraw_locked_record_is_rejected() {
        let now = Utc::now();
        let mut workflow = board(now);

        let result = workflow.begin_withdraw("s2", now);

        assert!(matches!(result, Err(WorkflowError::NotAvailable)));
        assert!(!workflow.is_withdrawing());
        assert!(!workflow.repository().get("s2").unwrap().unwrap().withdrawn);
    }

    #[test]
    fn test_withdraw_is_monotonic() {
        let now = Utc::now();
        let mut workflow = board(now);

        workflow.begin_withdraw("s1", now).unwrap();
        workflow.complete_withdraw("s1").unwrap();

        assert!(matches!(workflow.begin_withdraw("s1", now), Err(WorkflowError::NotAvailable)));
        assert!(matches!(workflow.begin_withdraw("s4", now), Err(WorkflowError::NotAvailable)));
        assert!(workflow.repository().get("s1").unwrap().unwrap().withdrawn);
    }

    #[test]
    fn test_single_withdrawal_in_flight() {
        let now = Utc::now();
        let mut workflow = StipendWorkflow::new(InMemoryStipendRepository::with_records(vec![
            record("a", 10.0, -60, false, now),
            record("b", 20.0, -60, false, now),
        ]));

        workflow.begin_withdraw("a", now).unwrap();
        assert!(matches!(workflow.begin_withdraw("b", now), Err(WorkflowError::WithdrawInFlight)));

        workflow.complete_withdraw("a").unwrap();
        assert!(workflow.begin_withdraw("b", now).is_ok());
    }

    #[test]
    fn test_complete_requires_started_withdrawal() {
        let now = Utc::now();
        let mut workflow = board(now);

        assert!(matches!(workflow.complete_withdraw("s1"), Err(WorkflowError::NotInFlight(_))));
        assert!(!workflow.repository().get("s1").unwrap().unwrap().withdrawn);

        workflow.begin_withdraw("s1", now).unwrap();
        assert!(matches!(workflow.complete_withdraw("s2"), Err(WorkflowError::NotInFlight(_))));
        assert_eq!(workflow.withdrawing(), Some("s1"));
        assert!(!workflow.repository().get("s2").unwrap().unwrap().withdrawn);

        workflow.complete_withdraw("s1").unwrap();
        assert!(matches!(workflow.complete_withdraw("s1"), Err(WorkflowError::NotInFlight(_))));
    }

    #[test]
    fn test_abort_releases_slot_without_mutation() {
        let now = Utc::now();
        let mut workflow = board(now);

        workflow.begin_withdraw("s1", now).unwrap();
        workflow.abort_withdraw("s1");

        assert!(!workflow.is_withdrawing());
        assert!(!workflow.repository().get("s1").unwrap().unwrap().withdrawn);
    }

    #[test]
    fn test_withdraw_unknown_id() {
        let now = Utc::now();
        let mut workflow = board(now);
        assert!(matches!(workflow.begin_withdraw("nope", now), Err(WorkflowError::NotFound(_))));
    }

    #[test]
    fn test_assign_prepends_and_rejects_duplicates() {
        let now = Utc::now();
        let mut workflow = board(now);

        workflow.assign(record("new", 5.0, 60, false, now)).unwrap();
        assert_eq!(workflow.list().unwrap()[0].id, "new");

        assert!(matches!(
            workflow.assign(record("new", 5.0, 60, false, now)),
            Err(WorkflowError::Store(_))
        ));
        assert_eq!(workflow.list().unwrap().len(), 4);
    }

    #[test]
    fn test_remove() {
        let now = Utc::now();
        let mut workflow = board(now);

        assert!(workflow.remove("s2").unwrap());
        assert!(!workflow.remove("s2").unwrap());
        assert_eq!(workflow.totals(now).unwrap().total_assigned, 195.0);
    }

    #[test]
    fn test_replace_all_keeps_withdrawn_flags() {
        let now = Utc::now();
        let mut workflow = board(now);
        workflow.begin_withdraw("s1", now).unwrap();
        workflow.complete_withdraw("s1").unwrap();

        workflow
            .replace_all(vec![
                record("s1", 120.0, -3 * 86_400, false, now),
                record("s3", 50.0, 30 * 86_400, false, now),
            ])
            .unwrap();

        let ids: Vec<String> = workflow.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["s1", "s3"]);
        assert!(workflow.repository().get("s1").unwrap().unwrap().withdrawn);
    }
}
