//! # Stipend Storage
//!
//! Storage abstraction for a board of stipends. The dashboards only ever use
//! the volatile [`InMemoryStipendRepository`]; a persistent backend can be
//! substituted behind the same trait without touching the calculators.

use anyhow::{bail, Result};

use crate::stipend::StipendRecord;

/// Trait defining the interface for stipend storage operations
pub trait StipendRepository {
    /// List records, most recently created first
    fn list(&self) -> Result<Vec<StipendRecord>>;

    /// Retrieve a specific record by id
    fn get(&self, id: &str) -> Result<Option<StipendRecord>>;

    /// Store a new record at the front of the list
    fn create(&mut self, record: StipendRecord) -> Result<()>;

    /// Replace an existing record with the same id
    fn update(&mut self, record: &StipendRecord) -> Result<()>;

    /// Delete a record
    /// Returns true if the record was found and deleted, false otherwise
    fn delete(&mut self, id: &str) -> Result<bool>;
}

/// Process-local storage, lost on reload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryStipendRepository {
    records: Vec<StipendRecord>,
}

impl InMemoryStipendRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository; later duplicates of an id are dropped
    pub fn with_records(records: Vec<StipendRecord>) -> Self {
        let mut unique: Vec<StipendRecord> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|r| r.id == record.id) {
                log::warn!("Dropping duplicate stipend id {}", record.id);
                continue;
            }
            unique.push(record);
        }
        Self { records: unique }
    }

    pub fn records(&self) -> &[StipendRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StipendRepository for InMemoryStipendRepository {
    fn list(&self) -> Result<Vec<StipendRecord>> {
        Ok(self.records.clone())
    }

    fn get(&self, id: &str) -> Result<Option<StipendRecord>> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }

    fn create(&mut self, record: StipendRecord) -> Result<()> {
        if self.records.iter().any(|r| r.id == record.id) {
            bail!("Stipend {} already exists", record.id);
        }
        self.records.insert(0, record);
        Ok(())
    }

    fn update(&mut self, record: &StipendRecord) -> Result<()> {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => bail!("Stipend {} not found", record.id),
        }
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        Ok(self.records.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stipend::test_utils::record;
    use chrono::Utc;

    #[test]
    fn test_create_prepends() {
        let now = Utc::now();
        let mut repo = InMemoryStipendRepository::new();
        repo.create(record("a", 1.0, 0, false, now)).unwrap();
        repo.create(record("b", 2.0, 0, false, now)).unwrap();

        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_create_rejects_duplicate_id() {
        let now = Utc::now();
        let mut repo = InMemoryStipendRepository::new();
        repo.create(record("a", 1.0, 0, false, now)).unwrap();

        assert!(repo.create(record("a", 5.0, 0, false, now)).is_err());
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("a").unwrap().unwrap().amount, 1.0);
    }

    #[test]
    fn test_update_replaces_matching_record() {
        let now = Utc::now();
        let mut repo = InMemoryStipendRepository::with_records(vec![
            record("a", 1.0, 0, false, now),
            record("b", 2.0, 0, false, now),
        ]);

        let mut updated = repo.get("b").unwrap().unwrap();
        updated.withdrawn = true;
        repo.update(&updated).unwrap();

        assert!(repo.get("b").unwrap().unwrap().withdrawn);
        assert!(!repo.get("a").unwrap().unwrap().withdrawn);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let now = Utc::now();
        let mut repo = InMemoryStipendRepository::new();
        assert!(repo.update(&record("ghost", 1.0, 0, false, now)).is_err());
    }

    #[test]
    fn test_delete() {
        let now = Utc::now();
        let mut repo = InMemoryStipendRepository::with_records(vec![record("a", 1.0, 0, false, now)]);

        assert!(repo.delete("a").unwrap());
        assert!(!repo.delete("a").unwrap());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_with_records_drops_duplicates() {
        let now = Utc::now();
        let repo = InMemoryStipendRepository::with_records(vec![
            record("a", 1.0, 0, false, now),
            record("a", 9.0, 0, false, now),
        ]);

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.records()[0].amount, 1.0);
    }
}
