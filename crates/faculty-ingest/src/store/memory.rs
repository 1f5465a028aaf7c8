//! In-memory faculty store

use super::FacultyStore;
use async_trait::async_trait;
use faculty_common::{FacultyError, FacultyRecord, Result};
use std::collections::HashSet;
use tokio::sync::Mutex;

/// Store backed by a `Vec`, with optional injected failures
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<FacultyRecord>>,
    rejected_names: HashSet<String>,
    fail_clear: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with rows already present
    pub fn with_rows(rows: Vec<FacultyRecord>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    /// Reject inserts for these names, like a unique constraint would
    pub fn rejecting<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rejected_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make `clear_all` fail
    pub fn failing_clear(mut self) -> Self {
        self.fail_clear = true;
        self
    }

    /// Snapshot of the stored rows
    pub async fn rows(&self) -> Vec<FacultyRecord> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl FacultyStore for MemoryStore {
    async fn clear_all(&self) -> Result<()> {
        if self.fail_clear {
            return Err(FacultyError::store(403, "permission denied for table faculty"));
        }

        self.rows.lock().await.clear();
        Ok(())
    }

    async fn insert(&self, record: &FacultyRecord) -> Result<()> {
        if self.rejected_names.contains(&record.name) {
            return Err(FacultyError::store(
                409,
                format!("duplicate key value violates unique constraint for '{}'", record.name),
            ));
        }

        self.rows.lock().await.push(record.clone());
        Ok(())
    }
}
