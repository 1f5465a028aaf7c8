//! Clear-then-insert bulk load
//!
//! Wipes the store, then inserts every record in order. Insert failures are
//! counted and a handful are kept for the report. Nothing is retried and a
//! partially applied load is left as is.

use crate::store::FacultyStore;
use faculty_common::FacultyRecord;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Number of failures kept in a [`LoadReport`].
pub const MAX_REPORTED_ERRORS: usize = 5;

/// Failure messages are cut to this many characters.
pub const ERROR_MESSAGE_LIMIT: usize = 50;

/// Log progress every this many records.
pub const PROGRESS_INTERVAL: usize = 10;

/// One rejected insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    pub name: String,
    pub message: String,
}

/// Outcome of a bulk load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub attempted: usize,
    pub successful: usize,
    pub failed: usize,

    /// Whether the initial wipe succeeded
    pub cleared: bool,

    /// First few failures, in input order
    pub errors: Vec<LoadFailure>,
}

impl LoadReport {
    fn record_failure(&mut self, name: &str, message: String) {
        self.failed += 1;
        if self.errors.len() < MAX_REPORTED_ERRORS {
            self.errors.push(LoadFailure {
                name: name.to_string(),
                message: message.chars().take(ERROR_MESSAGE_LIMIT).collect(),
            });
        }
    }
}

/// Replace the store's contents with `records`
#[instrument(skip_all, fields(records = records.len()))]
pub async fn load<S>(store: &S, records: &[FacultyRecord]) -> LoadReport
where
    S: FacultyStore + ?Sized,
{
    let mut report = LoadReport::default();

    match store.clear_all().await {
        Ok(()) => {
            info!("Cleared existing faculty rows");
            report.cleared = true;
        },
        Err(e) => warn!(error = %e, "Could not clear existing rows, inserting anyway"),
    }

    for (index, record) in records.iter().enumerate() {
        let position = index + 1;
        report.attempted += 1;

        match store.insert(record).await {
            Ok(()) => {
                report.successful += 1;
                if position % PROGRESS_INTERVAL == 0 {
                    info!(
                        position,
                        name = %record.name,
                        designation = %record.designation,
                        campus = record.campus.as_deref().unwrap_or("-"),
                        "Inserted"
                    );
                }
            },
            Err(e) => {
                warn!(position, name = %record.name, error = %e, "Insert failed");
                report.record_failure(&record.name, e.to_string());
            },
        }
    }

    info!(
        successful = report.successful,
        failed = report.failed,
        "Load complete"
    );

    report
}
