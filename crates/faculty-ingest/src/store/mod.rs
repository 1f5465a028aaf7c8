//! Faculty store seam
//!
//! The loader only needs two operations from whatever holds the `faculty`
//! table: wipe it, and insert one row. [`RestStore`] talks to a
//! PostgREST-compatible endpoint; [`MemoryStore`] keeps rows in memory for
//! tests and dry runs.

pub mod memory;
pub mod rest;

use async_trait::async_trait;
use faculty_common::{FacultyRecord, Result};

pub use memory::MemoryStore;
pub use rest::RestStore;

/// Destination for extracted faculty records
#[async_trait]
pub trait FacultyStore: Send + Sync {
    /// Delete every existing row
    async fn clear_all(&self) -> Result<()>;

    /// Insert a single row
    async fn insert(&self, record: &FacultyRecord) -> Result<()>;
}
