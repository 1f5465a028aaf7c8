//! Faculty Ingest Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Turns a `faculty_data.txt` listing into faculty records and bulk loads
//! them into a hosted `faculty` table.
//!
//! # Modules
//!
//! - **extractor**: line-by-line record extraction with rolling
//!   university/campus/department context
//! - **store**: the [`store::FacultyStore`] seam plus REST and in-memory backends
//! - **loader**: clear-then-insert load with a per-record failure count
//! - **summary**: headcount by designation and campus
//!
//! # Example
//!
//! ```no_run
//! use faculty_ingest::{extractor, loader, store::MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let extraction = extractor::extract_file("faculty_data.txt")?;
//!     let store = MemoryStore::new();
//!     let report = loader::load(&store, &extraction.records).await;
//!     println!("{} inserted, {} failed", report.successful, report.failed);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod extractor;
pub mod loader;
pub mod store;
pub mod summary;

pub use extractor::{extract_file, extract_lines, extract_str, Extraction, Extractor, ParseContext};
pub use loader::{load, LoadReport};
pub use summary::Summary;
