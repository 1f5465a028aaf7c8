//! Faculty Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, error handling and logging for the faculty loader workspace.
//!
//! - **Error Handling**: [`FacultyError`] and the [`Result`] alias
//! - **Logging**: `tracing` subscriber setup driven by [`logging::LogConfig`]
//! - **Types**: [`FacultyRecord`], the row shape written to the faculty store
//!
//! # Example
//!
//! ```
//! use faculty_common::FacultyRecord;
//!
//! let record = FacultyRecord::new("Dr. Ayesha Khan", "Professor", "Computer Science");
//! assert_eq!(record.campus, None);
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{FacultyError, Result};
pub use types::FacultyRecord;
