//! Common types used across the faculty loader

use serde::{Deserialize, Serialize};

/// Department used when neither the line nor any header names one.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// Designation used when the designation field is present but empty.
pub const DEFAULT_DESIGNATION: &str = "Faculty Member";

/// One person's academic appointment entry.
///
/// This is also the row shape posted to the faculty store, so the serialized
/// form is a flat object with exactly these five keys. Unset `campus` and
/// `university` serialize as `null`.
///
/// # Examples
///
/// ```
/// use faculty_common::FacultyRecord;
///
/// let record = FacultyRecord::new("Mr. Yasir Arfat", "Instructor", "Computer Science")
///     .with_campus(Some("Peshawar".to_string()))
///     .with_university(Some("FAST-NUCES".to_string()));
///
/// assert_eq!(record.campus.as_deref(), Some("Peshawar"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacultyRecord {
    /// Display name, never empty
    pub name: String,

    /// Academic title (e.g., "Professor", "Instructor")
    pub designation: String,

    /// Department the person belongs to
    pub department: String,

    /// Campus, if a campus header was seen
    pub campus: Option<String>,

    /// University, if a university header was seen
    pub university: Option<String>,
}

impl FacultyRecord {
    /// Create a record with no campus or university
    pub fn new(
        name: impl Into<String>,
        designation: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            designation: designation.into(),
            department: department.into(),
            campus: None,
            university: None,
        }
    }

    pub fn with_campus(mut self, campus: Option<String>) -> Self {
        self.campus = campus;
        self
    }

    pub fn with_university(mut self, university: Option<String>) -> Self {
        self.university = university;
        self
    }
}

impl std::fmt::Display for FacultyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.designation, self.department)?;
        if let Some(campus) = &self.campus {
            write!(f, " @ {}", campus)?;
        }
        Ok(())
    }
}
