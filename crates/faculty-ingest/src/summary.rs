//! Headcount tallies by designation and campus

use faculty_common::FacultyRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Counts of extracted records, most common first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub by_designation: Vec<(String, usize)>,
    pub by_campus: Vec<(Option<String>, usize)>,
}

impl Summary {
    pub fn from_records(records: &[FacultyRecord]) -> Self {
        Self {
            total: records.len(),
            by_designation: tally(records.iter().map(|r| r.designation.clone())),
            by_campus: tally(records.iter().map(|r| r.campus.clone())),
        }
    }
}

/// Count keys, ordered by count descending then key ascending
fn tally<K: Ord>(keys: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    // stable sort keeps BTreeMap key order within equal counts
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total: {} people", self.total)?;

        writeln!(f, "\nBy designation:")?;
        for (designation, count) in &self.by_designation {
            writeln!(f, "  {:<30} {:>3} people", designation, count)?;
        }

        writeln!(f, "\nBy campus:")?;
        for (campus, count) in &self.by_campus {
            writeln!(f, "  {:<30} {:>3} people", campus.as_deref().unwrap_or("(none)"), count)?;
        }

        Ok(())
    }
}
