//! Faculty record extraction from `faculty_data.txt`-style listings
//!
//! The input is line oriented. Header lines set the rolling context and
//! delimiter lines produce one record each:
//!
//! ```text
//! University : FAST-NUCES
//! Campus : Lahore
//! Department of Computer Science
//! Dr. Kashif Zafar | Professor
//! Ms. Sukhan Amir | Instructor | Software Engineering
//! ```
//!
//! Context is never reset. A department header stays in effect across later
//! campus or university headers until another department header replaces it.

use faculty_common::types::{DEFAULT_DEPARTMENT, DEFAULT_DESIGNATION};
use faculty_common::{FacultyRecord, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, trace};

const UNIVERSITY_KEYWORD: &str = "University";
const CAMPUS_KEYWORD: &str = "Campus";
const DEPARTMENT_KEYWORD: &str = "Department";
const FIELD_DELIMITER: char = '|';

// ============================================================================
// Per-line outcomes
// ============================================================================

/// Which piece of context a header line updated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    University,
    Campus,
    Department,
}

/// Why a line produced nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty after trimming
    Blank,
    /// No header keyword and no delimiter
    Unrecognized,
    /// Delimited, but fewer than two fields
    MalformedLine { fields: usize },
    /// Delimited, but the name field is empty
    EmptyName,
}

/// Result of feeding one line to a [`ParseContext`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Header(HeaderKind),
    Record(FacultyRecord),
    Skipped(SkipReason),
}

// ============================================================================
// Parse context
// ============================================================================

/// Rolling university/campus/department context
///
/// Each header overwrites its slot; nothing is ever cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    pub current_university: Option<String>,
    pub current_campus: Option<String>,
    pub current_department: Option<String>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line, updating context on header lines
    pub fn apply(&mut self, raw: &str) -> LineOutcome {
        let line = raw.trim();

        if line.is_empty() {
            return LineOutcome::Skipped(SkipReason::Blank);
        }

        if let Some(university) = keyed_header(line, UNIVERSITY_KEYWORD) {
            self.current_university = Some(university.to_string());
            return LineOutcome::Header(HeaderKind::University);
        }

        if let Some(campus) = keyed_header(line, CAMPUS_KEYWORD) {
            self.current_campus = Some(campus.to_string());
            return LineOutcome::Header(HeaderKind::Campus);
        }

        if let Some(department) = department_header(line) {
            self.current_department = Some(department.to_string());
            return LineOutcome::Header(HeaderKind::Department);
        }

        if line.contains(FIELD_DELIMITER) {
            return self.assemble(line);
        }

        LineOutcome::Skipped(SkipReason::Unrecognized)
    }

    fn assemble(&self, line: &str) -> LineOutcome {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();

        if fields.len() < 2 {
            return LineOutcome::Skipped(SkipReason::MalformedLine {
                fields: fields.len(),
            });
        }

        let name = fields[0];
        if name.is_empty() {
            return LineOutcome::Skipped(SkipReason::EmptyName);
        }

        let designation = match fields[1] {
            "" => DEFAULT_DESIGNATION,
            designation => designation,
        };

        // a present third field wins even when empty
        let department = fields
            .get(2)
            .copied()
            .or_else(|| self.current_department.as_deref().filter(|d| !d.is_empty()))
            .unwrap_or(DEFAULT_DEPARTMENT);

        LineOutcome::Record(
            FacultyRecord::new(name, designation, department)
                .with_campus(self.current_campus.clone())
                .with_university(self.current_university.clone()),
        )
    }
}

/// `<keyword> : <value>`, whitespace before the colon optional
fn keyed_header<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    let value = rest.trim_start().strip_prefix(':')?;
    Some(value.trim())
}

/// Any line starting with `Department`.
///
/// The name is whatever follows the first `of` anywhere in the line, even
/// inside a word. Without one, only the keyword is stripped, so
/// `Department: Physics` keeps its colon.
fn department_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(DEPARTMENT_KEYWORD)?;
    let name = line.split_once("of").map_or(rest, |(_, after)| after);
    Some(name.trim())
}

// ============================================================================
// Statistics
// ============================================================================

/// Line counters for one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub lines: usize,
    pub headers: usize,
    pub records: usize,
    pub blank: usize,
    pub unrecognized: usize,
    pub malformed: usize,
    pub empty_name: usize,
}

impl ExtractStats {
    fn observe(&mut self, line_no: usize, outcome: &LineOutcome) {
        self.lines += 1;

        match outcome {
            LineOutcome::Header(kind) => {
                trace!(line = line_no, header = ?kind, "Context updated");
                self.headers += 1;
            },
            LineOutcome::Record(_) => self.records += 1,
            LineOutcome::Skipped(SkipReason::Blank) => self.blank += 1,
            LineOutcome::Skipped(SkipReason::Unrecognized) => self.unrecognized += 1,
            LineOutcome::Skipped(SkipReason::MalformedLine { fields }) => {
                debug!(line = line_no, fields, "Dropping delimited line with too few fields");
                self.malformed += 1;
            },
            LineOutcome::Skipped(SkipReason::EmptyName) => {
                debug!(line = line_no, "Dropping delimited line with empty name");
                self.empty_name += 1;
            },
        }
    }

    /// Lines that produced neither a header nor a record
    pub fn skipped(&self) -> usize {
        self.blank + self.unrecognized + self.malformed + self.empty_name
    }
}

// ============================================================================
// Whole-input extraction
// ============================================================================

/// Everything one run produced
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Records in input order
    pub records: Vec<FacultyRecord>,

    /// Context as it stood after the last line
    pub context: ParseContext,

    pub stats: ExtractStats,
}

/// Fold over in-memory lines with a fresh context
pub fn extract_lines<'a, I>(lines: I) -> Extraction
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .fold(Extraction::default(), |mut acc, (idx, line)| {
            let outcome = acc.context.apply(line);
            acc.stats.observe(idx + 1, &outcome);
            if let LineOutcome::Record(record) = outcome {
                acc.records.push(record);
            }
            acc
        })
}

/// Extract from a whole text buffer
pub fn extract_str(content: &str) -> Extraction {
    extract_lines(content.lines())
}

/// Extract from a file, failing fast on the first read error
pub fn extract_file(path: impl AsRef<Path>) -> Result<Extraction> {
    let path = path.as_ref();
    info!("Extracting faculty records from {}", path.display());

    let file = File::open(path)?;
    let mut extractor = Extractor::new(BufReader::new(file));
    let records = extractor.by_ref().collect::<Result<Vec<_>>>()?;
    let (context, stats) = extractor.into_parts();

    info!(
        records = stats.records,
        headers = stats.headers,
        skipped = stats.skipped(),
        "Extraction finished"
    );

    Ok(Extraction {
        records,
        context,
        stats,
    })
}

// ============================================================================
// Streaming extraction
// ============================================================================

/// Lazy, single-pass extractor over a line source
///
/// Iterating yields records only. Use [`Extractor::outcomes`] to observe
/// every line's outcome instead. After an I/O error the error is yielded once
/// and the extractor is exhausted.
pub struct Extractor<R> {
    lines: std::io::Lines<R>,
    context: ParseContext,
    stats: ExtractStats,
    failed: bool,
}

impl<R: BufRead> Extractor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            context: ParseContext::new(),
            stats: ExtractStats::default(),
            failed: false,
        }
    }

    /// Advance by one line
    pub fn next_outcome(&mut self) -> Option<Result<LineOutcome>> {
        if self.failed {
            return None;
        }

        match self.lines.next()? {
            Ok(line) => {
                let outcome = self.context.apply(&line);
                self.stats.observe(self.stats.lines + 1, &outcome);
                Some(Ok(outcome))
            },
            Err(e) => {
                self.failed = true;
                Some(Err(e.into()))
            },
        }
    }

    /// Per-line outcomes, headers and skips included
    pub fn outcomes(&mut self) -> impl Iterator<Item = Result<LineOutcome>> + '_ {
        std::iter::from_fn(move || self.next_outcome())
    }

    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    pub fn stats(&self) -> &ExtractStats {
        &self.stats
    }

    pub fn into_parts(self) -> (ParseContext, ExtractStats) {
        (self.context, self.stats)
    }
}

impl<R: BufRead> Iterator for Extractor<R> {
    type Item = Result<FacultyRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_outcome()? {
                Ok(LineOutcome::Record(record)) => return Some(Ok(record)),
                Ok(_) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
