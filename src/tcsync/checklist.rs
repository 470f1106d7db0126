//! # Checklist Documents
//!
//! A checklist is a markdown file where some lines are test-case entries:
//!
//! ```text
//! - [ ] TC-001: Login with valid credentials
//! - [x] TC-002: Logout clears the session
//! - [ ] TC-003~TC-007: Property registration batch
//! ```
//!
//! Everything else (headings, prose, tables) is carried along untouched.
//!
//! ## Line Records
//!
//! [`ChecklistDocument::parse`] splits the text into line records. Each record
//! keeps its raw text and its terminator, and lines holding a checkbox marker
//! also carry an [`Entry`] with the byte offsets of the marker and of the body
//! that follows it. Updating an entry rewrites the single marker byte in place,
//! so serializing the document reproduces every other byte exactly (trailing
//! whitespace, `\r\n` endings, a missing final newline).
//!
//! ## Matching Rules
//!
//! [`ChecklistDocument::apply`] looks for the first **unchecked** entry whose body
//! starts with `<id>:`. Failing that, it looks for the first unchecked range
//! entry whose body starts with `<id>~`. Ranges are never expanded: `TC-003`
//! only finds `TC-003~TC-007`, not `TC-002~TC-007`.
//!
//! Checked entries are not candidates. A duplicate identifier only has its
//! first unchecked occurrence updated.

use crate::model::Status;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"- \[([ xX])\] ").expect("checkbox pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnding {
    Lf,
    CrLf,
    Eof,
}

impl LineEnding {
    fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Eof => "",
        }
    }
}

/// Position of a checkbox marker within its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    /// Byte offset of the character between the brackets.
    marker: usize,
    /// Byte offset of the text after `- [ ] `.
    body: usize,
    checked: bool,
}

#[derive(Debug, Clone)]
struct Line {
    text: String,
    ending: LineEnding,
    entry: Option<Entry>,
}

impl Line {
    fn parse(raw: &str) -> Self {
        let (text, ending) = if let Some(t) = raw.strip_suffix("\r\n") {
            (t, LineEnding::CrLf)
        } else if let Some(t) = raw.strip_suffix('\n') {
            (t, LineEnding::Lf)
        } else {
            (raw, LineEnding::Eof)
        };

        let entry = MARKER_RE.captures(text).and_then(|caps| {
            let whole = caps.get(0)?;
            let mark = caps.get(1)?;
            Some(Entry {
                marker: mark.start(),
                body: whole.end(),
                checked: mark.as_str() != " ",
            })
        });

        Self {
            text: text.to_string(),
            ending,
            entry,
        }
    }

    fn body(&self) -> Option<&str> {
        self.entry.map(|e| &self.text[e.body..])
    }

    fn is_unchecked_with_prefix(&self, prefix: &str) -> bool {
        match (self.entry, self.body()) {
            (Some(entry), Some(body)) => !entry.checked && body.starts_with(prefix),
            _ => false,
        }
    }

    fn set_checked(&mut self, checked: bool) {
        if let Some(entry) = self.entry.as_mut() {
            let mark = if checked { "x" } else { " " };
            self.text.replace_range(entry.marker..entry.marker + 1, mark);
            entry.checked = checked;
        }
    }
}

/// Result of applying one status to a checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The entry on `line` (1-based) now reflects `status`.
    Updated { line: usize, status: Status },
    NotFound,
}

impl UpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}

/// Read-only view of a checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub line: usize,
    pub checked: bool,
    pub body: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct ChecklistDocument {
    lines: Vec<Line>,
}

impl ChecklistDocument {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(Line::parse).collect(),
        }
    }

    /// Sets the checkbox of the entry matching `test_case_id`.
    ///
    /// The document is left untouched when nothing matches.
    pub fn apply(&mut self, test_case_id: &str, status: Status) -> UpdateOutcome {
        let single = format!("{}:", test_case_id);
        let range = format!("{}~", test_case_id);

        let found = self
            .find_unchecked(&single)
            .or_else(|| self.find_unchecked(&range));

        match found {
            Some(index) => {
                self.lines[index].set_checked(status.is_checked());
                UpdateOutcome::Updated {
                    line: index + 1,
                    status,
                }
            }
            None => UpdateOutcome::NotFound,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = EntryView<'_>> {
        self.lines.iter().enumerate().filter_map(|(i, line)| {
            let entry = line.entry?;
            Some(EntryView {
                line: i + 1,
                checked: entry.checked,
                body: &line.text[entry.body..],
            })
        })
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    fn find_unchecked(&self, prefix: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.is_unchecked_with_prefix(prefix))
    }
}

impl fmt::Display for ChecklistDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(&line.text)?;
            f.write_str(line.ending.as_str())?;
        }
        Ok(())
    }
}

/// Applies a single status to checklist text and returns the new text.
pub fn update(text: &str, test_case_id: &str, status: Status) -> (String, UpdateOutcome) {
    let mut doc = ChecklistDocument::parse(text);
    let outcome = doc.apply(test_case_id, status);
    (doc.to_text(), outcome)
}
