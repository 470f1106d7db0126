//! # Command Layer
//!
//! One module per way of feeding results into the checklist:
//!
//! - [`update`]: a single identifier/status pair
//! - [`import_json`]: a JSON results file
//! - [`from_results`]: the markdown results document
//! - [`interactive`]: a prompt loop over any reader/writer pair
//!
//! Every command follows the same shape: read all inputs, apply records to an
//! in-memory [`ChecklistDocument`], then write the checklist once. Soft problems
//! are reported through [`CmdResult::messages`]; only I/O, parse and config
//! failures are returned as errors.

use crate::checklist::{ChecklistDocument, UpdateOutcome};
use crate::error::Result;
use crate::model::ResultRecord;
use crate::store::DocumentStore;
use std::path::{Path, PathBuf};

pub mod from_results;
pub mod import_json;
pub mod interactive;
pub mod update;

/// Locations of the two documents a run may touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPaths {
    pub checklist: PathBuf,
    pub results: PathBuf,
}

impl SyncPaths {
    pub fn new(checklist: impl Into<PathBuf>, results: impl Into<PathBuf>) -> Self {
        Self {
            checklist: checklist.into(),
            results: results.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    /// Message describing the result of applying one status.
    pub fn for_outcome(test_case_id: &str, outcome: &UpdateOutcome) -> Self {
        match outcome {
            UpdateOutcome::Updated { status, .. } => {
                Self::success(format!("{} updated: {}", test_case_id, status))
            }
            UpdateOutcome::NotFound => {
                Self::warning(format!("Test case not found: {}", test_case_id))
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records that matched an entry, in the order they were applied.
    pub applied: Vec<ResultRecord>,
    /// Records whose identifier had no unchecked entry.
    pub not_found: Vec<String>,
    /// Checklist file that was rewritten, if any.
    pub written: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn extend_messages(&mut self, messages: impl IntoIterator<Item = CmdMessage>) {
        self.messages.extend(messages);
    }

    /// Applies one record to `doc`, recording the outcome and its message.
    pub(crate) fn apply(&mut self, doc: &mut ChecklistDocument, record: &ResultRecord) {
        let outcome = doc.apply(&record.test_case_id, record.status);
        self.add_message(CmdMessage::for_outcome(&record.test_case_id, &outcome));
        match outcome {
            UpdateOutcome::Updated { .. } => self.applied.push(record.clone()),
            UpdateOutcome::NotFound => self.not_found.push(record.test_case_id.clone()),
        }
    }

    /// Writes the checklist back and records where it went.
    pub(crate) fn save<S: DocumentStore>(
        &mut self,
        store: &mut S,
        path: &Path,
        doc: &ChecklistDocument,
    ) -> Result<()> {
        store.write(path, &doc.to_text())?;
        self.mark_written(path.to_path_buf());
        Ok(())
    }

    fn mark_written(&mut self, path: PathBuf) {
        self.add_message(CmdMessage::success(format!(
            "Checklist updated: {}",
            path.display()
        )));
        self.written = Some(path);
    }
}

/// Reads and parses the checklist, noting its size for verbose output.
pub(crate) fn load_checklist<S: DocumentStore>(
    store: &S,
    path: &Path,
    result: &mut CmdResult,
) -> Result<ChecklistDocument> {
    let doc = ChecklistDocument::parse(&store.read(path)?);
    let total = doc.entries().count();
    let checked = doc.entries().filter(|e| e.checked).count();
    result.add_message(CmdMessage::info(format!(
        "Loaded {} ({} entries, {} checked)",
        path.display(),
        total,
        checked
    )));
    Ok(doc)
}
