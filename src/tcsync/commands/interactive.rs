//! Interactive prompt loop.
//!
//! ```text
//!            ┌──── invalid id ────┐
//!            ▼                    │
//!   ┌─────────────────┐  TC-…  ┌──┴──────────────┐
//!   │    PromptId     ├───────►│  PromptStatus   │
//!   └───┬─────────────┘◄───────┴─────────────────┘
//!       │ q / EOF        1-4 apply, 5 cancel, other invalid
//!       ▼
//!     Done  → checklist written once
//! ```
//!
//! The session works on an in-memory document and never touches the store;
//! [`run`] loads the checklist before the loop and writes it after.

use crate::checklist::ChecklistDocument;
use crate::commands::{load_checklist, CmdMessage, CmdResult, SyncPaths};
use crate::error::{Result, SyncError};
use crate::model::{is_test_case_id, ResultRecord, Status, TEST_CASE_PREFIX};
use crate::store::DocumentStore;
use std::io::{BufRead, Write};

const RULE: &str = "==================================================";
const QUIT: &str = "q";

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    PromptId,
    PromptStatus(String),
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Apply(Status),
    Cancel,
    Invalid,
}

impl Choice {
    fn parse(input: &str) -> Self {
        match input {
            "1" => Choice::Apply(Status::Pass),
            "2" => Choice::Apply(Status::Fail),
            "3" => Choice::Apply(Status::Blocked),
            "4" => Choice::Apply(Status::NotRun),
            "5" => Choice::Cancel,
            _ => Choice::Invalid,
        }
    }
}

pub struct InteractiveSession {
    doc: ChecklistDocument,
    result: CmdResult,
}

impl InteractiveSession {
    pub fn new(doc: ChecklistDocument) -> Self {
        Self {
            doc,
            result: CmdResult::default(),
        }
    }

    /// Runs the prompt loop until the user quits or input ends.
    ///
    /// Returns the edited document and a result holding the applied and
    /// missing records. Per-step messages are written to `output` as they
    /// happen and are not repeated in the returned result.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(ChecklistDocument, CmdResult)> {
        writeln!(output, "{}", RULE).map_err(SyncError::Prompt)?;
        writeln!(output, "Test checklist update (interactive)").map_err(SyncError::Prompt)?;
        writeln!(output, "{}\n", RULE).map_err(SyncError::Prompt)?;

        let mut state = State::PromptId;
        loop {
            state = match state {
                State::PromptId => self.prompt_id(input, output)?,
                State::PromptStatus(id) => self.prompt_status(id, input, output)?,
                State::Done => break,
            };
        }

        Ok((self.doc, self.result))
    }

    fn prompt_id<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<State> {
        let prompt = format!(
            "Test case ID (e.g. {}001, {} to quit): ",
            TEST_CASE_PREFIX, QUIT
        );
        let Some(line) = ask(input, output, &prompt)? else {
            return Ok(State::Done);
        };

        if line.eq_ignore_ascii_case(QUIT) {
            return Ok(State::Done);
        }
        if !is_test_case_id(&line) {
            self.result.add_message(CmdMessage::warning(format!(
                "Test case ID must start with '{}'.",
                TEST_CASE_PREFIX
            )));
            self.flush(output)?;
            return Ok(State::PromptId);
        }
        Ok(State::PromptStatus(line))
    }

    fn prompt_status<R: BufRead, W: Write>(
        &mut self,
        test_case_id: String,
        input: &mut R,
        output: &mut W,
    ) -> Result<State> {
        writeln!(output, "\nSelect status:").map_err(SyncError::Prompt)?;
        for line in ["1. PASS", "2. FAIL", "3. BLOCKED", "4. NOT RUN", "5. Cancel"] {
            writeln!(output, "{}", line).map_err(SyncError::Prompt)?;
        }
        let Some(selection) = ask(input, output, "Select (1-5): ")? else {
            return Ok(State::Done);
        };

        match Choice::parse(&selection) {
            Choice::Apply(status) => {
                let record = ResultRecord::new(test_case_id, status);
                self.result.apply(&mut self.doc, &record);
                self.flush(output)?;
                writeln!(output).map_err(SyncError::Prompt)?;
            }
            Choice::Cancel => {}
            Choice::Invalid => {
                self.result.add_message(CmdMessage::warning("Invalid selection."));
                self.flush(output)?;
            }
        }
        Ok(State::PromptId)
    }

    /// Writes pending messages to the session output.
    fn flush<W: Write>(&mut self, output: &mut W) -> Result<()> {
        for message in self.result.messages.drain(..) {
            writeln!(output, "{}", message.content).map_err(SyncError::Prompt)?;
        }
        Ok(())
    }
}

/// Prints `prompt` and reads one trimmed line; `None` at end of input.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}", prompt).map_err(SyncError::Prompt)?;
    output.flush().map_err(SyncError::Prompt)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(SyncError::Prompt)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Loads the checklist, runs a session over `input`/`output`, and writes the
/// checklist once when the session ends.
pub fn run<S: DocumentStore, R: BufRead, W: Write>(
    store: &mut S,
    paths: &SyncPaths,
    input: &mut R,
    output: &mut W,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let doc = load_checklist(store, &paths.checklist, &mut result)?;

    let (doc, session) = InteractiveSession::new(doc).run(input, output)?;
    result.applied = session.applied;
    result.not_found = session.not_found;

    result.save(store, &paths.checklist, &doc)?;
    result.add_message(CmdMessage::success("Checklist update complete."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use std::io::Cursor;

    fn session(input: &str) -> (StoreFixture, CmdResult, String) {
        let mut fx = StoreFixture::new();
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run(&mut fx.store, &fx.paths, &mut reader, &mut out).unwrap();
        (fx, result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn pass_then_quit_writes_once() {
        let (fx, result, out) = session("TC-003\n1\nq\n");

        assert!(fx.checklist().contains("- [x] TC-003: Logout"));
        assert_eq!(fx.store.writes().len(), 1);
        assert_eq!(result.applied, vec![ResultRecord::new("TC-003", Status::Pass)]);
        assert!(out.contains("TC-003 updated: pass"));
    }

    #[test]
    fn rejected_ids_do_not_matter() {
        let (fx, _, out) = session("003\nabc\n\nTC-003\n1\nQ\n");

        assert!(fx.checklist().contains("- [x] TC-003: Logout"));
        assert_eq!(fx.store.writes().len(), 1);
        assert_eq!(out.matches("Test case ID must start with 'TC-'.").count(), 3);
    }

    #[test]
    fn cancel_and_invalid_selection_leave_document_alone() {
        let (fx, result, out) = session("TC-001\n5\nTC-001\n9\nq\n");

        assert!(fx.checklist().contains("- [ ] TC-001:"));
        assert!(result.applied.is_empty());
        assert_eq!(out.matches("Invalid selection.").count(), 1);
        assert_eq!(fx.store.writes().len(), 1);
    }

    #[test]
    fn several_updates_accumulate() {
        let (fx, result, _) = session("TC-001\n1\nTC-002\n2\nTC-004\n1\nTC-999\n1\nq\n");

        assert!(fx.checklist().contains("- [x] TC-001:"));
        assert!(fx.checklist().contains("- [ ] TC-002:"));
        assert!(fx.checklist().contains("- [x] TC-004~TC-006:"));
        assert_eq!(result.applied.len(), 3);
        assert_eq!(result.not_found, vec!["TC-999".to_string()]);
        assert_eq!(fx.store.writes().len(), 1);
    }

    #[test]
    fn end_of_input_finishes_the_session() {
        let (fx, _, _) = session("TC-001\n1\n");
        assert!(fx.checklist().contains("- [x] TC-001:"));
        assert_eq!(fx.store.writes().len(), 1);

        let (fx, _, _) = session("TC-002\n");
        assert!(fx.checklist().contains("- [ ] TC-002:"));
        assert_eq!(fx.store.writes().len(), 1);
    }

    #[test]
    fn final_result_only_holds_summary_messages() {
        let (_, result, _) = session("TC-001\n1\nq\n");
        let contents: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert!(contents.contains(&"Checklist update complete."));
        assert!(!contents.iter().any(|c| c.contains("TC-001 updated")));
    }

    #[test]
    fn menu_choices() {
        assert_eq!(Choice::parse("1"), Choice::Apply(Status::Pass));
        assert_eq!(Choice::parse("4"), Choice::Apply(Status::NotRun));
        assert_eq!(Choice::parse("5"), Choice::Cancel);
        assert_eq!(Choice::parse("pass"), Choice::Invalid);
    }
}
