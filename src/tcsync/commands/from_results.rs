use crate::commands::{load_checklist, CmdMessage, CmdResult, SyncPaths};
use crate::error::Result;
use crate::sources::results_doc;
use crate::store::DocumentStore;

/// Syncs the checklist from the markdown results document.
///
/// Unlike the other sources, nothing is written when the results document has
/// no decided block.
pub fn run<S: DocumentStore>(store: &mut S, paths: &SyncPaths) -> Result<CmdResult> {
    let results_text = store.read(&paths.results)?;
    let mut result = CmdResult::default();
    let mut doc = load_checklist(store, &paths.checklist, &mut result)?;

    let extraction = results_doc::extract(&results_text);
    result.add_message(CmdMessage::info(format!(
        "Found {} decided result(s) in {}",
        extraction.records.len(),
        paths.results.display()
    )));
    result.extend_messages(extraction.messages);

    if extraction.records.is_empty() {
        result.add_message(CmdMessage::warning("No test results to update"));
        return Ok(result);
    }

    for record in &extraction.records {
        result.apply(&mut doc, record);
    }
    result.save(store, &paths.checklist, &doc)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn applies_decided_blocks() {
        let mut fx = StoreFixture::new().with_results(
            "# Results\n\
\n\
### TC-001: Login\n\
**상태**: [x] PASS / [ ] FAIL / [ ] BLOCKED\n\
\n\
### TC-003: Logout\n\
**상태**: [ ] PASS / [x] FAIL / [ ] BLOCKED\n\
\n\
### TC-004: Registration batch\n\
**상태**: [x] PASS / [ ] FAIL / [ ] BLOCKED\n",
        );

        let result = run(&mut fx.store, &fx.paths).unwrap();

        assert!(fx.checklist().contains("- [x] TC-001:"));
        assert!(fx.checklist().contains("- [ ] TC-003:"));
        assert!(fx.checklist().contains("- [x] TC-004~TC-006:"));
        assert_eq!(result.applied.len(), 3);
        assert_eq!(fx.store.writes().len(), 1);
    }

    #[test]
    fn undecided_blocks_do_not_write() {
        let mut fx = StoreFixture::new()
            .with_results("### TC-010: Login\n**상태**: [ ] PASS [ ] FAIL [ ] BLOCKED\n");
        let before = fx.checklist().to_string();

        let result = run(&mut fx.store, &fx.paths).unwrap();

        assert!(fx.store.writes().is_empty());
        assert_eq!(fx.checklist(), before);
        assert!(result.written.is_none());
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "No test results to update"));
    }

    #[test]
    fn ambiguous_block_is_flagged() {
        let mut fx = StoreFixture::new()
            .with_results("### TC-002: Login\n**상태**: [ ] PASS [x] FAIL [x] BLOCKED\n");

        let result = run(&mut fx.store, &fx.paths).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| m.content.starts_with("Ambiguous result for TC-002")));
        assert_eq!(result.applied[0].status, crate::model::Status::Fail);
    }

    #[test]
    fn missing_results_document_is_fatal() {
        let mut fx = StoreFixture::new();

        let err = run(&mut fx.store, &fx.paths).unwrap_err();

        assert!(matches!(err, SyncError::FileNotFound(p) if p == fx.paths.results));
        assert!(fx.store.writes().is_empty());
    }
}
