use crate::commands::{load_checklist, CmdResult, SyncPaths};
use crate::error::Result;
use crate::model::ResultRecord;
use crate::store::DocumentStore;

/// Applies one identifier/status pair and writes the checklist.
///
/// The checklist is written even when the identifier is not found; the
/// not-found warning is the only signal.
pub fn run<S: DocumentStore>(
    store: &mut S,
    paths: &SyncPaths,
    record: &ResultRecord,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut doc = load_checklist(store, &paths.checklist, &mut result)?;

    result.apply(&mut doc, record);
    result.save(store, &paths.checklist, &doc)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::SyncError;
    use crate::model::Status;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn checks_passing_case() {
        let mut fx = StoreFixture::new();
        let record = ResultRecord::new("TC-002", Status::Pass);

        let result = run(&mut fx.store, &fx.paths, &record).unwrap();

        assert!(fx.checklist().contains("- [x] TC-002: Login with wrong password"));
        assert!(fx.checklist().contains("- [ ] TC-001: Login"));
        assert_eq!(result.applied, vec![record]);
        assert_eq!(result.written.as_deref(), Some(fx.paths.checklist.as_path()));
        assert_eq!(fx.store.writes().len(), 1);
    }

    #[test]
    fn unknown_case_warns_and_keeps_content() {
        let mut fx = StoreFixture::new();
        let before = fx.checklist().to_string();

        let result = run(
            &mut fx.store,
            &fx.paths,
            &ResultRecord::new("TC-999", Status::Pass),
        )
        .unwrap();

        assert_eq!(fx.checklist(), before);
        assert_eq!(result.not_found, vec!["TC-999".to_string()]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.contains("TC-999")));
    }

    #[test]
    fn missing_checklist_is_fatal_and_writes_nothing() {
        let mut store = InMemoryStore::new();
        let paths = SyncPaths::new("/nope.md", "/results.md");

        let err = run(&mut store, &paths, &ResultRecord::new("TC-001", Status::Pass)).unwrap_err();

        assert!(matches!(err, SyncError::FileNotFound(_)));
        assert!(store.writes().is_empty());
    }
}
