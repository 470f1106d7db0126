use crate::commands::{load_checklist, CmdMessage, CmdResult, SyncPaths};
use crate::error::Result;
use crate::sources::json;
use crate::store::DocumentStore;
use std::path::Path;

/// Applies every record of a JSON results file, then writes the checklist once.
///
/// The JSON file is read and parsed before the checklist, so a broken results
/// file never leads to a write.
pub fn run<S: DocumentStore>(
    store: &mut S,
    paths: &SyncPaths,
    json_path: &Path,
) -> Result<CmdResult> {
    let extraction = json::extract(json_path, &store.read(json_path)?)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Read {} result(s) from {}",
        extraction.records.len(),
        json_path.display()
    )));
    result.extend_messages(extraction.messages);

    let mut doc = load_checklist(store, &paths.checklist, &mut result)?;
    for record in &extraction.records {
        result.apply(&mut doc, record);
    }
    result.save(store, &paths.checklist, &doc)?;

    Ok(result)
}
