use super::Extraction;
use crate::error::{Result, SyncError};
use crate::model::{ResultRecord, Status};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// One element of the list form: `{"test_case_id": "TC-001", "status": "pass"}`.
#[derive(Debug, Deserialize)]
struct ListEntry {
    #[serde(default)]
    test_case_id: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Extracts records from the text of a JSON results file.
///
/// Accepts either a list of `{"test_case_id", "status"}` objects or a mapping of
/// identifier to status. List elements missing either key are skipped without
/// a warning. `path` is only used for error reporting.
pub fn extract(path: &Path, text: &str) -> Result<Extraction> {
    let data: Value = serde_json::from_str(text).map_err(|source| SyncError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let mut extraction = Extraction::default();

    match data {
        Value::Array(items) => {
            for item in items {
                let Ok(entry) = serde_json::from_value::<ListEntry>(item) else {
                    continue;
                };
                match (entry.test_case_id, entry.status) {
                    (Some(id), Some(status)) if !id.is_empty() && !status.is_empty() => {
                        push_parsed(&mut extraction, id, &status);
                    }
                    _ => {}
                }
            }
        }
        Value::Object(map) => {
            for (id, value) in map {
                match value {
                    Value::String(status) => push_parsed(&mut extraction, id, &status),
                    other => extraction.warn(format!(
                        "Status for {} must be a string, found {}",
                        id,
                        kind_of(&other)
                    )),
                }
            }
        }
        other => {
            return Err(SyncError::UnsupportedJsonShape {
                path: path.to_path_buf(),
                found: kind_of(&other),
            })
        }
    }

    Ok(extraction)
}

fn push_parsed(extraction: &mut Extraction, id: String, status: &str) {
    match status.parse::<Status>() {
        Ok(status) => extraction.push_record(ResultRecord::new(id, status)),
        Err(e) => extraction.warn(format!("{} for {}", e, id)),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("results.json")
    }

    #[test]
    fn list_form() {
        let text = r#"[
            {"test_case_id": "TC-001", "status": "PASS"},
            {"test_case_id": "TC-002", "status": "fail"}
        ]"#;
        let ex = extract(path(), text).unwrap();
        assert_eq!(
            ex.records,
            vec![
                ResultRecord::new("TC-001", Status::Pass),
                ResultRecord::new("TC-002", Status::Fail),
            ]
        );
        assert!(ex.messages.is_empty());
    }

    #[test]
    fn list_entries_missing_keys_are_skipped_silently() {
        let text = r#"[
            {"test_case_id": "TC-001"},
            {"status": "pass"},
            {"test_case_id": "", "status": "pass"},
            {"test_case_id": "TC-002", "status": 3},
            "TC-003",
            {"test_case_id": "TC-004", "status": "blocked", "note": "env down"}
        ]"#;
        let ex = extract(path(), text).unwrap();
        assert_eq!(ex.records, vec![ResultRecord::new("TC-004", Status::Blocked)]);
        assert!(ex.messages.is_empty());
    }

    #[test]
    fn mapping_form_keeps_file_order() {
        let text = r#"{"TC-010": "pass", "TC-002": "Not_Run", "TC-001": "fail"}"#;
        let ex = extract(path(), text).unwrap();
        let ids: Vec<_> = ex.records.iter().map(|r| r.test_case_id.as_str()).collect();
        assert_eq!(ids, vec!["TC-010", "TC-002", "TC-001"]);
        assert_eq!(ex.records[1].status, Status::NotRun);
    }

    #[test]
    fn mapping_with_non_string_status_warns() {
        let ex = extract(path(), r#"{"TC-001": true, "TC-002": "pass"}"#).unwrap();
        assert_eq!(ex.records, vec![ResultRecord::new("TC-002", Status::Pass)]);
        assert_eq!(ex.messages.len(), 1);
        assert!(ex.messages[0].content.contains("TC-001"));
    }

    #[test]
    fn unknown_status_warns_and_skips() {
        let ex = extract(path(), r#"{"TC-001": "skipped"}"#).unwrap();
        assert!(ex.records.is_empty());
        assert_eq!(
            ex.messages[0].content,
            "Unknown status 'skipped' for TC-001"
        );
    }

    #[test]
    fn malformed_json_is_fatal() {
        let err = extract(path(), "{not json").unwrap_err();
        assert!(matches!(err, SyncError::Json { .. }));
    }

    #[test]
    fn scalar_top_level_is_rejected() {
        let err = extract(path(), "\"TC-001\"").unwrap_err();
        assert!(matches!(
            err,
            SyncError::UnsupportedJsonShape { found: "a string", .. }
        ));
    }
}
