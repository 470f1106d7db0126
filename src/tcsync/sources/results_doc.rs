//! Parser for the markdown results document.
//!
//! Each test case gets its own block:
//!
//! ```text
//! ### TC-010: Login
//! - Tester: kim
//! **상태**: [x] PASS / [ ] FAIL / [ ] BLOCKED
//! ```
//!
//! A block runs from its `### TC-<digits>:` heading to the next heading of
//! level 1 to 3, so a block without a status line never borrows the status of
//! the block after it. The status label may be `**상태**:` or `**Status**:`.

use super::Extraction;
use crate::model::{ResultRecord, Status};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#{1,3}[ \t]").expect("heading pattern is valid"));

static CASE_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^### (TC-\d+):").expect("case heading pattern is valid"));

static STATUS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)\*\*(?:상태|Status)\*\*:.*?\[([xX ])\].*?PASS.*?\[([xX ])\].*?FAIL.*?\[([xX ])\].*?BLOCKED",
    )
    .expect("status pattern is valid")
});

/// Indicator order in the status line, which is also the tie-break order.
const INDICATORS: [Status; 3] = [Status::Pass, Status::Fail, Status::Blocked];

pub fn extract(text: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for block in blocks(text) {
        let Some(heading) = CASE_HEADING_RE.captures(block) else {
            continue;
        };
        let test_case_id = &heading[1];

        let Some(status_line) = STATUS_RE.captures(block) else {
            continue;
        };

        let checked: Vec<Status> = INDICATORS
            .iter()
            .enumerate()
            .filter(|(i, _)| status_line[i + 1].eq_ignore_ascii_case("x"))
            .map(|(_, status)| *status)
            .collect();

        match checked.as_slice() {
            [] => {}
            [status] => extraction.push_record(ResultRecord::new(test_case_id, *status)),
            [first, ..] => {
                let labels: Vec<String> = checked
                    .iter()
                    .map(|s| s.as_str().to_uppercase())
                    .collect();
                extraction.warn(format!(
                    "Ambiguous result for {}: {} checked; using {}",
                    test_case_id,
                    labels.join(", "),
                    first
                ));
                extraction.push_record(ResultRecord::new(test_case_id, *first));
            }
        }
    }

    extraction
}

/// Splits the document at every level 1-3 heading.
fn blocks(text: &str) -> impl Iterator<Item = &str> {
    let starts: Vec<usize> = HEADING_RE.find_iter(text).map(|m| m.start()).collect();
    let ends: Vec<usize> = starts
        .iter()
        .skip(1)
        .copied()
        .chain(std::iter::once(text.len()))
        .collect();
    starts
        .into_iter()
        .zip(ends)
        .map(move |(start, end)| &text[start..end])
}
