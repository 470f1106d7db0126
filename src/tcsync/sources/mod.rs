//! # Result Sources
//!
//! Adapters that turn an input format into [`ResultRecord`]s. They only parse:
//! applying records to the checklist and writing it back is the command
//! layer's job.
//!
//! - [`json`]: a JSON results file, either a list of objects or a mapping
//! - [`results_doc`]: the markdown results document with PASS/FAIL/BLOCKED blocks
//!
//! Problems that should not stop the run (an unknown status, an ambiguous
//! results block) are collected as warnings next to the records.

use crate::commands::CmdMessage;
use crate::model::ResultRecord;

pub mod json;
pub mod results_doc;

#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<ResultRecord>,
    pub messages: Vec<CmdMessage>,
}

impl Extraction {
    pub fn push_record(&mut self, record: ResultRecord) {
        self.records.push(record);
    }

    pub fn warn(&mut self, content: impl Into<String>) {
        self.messages.push(CmdMessage::warning(content));
    }
}
