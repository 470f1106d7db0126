//! # API Facade
//!
//! [`SyncApi`] is the single entry point for every sync operation. It owns the
//! store and the resolved document paths and dispatches to the command layer.
//!
//! The facade does no parsing of its own and never prints. Generic over
//! [`DocumentStore`]:
//! - Production: `SyncApi<FileStore>`
//! - Testing: `SyncApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{ResultRecord, Status};
use crate::store::DocumentStore;
use std::io::{BufRead, Write};
use std::path::Path;

pub struct SyncApi<S: DocumentStore> {
    store: S,
    paths: commands::SyncPaths,
}

impl<S: DocumentStore> SyncApi<S> {
    pub fn new(store: S, paths: commands::SyncPaths) -> Self {
        Self { store, paths }
    }

    pub fn update_case(
        &mut self,
        test_case_id: &str,
        status: Status,
    ) -> Result<commands::CmdResult> {
        let record = ResultRecord::new(test_case_id, status);
        commands::update::run(&mut self.store, &self.paths, &record)
    }

    pub fn update_from_json(&mut self, json_path: &Path) -> Result<commands::CmdResult> {
        commands::import_json::run(&mut self.store, &self.paths, json_path)
    }

    pub fn update_from_results(&mut self) -> Result<commands::CmdResult> {
        commands::from_results::run(&mut self.store, &self.paths)
    }

    pub fn interactive<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<commands::CmdResult> {
        commands::interactive::run(&mut self.store, &self.paths, input, output)
    }

    pub fn paths(&self) -> &commands::SyncPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, SyncPaths};
