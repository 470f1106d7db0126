//! # tcsync Architecture
//!
//! tcsync keeps a markdown QA checklist in step with recorded test outcomes. It
//! rewrites checkbox markers (`- [ ] TC-001: …` to `- [x] TC-001: …`) from a
//! single CLI pair, a JSON results file, a markdown results document, or an
//! interactive prompt.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, prints colored messages, sets exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - SyncApi facade, owns the store and the document paths    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - read inputs, apply records in memory, write once         │
//! │  - built on checklist.rs and sources/                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore trait: FileStore, InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Printing in Core
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and reports soft
//! problems (unknown identifier, unknown status, ambiguous results block) as
//! [`commands::CmdMessage`]s. Nothing calls `std::process::exit`. The one
//! exception is the interactive session, which writes prompts to the writer it
//! is given.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade used by the CLI
//! - [`commands`]: one module per input mode
//! - [`checklist`]: line-record parser and checkbox updater
//! - [`sources`]: JSON and results-document adapters
//! - [`store`]: whole-file text I/O
//! - [`model`]: `Status` and `ResultRecord`
//! - [`config`]: project configuration and path resolution
//! - [`error`]: error types

pub mod api;
pub mod checklist;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod sources;
pub mod store;
