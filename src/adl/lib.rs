//! # adl Architecture
//!
//! adl manages a directory of Architecture Decision Records (`./adr`): it lays out the
//! directory, creates numbered records from a template, and regenerates a README index
//! linking to every record.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, picks exit codes      │
//! │  - The ONLY place that knows about stdout/stderr/stdin      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, supplies the clock            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - init, create, regen workflows                            │
//! │  - Built on state.rs, record.rs, index.rs, templates.rs     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait                                     │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never reads stdin and never
//! calls `std::process::exit`. The overwrite confirmation for `init` is passed in as a
//! closure so the CLI owns the prompt.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: `init`, `create`, `regen`
//! - [`state`]: Managed directory probe and guard
//! - [`record`]: Record numbering and file names
//! - [`index`]: Index listing and rendering
//! - [`templates`]: Built-in templates and on-disk overrides
//! - [`layout`]: Paths inside the managed directory
//! - [`store`]: Storage abstraction and implementations
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod index;
pub mod layout;
pub mod record;
pub mod state;
pub mod store;
pub mod templates;
