//! # CLI Layer
//!
//! This module is **one possible UI client** for adl, not the application itself. It is the
//! only place that parses arguments, reads the overwrite answer from stdin, prints, and
//! decides exit codes.
//!
//! ## Exit Codes
//!
//! | Invocation                  | Exit |
//! |-----------------------------|------|
//! | `init` (or declined)        | 0    |
//! | `create <name...>`, `regen` | 0    |
//! | `--help`, `--version`       | 0    |
//! | usage / unmanaged / I/O     | 1    |
//! | no command                  | 1    |
//!
//! Errors surface as `AdlError` from [`run`]; `main.rs` prints them through
//! [`print_error`] and exits 1. Help, version and "no command" exit from here directly.

mod commands;
mod print;
mod setup;

pub use commands::run;
pub use print::print_error;
