//! # adl
//!
//! Command-line entry point. All behavior lives in the `adl` library; `cli/` parses
//! arguments, calls the API facade and renders results.
//!
//! ```text
//! adl init            Initialize ./adr (asks before overwriting)
//! adl create <name>   Create the next numbered record and refresh the index
//! adl regen           Regenerate ./adr/README.md
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print_error(&e);
        std::process::exit(1);
    }
}
