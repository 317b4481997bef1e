use adl::layout::DEFAULT_DIR;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "adl",
    bin_name = "adl",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Manage Architecture Decision Records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Managed directory, relative to the working directory
    #[arg(
        long,
        global = true,
        env = "ADL_DIR",
        default_value = DEFAULT_DIR,
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub dir: PathBuf,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new ADR
    #[command(display_order = 1, after_help = "Example:\n  adl create Migrate to Deno again")]
    Create {
        /// Title of the record (words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Initialize the ADR directory
    #[command(display_order = 2)]
    Init {
        /// Overwrite an existing directory without asking
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Regenerate the ADR README.md
    #[command(display_order = 3)]
    Regen,
}
