use super::print::print_messages;
use super::setup::{Cli, Commands};
use adl::api::AdlApi;
use adl::error::{AdlError, Result};
use adl::layout::AdrPaths;
use adl::store::fs_backend::FsBackend;
use clap::{CommandFactory, Parser};
use log::LevelFilter;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const OVERWRITE_PROMPT: &str = "File(s) found. Overwrite? [y/N] ";

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too, and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help().map_err(AdlError::Io)?;
        std::process::exit(1);
    };

    let api = init_api(cli.dir);
    match command {
        Commands::Init { yes } => handle_init(&api, yes),
        Commands::Create { name } => handle_create(&api, name),
        Commands::Regen => handle_regen(&api),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn init_api(dir: PathBuf) -> AdlApi<FsBackend> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    AdlApi::new(FsBackend::new(cwd), AdrPaths::new(dir))
}

fn handle_init(api: &AdlApi<FsBackend>, yes: bool) -> Result<()> {
    let result = api.init(|| if yes { Ok(true) } else { confirm(OVERWRITE_PROMPT) })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(api: &AdlApi<FsBackend>, name: Vec<String>) -> Result<()> {
    let result = api.create(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_regen(api: &AdlApi<FsBackend>) -> Result<()> {
    let result = api.regen()?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush().map_err(AdlError::Io)?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(AdlError::Io)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
