use adl::api::{CmdMessage, MessageLevel};
use adl::error::AdlError;
use colored::Colorize;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

/// `error: <message>` on stderr, followed by a hint for guard errors. Usage lines go to
/// stdout.
pub fn print_error(err: &AdlError) {
    eprintln!("{}: {}", "error".red(), err);
    if let Some(hint) = err.hint() {
        eprintln!();
        eprintln!("{}", hint);
    }
    if let Some(usage) = err.usage() {
        eprintln!();
        println!("{}", usage);
    }
}
