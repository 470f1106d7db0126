use colored::Colorize;
use tcsync::api::{CmdMessage, MessageLevel};

/// Info messages are only shown in verbose mode.
pub(super) fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info if verbose => println!("{}", message.content.dimmed()),
            MessageLevel::Info => {}
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
