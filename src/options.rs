use std::ffi::OsString;

use clap::Parser;

use crate::command::Command;

#[derive(Clone, Debug, Default, Parser)]
#[command(
    name = "inferior",
    about = "Test fixture driven by a debugger",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Options {
    // Which code path to take. Anything unrecognized falls back to usage.
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,
    // Everything after the command is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

impl Options {
    /// Parse the process arguments. Never fails: arguments clap can't make sense
    /// of (e.g. non UTF-8) are treated the same as an unknown command.
    pub fn from_env() -> Options {
        Options::parse_lenient(std::env::args_os())
    }

    pub fn parse_lenient<I, T>(args: I) -> Options
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        // clap would swallow a leading `--` as an escape. Only the first raw
        // argument picks the command, so here it's just an unknown word.
        if args.get(1).is_some_and(|arg| arg == "--") {
            return Options {
                command: Some("--".to_string()),
                rest: Vec::new(),
            };
        }

        Options::try_parse_from(args).unwrap_or_default()
    }

    /// The command to run, or `None` if the usage message should be printed.
    pub fn command(&self) -> Option<Command> {
        self.command.as_deref().and_then(|c| c.parse().ok())
    }
}
