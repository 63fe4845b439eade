use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use taglex::DEFAULT_PROGRESS_INTERVAL;
use thiserror::Error;

/// Environment variable overriding how often progress is reported.
pub const PROGRESS_ENV: &str = "COOKED2LEX_PROGRESS_EVERY";

const DEFAULT_PROGRAM: &str = "cooked2lex";

#[derive(Debug, Parser)]
#[command(
    name = "cooked2lex",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Cli {
    /// Add word-counts.
    #[arg(short = 'c')]
    counts: bool,
    /// Display help message and exit.
    #[arg(short = 'h')]
    help: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub with_counts: bool,
    pub progress_every: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            with_counts: false,
            progress_every: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("help requested")]
    Help,
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("invalid arguments: {0}")]
    Invalid(String),
}

impl Config {
    /// Resolve flags first, then the environment (looked up through `env`),
    /// then defaults. `args` includes the program name.
    pub fn load<I, T, F>(args: I, env: F) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        F: Fn(&str) -> Option<String>,
    {
        let cli = Cli::try_parse_from(args).map_err(usage_error)?;
        if cli.help {
            return Err(UsageError::Help);
        }

        let progress_every = env(PROGRESS_ENV)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_PROGRESS_INTERVAL);

        Ok(Self {
            with_counts: cli.counts,
            progress_every,
        })
    }
}

fn usage_error(err: clap::Error) -> UsageError {
    let arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.clone()),
        _ => None,
    };
    match (err.kind(), arg) {
        (ErrorKind::UnknownArgument, Some(arg)) if arg.starts_with('-') && arg.len() > 1 => {
            UsageError::UnknownOption(arg)
        }
        (_, Some(arg)) => UsageError::UnexpectedArgument(arg),
        (kind, None) => UsageError::Invalid(kind.as_str().unwrap_or("unknown").to_owned()),
    }
}

/// Base name of the invoked binary, for the usage text.
pub fn program_name(arg0: Option<&str>) -> String {
    arg0.and_then(|a| Path::new(a).file_name())
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_PROGRAM)
        .to_owned()
}

pub fn usage(cmd: &str) -> String {
    format!(
        "Usage: {cmd} [-c] [-h]

Options:
    -h Display help message and exit.
    -c Add word-counts.

Reads from stdin. Writes output to stdout. Writes informative and
error messages on stderr.
"
    )
}
