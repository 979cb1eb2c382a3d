//! Command-line parsing.
//!
//! The installer takes two switches and no positional arguments. Parse
//! failures are reported as [`InstallError::InvalidArgument`] naming the
//! offending token, so `main` can print them in its own `Error:` form.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};

use crate::config::{Options, default_destination};
use crate::error::InstallError;

/// Command-line interface of the installer.
#[derive(Parser, Debug)]
#[command(
    name = "hexxa-install",
    about = "Install the Hexxa Xcode color theme and its font",
    args_override_self = true
)]
pub struct Cli {
    /// Directory to install themes into
    /// [default: ~/Library/Developer/Xcode/UserData/FontAndColorThemes]
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub destination: Option<PathBuf>,

    /// Print what would be installed without writing any files
    #[arg(long)]
    pub dry_run: bool,
}

/// Outcome of option parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    /// Help was requested; print usage and exit successfully.
    Help,
    /// Run the installer with these options.
    Run(Options),
}

/// Parse the argument list, excluding the program name.
///
/// `--help`/`-h` wins over every other token, including malformed ones.
/// A repeated switch keeps its last value. A bare `--` is rejected, since
/// there are no positional arguments for it to introduce.
///
/// # Errors
///
/// Returns [`InstallError::InvalidArgument`] naming the offending token when a
/// flag is unknown, a positional argument is given, or `--destination` has no
/// value.
pub fn parse_options<I, T>(args: I) -> Result<Parsed, InstallError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return Ok(Parsed::Help);
    }
    if args.iter().any(|a| a == "--") {
        return Err(InstallError::InvalidArgument("--".to_string()));
    }

    let argv = std::iter::once(OsString::from("hexxa-install")).chain(args);
    match Cli::try_parse_from(argv) {
        Ok(cli) => Ok(Parsed::Run(Options {
            destination: cli.destination.unwrap_or_else(default_destination),
            dry_run: cli.dry_run,
        })),
        Err(err) if err.kind() == ErrorKind::DisplayHelp => Ok(Parsed::Help),
        Err(err) => Err(invalid_argument(&err)),
    }
}

/// Reduce a clap error to the token it complains about.
fn invalid_argument(err: &clap::Error) -> InstallError {
    let token = match err.get(ContextKind::InvalidArg) {
        // clap renders options with their value name, e.g. "--destination <PATH>".
        Some(ContextValue::String(arg)) => {
            arg.split_whitespace().next().unwrap_or(arg).to_string()
        }
        _ => err.kind().to_string(),
    };
    InstallError::InvalidArgument(token)
}

/// Usage text printed for `--help` and after errors.
#[must_use]
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
