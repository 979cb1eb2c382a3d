//! `hexxa-install` entry point.
use std::process::ExitCode;

use hexxa_install::cli::{self, Parsed};
use hexxa_install::commands;
use hexxa_install::error::InstallError;
use hexxa_install::logging::{self, Logger};

#[allow(clippy::print_stdout)]
fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();

    let options = match cli::parse_options(std::env::args_os().skip(1)) {
        Ok(Parsed::Help) => {
            println!("{}", cli::usage());
            return ExitCode::SUCCESS;
        }
        Ok(Parsed::Run(options)) => options,
        Err(err) => return fail(&err),
    };

    logging::init_subscriber();
    let log = Logger::new();
    match commands::install::run(&options, &log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

#[allow(clippy::print_stderr)]
fn fail(err: &InstallError) -> ExitCode {
    eprintln!("Error: {err}");
    eprintln!();
    eprintln!("{}", cli::usage());
    ExitCode::FAILURE
}
