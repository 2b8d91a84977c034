//! Command dispatch.
//!
//! Maps the parsed command line to a [`Command`], runs it, and renders either
//! the outcome or the error. Every path ends after its first print.

use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use log::{debug, info};

use crate::config::{Cli, Config, PROGRAM_NAME};
use crate::error_handling::{AppError, UsageError, EXIT_SUCCESS};
use crate::locate::{Locator, LookupResult};
use crate::output::{render_error, render_help, render_result};
use crate::validate::parse_address;

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No arguments, or `-h/--help`.
    Help,
    /// `-I/--ip <address>`; the address is not yet validated.
    Lookup(String),
    /// `-I/--ip` without an address.
    MissingAddress,
    /// Anything else.
    InvalidArgument,
}

impl Command {
    /// Decides the command from the leading arguments (program name excluded).
    ///
    /// Only the first argument picks the command: `-h`/`--help` is help,
    /// `-I`/`--ip` takes the next argument as the address whatever it looks
    /// like, no arguments is help, anything else is invalid.
    pub fn from_args(args: &[OsString]) -> Self {
        split_command(args).0
    }
}

fn split_command(args: &[OsString]) -> (Command, &[OsString]) {
    let Some(first) = args.first() else {
        return (Command::Help, args);
    };

    if first == "-h" || first == "--help" {
        (Command::Help, &args[1..])
    } else if first == "-I" || first == "--ip" {
        match args.get(1) {
            Some(address) => (
                Command::Lookup(address.to_string_lossy().into_owned()),
                &args[2..],
            ),
            None => (Command::MissingAddress, &args[1..]),
        }
    } else {
        (Command::InvalidArgument, &[])
    }
}

/// Parses process arguments (including the program name) into a command and
/// the configuration to run it with.
///
/// The options after the command are parsed by clap. If they do not parse they
/// are ignored and the default configuration is used, so trailing junk never
/// changes the command.
pub fn parse_args<I, T>(args: I) -> (Command, Config)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let program = args.next().unwrap_or_else(|| OsString::from(PROGRAM_NAME));
    let args: Vec<OsString> = args.collect();

    let (command, options) = split_command(&args);
    let argv = std::iter::once(program).chain(options.iter().cloned());
    let config = match Cli::try_parse_from(argv) {
        Ok(cli) => Config::from(&cli),
        Err(_) => Config::default(),
    };
    (command, config)
}

enum Outcome {
    Help,
    Located(LookupResult),
}

async fn dispatch(command: Command, locator: &Locator) -> Result<Outcome, AppError> {
    match command {
        Command::Help => Ok(Outcome::Help),
        Command::MissingAddress => Err(UsageError::MissingAddress.into()),
        Command::InvalidArgument => Err(UsageError::InvalidArgument.into()),
        Command::Lookup(address) => {
            parse_address(&address)?;
            let result = locator.fetch_location(&address).await?;
            Ok(Outcome::Located(result))
        }
    }
}

/// Runs `command`, writing everything the user sees to `out`.
///
/// Returns the process exit code: 0 on success or help, otherwise the code of
/// the error class (see [`AppError::exit_code`]).
///
/// # Errors
///
/// Only fails if writing to `out` fails.
pub async fn run<W: Write>(command: Command, locator: &Locator, out: &mut W) -> io::Result<i32> {
    debug!("Dispatching {command:?}");
    match dispatch(command, locator).await {
        Ok(Outcome::Help) => {
            render_help(out)?;
            Ok(EXIT_SUCCESS)
        }
        Ok(Outcome::Located(result)) => {
            render_result(out, &result)?;
            Ok(EXIT_SUCCESS)
        }
        Err(err) => {
            info!("Run failed: {err}");
            render_error(out, &err.to_string())?;
            if err.shows_help() {
                render_help(out)?;
            }
            Ok(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Command {
        let mut argv = vec!["ip_location"];
        argv.extend_from_slice(args);
        parse_args(argv).0
    }

    #[test]
    fn test_no_arguments_is_help() {
        assert_eq!(command(&[]), Command::Help);
        assert_eq!(Command::from_args(&[]), Command::Help);
    }

    #[test]
    fn test_from_args_reads_leading_arguments() {
        let args: Vec<OsString> = ["--ip", "::1", "--bogus"].iter().map(OsString::from).collect();
        assert_eq!(Command::from_args(&args), Command::Lookup("::1".to_string()));
    }

    #[test]
    fn test_help_flags() {
        assert_eq!(command(&["-h"]), Command::Help);
        assert_eq!(command(&["--help"]), Command::Help);
    }

    #[test]
    fn test_ip_flags() {
        assert_eq!(
            command(&["-I", "8.8.8.8"]),
            Command::Lookup("8.8.8.8".to_string())
        );
        assert_eq!(
            command(&["--ip", "::1"]),
            Command::Lookup("::1".to_string())
        );
    }

    #[test]
    fn test_ip_flag_without_address() {
        assert_eq!(command(&["-I"]), Command::MissingAddress);
        assert_eq!(command(&["--ip"]), Command::MissingAddress);
    }

    #[test]
    fn test_lookup_is_not_validated_at_parse_time() {
        assert_eq!(
            command(&["--ip", "not-an-ip"]),
            Command::Lookup("not-an-ip".to_string())
        );
    }

    #[test]
    fn test_other_arguments_are_invalid() {
        assert_eq!(command(&["8.8.8.8"]), Command::InvalidArgument);
        assert_eq!(command(&["--bogus"]), Command::InvalidArgument);
        assert_eq!(command(&["-x"]), Command::InvalidArgument);
        assert_eq!(command(&["--log-level", "loud"]), Command::InvalidArgument);
    }

    #[test]
    fn test_first_argument_decides_the_command() {
        assert_eq!(command(&["foo", "-I", "8.8.8.8"]), Command::InvalidArgument);
        assert_eq!(command(&["--bogus", "--ip", "8.8.8.8"]), Command::InvalidArgument);
        assert_eq!(command(&["foo", "--help"]), Command::InvalidArgument);
        assert_eq!(
            command(&["--timeout-seconds", "3", "-I", "8.8.8.8"]),
            Command::InvalidArgument
        );
    }

    #[test]
    fn test_later_flags_do_not_change_the_command() {
        assert_eq!(
            command(&["-I", "8.8.8.8", "-h"]),
            Command::Lookup("8.8.8.8".to_string())
        );
        assert_eq!(
            command(&["-I", "8.8.8.8", "--bogus"]),
            Command::Lookup("8.8.8.8".to_string())
        );
        assert_eq!(
            command(&["-I", "8.8.8.8", "-I", "1.1.1.1"]),
            Command::Lookup("8.8.8.8".to_string())
        );
        assert_eq!(command(&["-h", "-I", "8.8.8.8"]), Command::Help);
        assert_eq!(command(&["--help", "--bogus"]), Command::Help);
    }

    #[test]
    fn test_argument_after_ip_flag_is_always_the_address() {
        assert_eq!(command(&["-I", "-h"]), Command::Lookup("-h".to_string()));
        assert_eq!(
            command(&["--ip", "--bogus"]),
            Command::Lookup("--bogus".to_string())
        );
    }

    #[test]
    fn test_attached_value_form_is_not_accepted() {
        assert_eq!(command(&["--ip=8.8.8.8"]), Command::InvalidArgument);
        assert_eq!(command(&["-I8.8.8.8"]), Command::InvalidArgument);
    }

    #[test]
    fn test_trailing_arguments_after_lookup_are_ignored() {
        assert_eq!(
            command(&["-I", "1.1.1.1", "extra"]),
            Command::Lookup("1.1.1.1".to_string())
        );
    }

    #[test]
    fn test_options_after_the_command_feed_config() {
        let (command, config) = parse_args([
            "ip_location",
            "-I",
            "8.8.8.8",
            "--timeout-seconds",
            "3",
            "--api-url",
            "http://localhost:9/json/",
        ]);
        assert_eq!(command, Command::Lookup("8.8.8.8".to_string()));
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.api_url, "http://localhost:9/json/");
    }

    #[test]
    fn test_unparseable_options_fall_back_to_default_config() {
        let (command, config) =
            parse_args(["ip_location", "-I", "8.8.8.8", "--timeout-seconds", "soon"]);
        assert_eq!(command, Command::Lookup("8.8.8.8".to_string()));
        assert_eq!(config.timeout_seconds, Config::default().timeout_seconds);
    }

    #[test]
    fn test_invalid_command_uses_default_config() {
        let (_, config) = parse_args(["ip_location", "--api-url", "http://localhost:9/json/"]);
        assert_eq!(config.api_url, Config::default().api_url);
    }
}
