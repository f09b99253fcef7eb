//! colcut: print selected columns of comma-separated files.

use std::io::{self, BufWriter, IsTerminal};
use std::path::Path;
use std::process;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ColorChoice, CommandFactory, FromArgMatches};
use colcut_cli::cli::{Cli, LogFormatArg, LogLevelArg, usage_text};
use colcut_cli::commands::run_plan;
use colcut_cli::logging::{LogConfig, LogFormat, init_logging};
use colcut_cli::plan::build_plan;
use colcut_core::{CutError, EXIT_FAILURE, EXIT_USAGE};
use tracing::level_filters::LevelFilter;

fn main() {
    let prog = program_name();
    let matches = match Cli::command().try_get_matches() {
        Ok(matches) => matches,
        Err(error) if error.kind() == ErrorKind::DisplayVersion => error.exit(),
        Err(error) => usage_error(&prog, &error),
    };
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(error) => usage_error(&prog, &error),
    };
    if cli.help {
        eprint!("{}", usage_text());
        process::exit(EXIT_USAGE);
    }

    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("{prog}: failed to initialize logging: {error}");
        process::exit(EXIT_FAILURE);
    }

    let plan = build_plan(&matches);
    let exit_code = {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        match run_plan(&plan, &mut out) {
            Ok(()) => 0,
            Err(error) => report(&prog, &error),
        }
    };
    process::exit(exit_code);
}

/// Report a command-line error the way `-h` reports help, then exit 2.
fn usage_error(prog: &str, error: &clap::Error) -> ! {
    eprintln!("{prog}: {}", argument_message(error));
    eprintln!();
    eprint!("{}", usage_text());
    process::exit(EXIT_USAGE);
}

/// One-line description of a clap error, naming the offending argument.
fn argument_message(error: &clap::Error) -> String {
    let message = match error.get(ContextKind::InvalidValue) {
        Some(ContextValue::String(value))
            if value.is_empty() && error.kind() == ErrorKind::InvalidValue =>
        {
            "a value is required for"
        }
        _ => error.kind().as_str().unwrap_or("invalid arguments"),
    };
    match error.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => format!("{message} '{arg}'"),
        _ => message.to_string(),
    }
}

/// Print the diagnostic for a fatal error and pick the exit status.
fn report(prog: &str, error: &CutError) -> i32 {
    if error.is_broken_pipe() {
        return 0;
    }
    eprintln!("{prog}: {error}");
    if error.wants_usage() {
        eprintln!();
        eprint!("{}", usage_text());
    }
    error.exit_code()
}

/// Basename of `argv[0]`, for diagnostics.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "colcut".to_string())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_log_config_explicit_flags() {
        let cli = Cli::try_parse_from([
            "colcut",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-file",
            "colcut.log",
            "--color",
            "never",
        ])
        .unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_file, Some(PathBuf::from("colcut.log")));
        assert!(!config.with_ansi);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn test_log_config_defaults_defer_to_rust_log() {
        let cli = Cli::try_parse_from(["colcut", "--color", "always"]).unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.with_ansi);
        assert!(config.use_env_filter);
    }

    #[test]
    fn test_verbosity_flag_sets_level() {
        let cli = Cli::try_parse_from(["colcut", "-vv"]).unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn test_argument_message_names_argument() {
        let error = Cli::command()
            .try_get_matches_from(["colcut", "-x"])
            .unwrap_err();
        assert_eq!(argument_message(&error), "unexpected argument found '-x'");
    }

    #[test]
    fn test_argument_message_missing_value() {
        let error = Cli::command()
            .try_get_matches_from(["colcut", "-c", "1", "in.csv", "-c"])
            .unwrap_err();
        assert_eq!(
            argument_message(&error),
            "a value is required for '-c <COLUMNS>'"
        );
    }
}
