//! listserial CLI - List the serial ports present on the host.
//!
//! Prints each port's identifier and description, or a "none found"
//! message. Standard output carries only the report; logs and errors go to
//! standard error.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use env_logger::Env;
use listserial::{NativePortEnumerator, PortEnumerator, format_report, format_report_json};
use log::debug;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;

use config::Config;

/// listserial - List available serial ports.
///
/// Environment variables:
///   LISTSERIAL_JSON   - Emit the report as JSON
///   RUST_LOG          - Log filter (overrides -v/-q)
#[derive(Parser, Debug)]
#[command(name = "listserial")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output level (-v, -vv for increasing detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (only warnings and errors are logged).
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Output the port list as JSON to stdout.
    #[arg(
        long,
        env = "LISTSERIAL_JSON",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    json: bool,

    /// Path to a configuration file.
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Bulleted text report.
    Text,
    /// Pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    /// Resolve the format from CLI flags and configuration.
    fn resolve(cli: &Cli, config: &Config) -> Self {
        if cli.json || config.json() {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Enumerate once, render once, write once.
fn run<E, W>(enumerator: &E, format: OutputFormat, out: &mut W) -> Result<()>
where
    E: PortEnumerator + ?Sized,
    W: Write,
{
    let ports = enumerator.list_ports()?;
    debug!("Rendering {} port(s) as {format:?}", ports.len());

    let report = match format {
        OutputFormat::Text => format_report(&ports),
        OutputFormat::Json => format_report_json(&ports)?,
    };

    writeln!(out, "{report}").context("Failed to write report")?;
    out.flush()
        .context("Failed to write report")?;
    Ok(())
}

/// Exit code for runtime failures (usage errors exit 2 via clap).
const EXIT_FAILURE: u8 = 1;

/// Write the `Error:` line for `err` and its causes; returns the exit code.
fn report_error<W: Write>(err: &anyhow::Error, out: &mut W) -> u8 {
    let _ = writeln!(out, "{} {err:#}", style("Error:").for_stderr().red().bold());
    EXIT_FAILURE
}

fn init_logging(cli: &Cli) {
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_target(cli.verbose >= 2)
        .format_timestamp(if cli.verbose >= 2 {
            Some(env_logger::TimestampPrecision::Millis)
        } else {
            None
        })
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // NO_COLOR and non-TTY stderr disable styling
    if env::var_os("NO_COLOR").is_some() || !console::Term::stderr().is_term() {
        console::set_colors_enabled_stderr(false);
    }

    init_logging(&cli);

    debug!(
        "listserial v{} (verbose level: {})",
        env!("CARGO_PKG_VERSION"),
        cli.verbose
    );

    let config = if let Some(ref path) = cli.config_path {
        Config::load_from_path(path)
    } else {
        Config::load()
    };

    let format = OutputFormat::resolve(&cli, &config);
    let stdout = io::stdout();

    match run(&NativePortEnumerator, format, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report_error(&err, &mut io::stderr().lock())),
    }
}
