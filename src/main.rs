//! minijson CLI.
//!
//! Parses JSON from a file or stdin and either re-emits it in compact form
//! or reports how much of the input was consumed.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use minijson::{parse, parse_prefix, stringify, Error};
use tracing_subscriber::EnvFilter;

const EXIT_FORMAT: u8 = 1;
const EXIT_ENCODING: u8 = 2;
const EXIT_IO: u8 = 3;

#[derive(Parser)]
#[command(name = "minijson")]
#[command(about = "Minimal JSON codec", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,

    /// Parse the input and print it as compact JSON
    Format {
        /// Input file (stdin when omitted)
        path: Option<PathBuf>,
    },

    /// Parse the input and report how many bytes the value spans
    Check {
        /// Input file (stdin when omitted)
        path: Option<PathBuf>,

        /// Reject non-whitespace input after the value
        #[arg(long)]
        strict: bool,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Failures the CLI reports, each with its own exit code.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Codec(#[from] Error),

    #[error("trailing input at offset {0}")]
    TrailingInput(usize),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Io(_) => EXIT_IO,
            CliError::Codec(Error::Format(_)) | CliError::TrailingInput(_) => EXIT_FORMAT,
            CliError::Codec(Error::Encoding(_)) => EXIT_ENCODING,
        }
    }
}

fn run_format(path: Option<&PathBuf>) -> Result<String, CliError> {
    let input = read_input(path)?;
    let value = parse(&input).map_err(Error::from)?;
    Ok(stringify(&value).map_err(Error::from)?)
}

fn run_check(path: Option<&PathBuf>, strict: bool) -> Result<String, CliError> {
    let input = read_input(path)?;
    let (value, consumed) = parse_prefix(&input).map_err(Error::from)?;
    let trailing = input[consumed..].trim_start();
    if !trailing.is_empty() {
        let offset = input.len() - trailing.len();
        if strict {
            return Err(CliError::TrailingInput(offset));
        }
        tracing::warn!(offset, "ignoring trailing input after json value");
    }
    Ok(format!(
        "ok: {} consumed {} of {} bytes",
        value.type_name(),
        consumed,
        input.len()
    ))
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let output = match cli.command {
        Some(Commands::Version) => {
            println!("minijson v{}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        None => {
            println!("minijson v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            return ExitCode::SUCCESS;
        }
        Some(Commands::Format { path }) => run_format(path.as_ref()),
        Some(Commands::Check { path, strict }) => run_check(path.as_ref(), strict),
    };

    match output {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
