use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use srctidy::{CleanError, CleanOptions, ExtensionFilter, OutputMode};

/// Clean trailing whitespace and fix end-of-file newlines in Swift, Python,
/// shell and JSON files.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Root directory to scan.
    #[arg(value_name = "DIR")]
    directory: PathBuf,

    /// Only print paths of cleaned files (no labels).
    #[arg(short, long)]
    bare: bool,

    /// Also print files that were left unchanged.
    #[arg(short, long)]
    verbose: bool,

    /// File extension to scan; repeat to scan several. Replaces the default
    /// set (.swift, .py, .sh, .json).
    #[arg(short, long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Print diagnostic traces to stderr.
    #[arg(long)]
    debug: bool,
}

fn print_help_stderr() {
    let _ = Cli::command().write_long_help(&mut io::stderr());
}

/// Report a command-line error followed by the full help, exit code 1.
fn usage_error(message: &str) -> ExitCode {
    eprintln!("{}\n", message.trim_end());
    print_help_stderr();
    ExitCode::from(1)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .init();
}

fn build_options(cli: &Cli) -> Result<CleanOptions, ExitCode> {
    let extensions = if cli.extensions.is_empty() {
        ExtensionFilter::default()
    } else {
        ExtensionFilter::new(&cli.extensions)
            .ok_or_else(|| usage_error("error: --ext values must not be empty"))?
    };

    Ok(CleanOptions {
        extensions,
        mode: OutputMode::from_flags(cli.bare, cli.verbose),
    })
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    if cli.debug {
        init_tracing();
    }
    let options = build_options(&cli)?;

    let mut stdout = io::stdout().lock();
    match srctidy::scan(&cli.directory, &options, &mut stdout) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e @ CleanError::InvalidRoot { .. }) => Err(usage_error(&format!("error: {e}"))),
        Err(e) => {
            eprintln!("error: {e}");
            Err(ExitCode::from(1))
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => return usage_error(&e.to_string()),
    };
    match run(cli) {
        Ok(code) => code,
        Err(code) => code,
    }
}
