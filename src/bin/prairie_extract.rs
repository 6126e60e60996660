//! CLI that parses a Prairie Card page and prints the profile as JSON.
//!
//! Reads HTML from a file or stdin. With `--url`, the source URL is
//! validated first and the run aborts (exit code 2) if it is refused.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use prairie_card_parser::{check_source_url, parse_profile_bytes_with_options, Options, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prairie_extract")]
#[command(about = "Extract an attendee profile from Prairie Card HTML")]
struct Args {
    /// HTML file to parse (default: stdin)
    #[arg()]
    input: Option<PathBuf>,

    /// Source URL of the page; refused URLs abort with exit code 2
    #[arg(long = "url")]
    url: Option<String>,

    /// Emit extraction diagnostics on stderr
    #[arg(long = "debug")]
    debug: bool,

    /// Pretty-print the JSON output
    #[arg(long = "pretty")]
    pretty: bool,
}

fn init_logging(debug: bool) {
    let default = if debug { "prairie_card_parser=debug,prairie_extract=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn build_options(args: &Args) -> Result<Options> {
    let options = Options {
        debug: args.debug,
        ..Options::default()
    };
    options.validate()?;
    Ok(options)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    if let Some(url) = &args.url {
        match check_source_url(url) {
            Ok(parsed) => info!(url = %parsed, "source URL accepted"),
            Err(e) => {
                error!(url = %url, reason = %e, "source URL refused");
                return ExitCode::from(2);
            }
        }
    }

    let html = match read_input(args.input.as_ref()) {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, "failed to read input");
            return ExitCode::FAILURE;
        }
    };

    let options = match build_options(&args) {
        Ok(options) => options,
        Err(e) => {
            error!(error = %e, "invalid options");
            return ExitCode::FAILURE;
        }
    };
    let profile = parse_profile_bytes_with_options(&html, &options);

    let json = if args.pretty { profile.to_json_pretty() } else { profile.to_json() };
    let json = match json {
        Ok(json) => json,
        Err(e) => {
            error!(error = %e, "failed to serialize profile");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if writeln!(stdout, "{json}").is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
