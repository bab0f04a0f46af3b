//! Command-line interface for the Tripweave itinerary engine.
#![forbid(unsafe_code)]

use std::io::{BufReader, Write};

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tripweave_fs::open_utf8_file;

mod error;
mod plan;
mod rank;

pub use error::CliError;

use plan::{PlanArgs, run_plan_with};
use rank::{RankTransportArgs, run_rank_transport_with};

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_PLAN_CATALOG: &str = "catalog";
pub(crate) const ARG_PLAN_DESTINATIONS: &str = "destinations";
pub(crate) const ARG_PLAN_POLICY: &str = "policy";
pub(crate) const ARG_PLAN_OUTPUT: &str = "output";
pub(crate) const ARG_RANK_OPTIONS: &str = "options";
pub(crate) const ARG_RANK_BY: &str = "by";
pub(crate) const ENV_PLAN_REQUEST: &str = "TRIPWEAVE_CMDS_PLAN_REQUEST_PATH";
pub(crate) const ENV_RANK_OPTIONS: &str = "TRIPWEAVE_CMDS_RANK_TRANSPORT_OPTIONS_PATH";

/// Run the Tripweave CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when the result cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` and `--version` surface as errors that belong on stdout.
        Err(err) if !err.use_stderr() => return err.print().map_err(CliError::WriteOutput),
        Err(err) => return Err(err.into()),
    };
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Plan(args) => run_plan_with(args, &mut stdout),
        Command::RankTransport(args) => run_rank_transport_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tripweave",
    about = "Plan multi-day travel itineraries from scored places",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Schedule a plan request into a day-by-day itinerary.
    Plan(PlanArgs),
    /// Order transport options by cost, duration or transfers.
    RankTransport(RankTransportArgs),
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match tripweave_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Decode a JSON document from disk.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Render `value` as pretty JSON followed by a newline.
pub(crate) fn render_json<T: Serialize>(value: &T) -> Result<Vec<u8>, CliError> {
    let mut payload = serde_json::to_vec_pretty(value).map_err(CliError::SerialiseOutput)?;
    payload.push(b'\n');
    Ok(payload)
}

/// Write already-rendered output.
pub(crate) fn write_payload(writer: &mut dyn Write, payload: &[u8]) -> Result<(), CliError> {
    writer.write_all(payload).map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}

#[cfg(test)]
mod tests;
