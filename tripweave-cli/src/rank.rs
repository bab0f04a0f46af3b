//! Rank-transport command implementation for the Tripweave CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripweave_core::{TransportOption, TransportSort, rank_transport};

use crate::{
    ARG_RANK_BY, ARG_RANK_OPTIONS, CliError, ENV_RANK_OPTIONS, load_json, render_json,
    require_existing, write_payload,
};

/// CLI arguments for the `rank-transport` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read a JSON array of transport options and print it \
                 ordered cheapest, fastest or most direct first. Options \
                 that tie keep their input order.",
    about = "Rank transport options"
)]
#[ortho_config(prefix = "TRIPWEAVE")]
pub(crate) struct RankTransportArgs {
    /// Path to a JSON array of transport options.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) options_path: Option<Utf8PathBuf>,
    /// Sort key: `cost` (default), `duration` or `transfers`.
    #[arg(long = ARG_RANK_BY, value_name = "key")]
    #[serde(default)]
    pub(crate) by: Option<String>,
}

impl RankTransportArgs {
    pub(crate) fn into_config(self) -> Result<RankTransportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankTransportConfig::try_from(merged)
    }
}

/// Resolved `rank-transport` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankTransportConfig {
    pub(crate) options_path: Utf8PathBuf,
    pub(crate) by: TransportSort,
}

impl TryFrom<RankTransportArgs> for RankTransportConfig {
    type Error = CliError;

    fn try_from(args: RankTransportArgs) -> Result<Self, Self::Error> {
        let options_path = args.options_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_OPTIONS,
            env: ENV_RANK_OPTIONS,
        })?;
        let by = args
            .by
            .as_deref()
            .map(str::parse::<TransportSort>)
            .transpose()
            .map_err(|reason| CliError::InvalidArgument {
                field: ARG_RANK_BY,
                reason,
            })?
            .unwrap_or_default();
        Ok(Self { options_path, by })
    }
}

pub(crate) fn run_rank_transport_with(
    args: RankTransportArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.options_path, ARG_RANK_OPTIONS)?;
    let ranked = execute_rank(&config)?;
    write_payload(writer, &render_json(&ranked)?)
}

pub(crate) fn execute_rank(
    config: &RankTransportConfig,
) -> Result<Vec<TransportOption>, CliError> {
    let mut options: Vec<TransportOption> = load_json(&config.options_path, ARG_RANK_OPTIONS)?;
    rank_transport(&mut options, config.by);
    log::debug!("ranked {} transport option(s) by {:?}", options.len(), config.by);
    Ok(options)
}
