//! Plan command implementation for the Tripweave CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripweave_core::{Catalog, Destinations, Itinerary, PlaceSource, PlanRequest, Planner};
use tripweave_fs::open_utf8_file;
use tripweave_planner::{FixedSlotPlanner, GreedyPlanner, PlannerConfig, default_slots};
use tripweave_scorer::PreferenceScorer;

use crate::{
    ARG_PLAN_CATALOG, ARG_PLAN_DESTINATIONS, ARG_PLAN_OUTPUT, ARG_PLAN_POLICY, ARG_PLAN_REQUEST,
    CliError, ENV_PLAN_REQUEST, load_json, render_json, require_existing, write_payload,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Schedule a JSON-encoded PlanRequest into a day-by-day \
                 itinerary. Requests without places draw them from a \
                 catalogue when one is given, or fall back to sample \
                 places around the destination.",
    about = "Plan a multi-day itinerary"
)]
#[ortho_config(prefix = "TRIPWEAVE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a PlanRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Place catalogue consulted when the request carries no places.
    #[arg(long = ARG_PLAN_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Destination tables replacing the built-in aliases, profiles and anchors.
    #[arg(long = ARG_PLAN_DESTINATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) destinations: Option<Utf8PathBuf>,
    /// Scheduling policy: `greedy` (default) or `fixed-slot`.
    #[arg(long = ARG_PLAN_POLICY, value_name = "policy")]
    #[serde(default)]
    pub(crate) policy: Option<String>,
    /// Write the itinerary here instead of standard output.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Scheduling policy selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Policy {
    #[default]
    Greedy,
    FixedSlot,
}

impl std::str::FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "fixed-slot" | "fixed_slot" => Ok(Self::FixedSlot),
            _ => Err(format!("unknown policy '{s}' (expected greedy or fixed-slot)")),
        }
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) catalog: Option<Utf8PathBuf>,
    pub(crate) destinations: Option<Utf8PathBuf>,
    pub(crate) policy: Policy,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        if let Some(catalog) = &self.catalog {
            require_existing(catalog, ARG_PLAN_CATALOG)?;
        }
        if let Some(destinations) = &self.destinations {
            require_existing(destinations, ARG_PLAN_DESTINATIONS)?;
        }
        Ok(())
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let policy = args
            .policy
            .as_deref()
            .map(str::parse::<Policy>)
            .transpose()
            .map_err(|reason| CliError::InvalidArgument {
                field: ARG_PLAN_POLICY,
                reason,
            })?
            .unwrap_or_default();
        Ok(Self {
            request_path,
            catalog: args.catalog,
            destinations: args.destinations,
            policy,
            output: args.output,
        })
    }
}

pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let itinerary = execute_plan(&config)?;
    let payload = render_json(&itinerary)?;
    match &config.output {
        Some(path) => {
            tripweave_fs::write_utf8_file(path, &payload).map_err(CliError::WriteOutput)
        }
        None => write_payload(writer, &payload),
    }
}

pub(crate) fn execute_plan(config: &PlanConfig) -> Result<Itinerary, CliError> {
    let mut request: PlanRequest = load_json(&config.request_path, ARG_PLAN_REQUEST)?;
    let destinations = match &config.destinations {
        Some(path) => load_json(path, ARG_PLAN_DESTINATIONS)?,
        None => Destinations::builtin(),
    };
    if request.places.is_empty()
        && let Some(path) = &config.catalog
    {
        let catalog = load_catalog(path)?;
        request.places = catalog.places_or_empty(&request.destination, None);
    }
    log::debug!(
        "planning '{}' for {} day(s) with {} place(s) using {:?}",
        request.destination,
        request.days,
        request.places.len(),
        config.policy
    );

    let planner_config = PlannerConfig::default().with_destinations(destinations);
    let scorer = PreferenceScorer::default();
    let itinerary = match config.policy {
        Policy::Greedy => GreedyPlanner::with_config(scorer, planner_config).plan(request),
        Policy::FixedSlot => {
            FixedSlotPlanner::with_config(scorer, planner_config, default_slots()).plan(request)
        }
    };
    Ok(itinerary)
}

/// Loads a place catalogue, normalising its city keys.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Catalog, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_PLAN_CATALOG,
        path: path.to_path_buf(),
        source,
    })?;
    Catalog::from_json_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field: ARG_PLAN_CATALOG,
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
