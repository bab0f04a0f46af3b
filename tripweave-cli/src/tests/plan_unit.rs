//! Focused unit tests covering plan CLI configuration and execution.

use super::helpers::Workspace;
use camino::Utf8PathBuf;
use crate::plan::{
    PlanArgs, PlanConfig, Policy, config_from_layers_for_test, execute_plan, run_plan_with,
};
use crate::*;
use rstest::rstest;
use serde_json::{Value, json};

fn config_for(request_path: Utf8PathBuf) -> PlanConfig {
    PlanConfig {
        request_path,
        catalog: None,
        destinations: None,
        policy: Policy::Greedy,
        output: None,
    }
}

fn place_ids(itinerary: &tripweave_core::Itinerary) -> Vec<String> {
    itinerary.place_ids().map(str::to_owned).collect()
}

#[rstest]
fn converting_without_request_errors() {
    let err = PlanConfig::try_from(PlanArgs::default())
        .err()
        .unwrap_or_else(|| panic!("missing request should error"));
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(env, ENV_PLAN_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(None, Policy::Greedy)]
#[case(Some("greedy"), Policy::Greedy)]
#[case(Some("Fixed-Slot"), Policy::FixedSlot)]
#[case(Some("fixed_slot"), Policy::FixedSlot)]
fn policy_names_are_parsed(#[case] name: Option<&str>, #[case] expected: Policy) {
    let args = PlanArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        policy: name.map(str::to_owned),
        ..PlanArgs::default()
    };
    let config =
        PlanConfig::try_from(args).unwrap_or_else(|err| panic!("config should build: {err}"));
    assert_eq!(config.policy, expected);
}

#[rstest]
fn unknown_policy_is_rejected() {
    let args = PlanArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        policy: Some("random".to_owned()),
        ..PlanArgs::default()
    };
    match PlanConfig::try_from(args) {
        Err(CliError::InvalidArgument { field, reason }) => {
            assert_eq!(field, ARG_PLAN_POLICY);
            assert!(reason.contains("random"));
        }
        other => panic!("expected InvalidArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_catalog() {
    let workspace = Workspace::new();
    let request = workspace.json("request.json", &json!({ "destination": "Tokyo", "days": 1 }));
    let config = PlanConfig {
        catalog: Some(workspace.path("catalog.json")),
        ..config_for(request)
    };

    match config.validate_sources() {
        Err(CliError::MissingSourceFile { field, .. }) => assert_eq!(field, ARG_PLAN_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    std::fs::create_dir(&request_path).unwrap_or_else(|err| panic!("mkdir: {err}"));

    match config_for(request_path.clone()).validate_sources() {
        Err(CliError::SourcePathNotFile { field, path }) => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn empty_request_is_planned_from_samples() {
    let workspace = Workspace::new();
    let request = workspace.json("request.json", &json!({ "destination": "도쿄", "days": 2 }));

    let itinerary = execute_plan(&config_for(request))
        .unwrap_or_else(|err| panic!("plan should succeed: {err}"));

    assert_eq!(itinerary.len(), 1);
    assert_eq!(
        place_ids(&itinerary),
        ["tokyo-sample-2", "tokyo-sample-1", "tokyo-sample-3"]
    );
}

#[rstest]
fn catalog_supplies_places_for_empty_requests() {
    let workspace = Workspace::new();
    let request = workspace.json("request.json", &json!({ "destination": "Tokyo", "days": 1 }));
    let catalog = workspace.json(
        "catalog.json",
        &json!({
            "cities": {
                "Tokyo": [{
                    "id": "sensoji",
                    "name": "Senso-ji",
                    "category": "attraction",
                    "rating": 4.6,
                    "reviewCount": 3000,
                    "position": { "lat": 35.7148, "lng": 139.7967 }
                }, {
                    "id": "ueno",
                    "name": "Ueno Park",
                    "category": "nature",
                    "rating": 4.4,
                    "reviewCount": 1500,
                    "position": { "lat": 35.7156, "lng": 139.7745 }
                }]
            }
        }),
    );
    let config = PlanConfig {
        catalog: Some(catalog),
        ..config_for(request)
    };

    let itinerary =
        execute_plan(&config).unwrap_or_else(|err| panic!("plan should succeed: {err}"));
    assert_eq!(place_ids(&itinerary), ["sensoji", "ueno"]);
}

#[rstest]
fn catalog_without_the_destination_degrades_to_samples() {
    let workspace = Workspace::new();
    let request = workspace.json("request.json", &json!({ "destination": "Paris", "days": 1 }));
    let catalog = workspace.json("catalog.json", &json!({ "cities": { "tokyo": [] } }));
    let config = PlanConfig {
        catalog: Some(catalog),
        ..config_for(request)
    };

    let itinerary =
        execute_plan(&config).unwrap_or_else(|err| panic!("plan should succeed: {err}"));
    assert!(
        place_ids(&itinerary)
            .iter()
            .all(|id| id.starts_with("paris-sample-"))
    );
}

#[rstest]
fn fixed_slot_policy_starts_at_nine() {
    let workspace = Workspace::new();
    let request = workspace.json("request.json", &json!({ "destination": "Tokyo", "days": 1 }));
    let config = PlanConfig {
        policy: Policy::FixedSlot,
        ..config_for(request)
    };

    let itinerary =
        execute_plan(&config).unwrap_or_else(|err| panic!("plan should succeed: {err}"));
    let first = itinerary
        .days()
        .first()
        .and_then(|day| day.items.first())
        .unwrap_or_else(|| panic!("an item should be planned"));
    assert_eq!(first.start_time.to_string(), "09:00");
}

#[rstest]
fn malformed_destinations_report_parse_errors() {
    let workspace = Workspace::new();
    let request = workspace.json("request.json", &json!({ "destination": "Tokyo", "days": 1 }));
    let destinations = workspace.path("destinations.json");
    super::helpers::write_utf8(&destinations, b"{ not json");
    let config = PlanConfig {
        destinations: Some(destinations.clone()),
        ..config_for(request)
    };

    match execute_plan(&config) {
        Err(CliError::ParseInput { field, path, .. }) => {
            assert_eq!(field, ARG_PLAN_DESTINATIONS);
            assert_eq!(path, destinations);
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn run_plan_writes_json_to_the_writer_or_output_file() {
    let workspace = Workspace::new();
    let request = workspace.json("request.json", &json!({ "destination": "Osaka", "days": 1 }));

    let mut stdout = Vec::new();
    let args = PlanArgs {
        request_path: Some(request.clone()),
        ..PlanArgs::default()
    };
    run_plan_with(args, &mut stdout).unwrap_or_else(|err| panic!("plan should succeed: {err}"));
    let printed: Value =
        serde_json::from_slice(&stdout).unwrap_or_else(|err| panic!("stdout is JSON: {err}"));
    assert_eq!(printed.pointer("/0/day"), Some(&json!(1)));
    assert_eq!(printed.pointer("/0/items/0/startTime"), Some(&json!("08:30")));

    let output = workspace.path("out/osaka.json");
    let mut untouched = Vec::new();
    let args = PlanArgs {
        request_path: Some(request),
        output: Some(output.clone()),
        ..PlanArgs::default()
    };
    run_plan_with(args, &mut untouched).unwrap_or_else(|err| panic!("plan should succeed: {err}"));
    assert!(untouched.is_empty());
    let written = std::fs::read(&output).unwrap_or_else(|err| panic!("read output: {err}"));
    assert_eq!(written, stdout);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    match config_from_layers_for_test(composer.layers()) {
        Err(CliError::Configuration(_)) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;

    let workspace = Workspace::new();
    let env_request = workspace.path("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "policy": "fixed-slot",
            "catalog": workspace.path("from-file-catalog.json").as_str(),
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "policy": "fixed-slot",
    }));
    composer.push_cli(json!({ "policy": "greedy" }));

    let config = config_from_layers_for_test(composer.layers())
        .unwrap_or_else(|err| panic!("merged config should build: {err}"));
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.policy, Policy::Greedy);
    assert_eq!(
        config.catalog,
        Some(workspace.path("from-file-catalog.json"))
    );
}
