//! CLI tests: argument handling, rendering and exit codes

use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::common::fixtures::{collection_json, route_json, trip_json, vehicle_json};
use crate::common::server::MockServer;

/// Helper to create a transit-live command isolated from the user's config
fn transit_live(config_home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("transit-live"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env("NO_COLOR", "1");
    cmd
}

fn transit_server() -> MockServer {
    let vehicles = collection_json(
        vec![
            vehicle_json("y1", "1801", "Red", "T1"),
            vehicle_json("y2", "1802", "Red", "T2"),
        ],
        None,
    );
    let detail = json!({"data": vehicle_json("y1", "1801", "Red", "T1")}).to_string();
    MockServer::start(vec![
        ("/vehicles", 200, vehicles),
        ("/vehicles/y1", 200, detail),
        ("/routes", 200, collection_json(vec![route_json("Red", "Red Line")], None)),
        ("/trips", 200, collection_json(vec![trip_json("T1", "Alewife")], None)),
    ])
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    transit_live(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("transit-live"));
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    transit_live(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vehicles"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("filters"));
}

#[test]
fn test_no_command_prints_hint() {
    let home = TempDir::new().unwrap();
    transit_live(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("transit-live --help"));
}

#[test]
fn test_show_requires_an_id() {
    let home = TempDir::new().unwrap();
    transit_live(&home).arg("show").assert().failure();
}

// =============================================================================
// VEHICLES
// =============================================================================

#[test]
fn test_vehicles_lists_records() {
    let home = TempDir::new().unwrap();
    let server = transit_server();

    transit_live(&home)
        .args(["vehicles", "--base-url", server.base_url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter (0 routes, 0 trips)"))
        .stdout(predicate::str::contains("1801"))
        .stdout(predicate::str::contains("STOPPED_AT"))
        .stdout(predicate::str::contains("2 vehicle(s) loaded"));
}

#[test]
fn test_vehicles_sends_route_filter() {
    let home = TempDir::new().unwrap();
    let server = transit_server();

    transit_live(&home)
        .args(["vehicles", "--route", "Red,Blue", "--base-url", server.base_url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter (2 routes, 0 trips)"));

    let request = &server.requests_to("/vehicles")[0];
    assert_eq!(request.query_param("filter[route]").as_deref(), Some("Red,Blue"));
    assert_eq!(request.query_param("filter[trip]"), None);
}

#[test]
fn test_vehicles_json_output() {
    let home = TempDir::new().unwrap();
    let server = transit_server();

    let output = transit_live(&home)
        .args(["--json", "vehicles", "--base-url", server.base_url()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vehicles"].as_array().unwrap().len(), 2);
    assert_eq!(json["has_more"], false);
    assert_eq!(json["vehicles"][0]["route_id"], "Red");
}

#[test]
fn test_vehicles_failure_exits_nonzero() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start(vec![("/vehicles", 503, "unavailable".to_string())]);

    transit_live(&home)
        .args(["vehicles", "--base-url", server.base_url()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to fetch vehicle data."));
}

#[test]
fn test_vehicles_no_matches() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start(vec![("/vehicles", 200, collection_json(vec![], None))]);

    transit_live(&home)
        .args(["vehicles", "-r", "Nowhere", "--base-url", server.base_url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vehicles found with this filter."));
}

// =============================================================================
// SHOW AND FILTERS
// =============================================================================

#[test]
fn test_show_resolves_route_and_trip() {
    let home = TempDir::new().unwrap();
    let server = transit_server();

    transit_live(&home)
        .args(["show", "y1", "--base-url", server.base_url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Red Line"))
        .stdout(predicate::str::contains("Alewife"));
}

#[test]
fn test_show_unknown_vehicle_fails() {
    let home = TempDir::new().unwrap();
    let server = transit_server();

    transit_live(&home)
        .args(["show", "nope", "--base-url", server.base_url()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to fetch vehicle detail."));
}

#[test]
fn test_filters_lists_routes_and_trips() {
    let home = TempDir::new().unwrap();
    let server = transit_server();

    transit_live(&home)
        .args(["filters", "--base-url", server.base_url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Red Line (Red)"))
        .stdout(predicate::str::contains("Alewife (T1)"));
}

#[test]
fn test_config_file_base_url_is_used() {
    let home = TempDir::new().unwrap();
    let server = transit_server();
    let config_dir = home.path().join("transit-live");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("base_url = \"{}\"\n", server.base_url()),
    )
    .unwrap();

    transit_live(&home)
        .arg("vehicles")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 vehicle(s) loaded"));
}
