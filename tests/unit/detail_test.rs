//! Tests for vehicle detail resolution

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Barrier, Notify};
use tokio::time::timeout;
use transit_live::api::ApiError;
use transit_live::core::models::PIN_DELTA;
use transit_live::core::services::{
    DetailController, DetailState, ROUTE_NOT_FOUND, TRIP_NOT_FOUND, resolve_detail,
};

use crate::common::fixtures::{route, trip, vehicle};
use crate::common::mocks::MockTransitApi;

fn red_line() -> MockTransitApi {
    MockTransitApi::new()
        .with_routes(vec![route("Red", "Red Line"), route("Blue", "Blue Line")])
        .with_trips("Red", vec![trip("T1", "Alewife"), trip("T2", "Ashmont")])
        .with_detail(vehicle("y1", "Red", "T2"))
}

#[tokio::test]
async fn test_resolves_route_name_and_headsign() {
    let api = red_line();

    let detail = resolve_detail(&api, "y1").await.unwrap();

    assert_eq!(detail.vehicle.id, "y1");
    assert_eq!(detail.route_name, "Red Line");
    assert_eq!(detail.trip_headsign, "Ashmont");

    let pin = detail.map_pin().unwrap();
    assert_eq!(pin.latitude_delta, PIN_DELTA);
    assert_eq!(pin.title, "L-y1");
    assert_eq!(pin.description, "IN_TRANSIT_TO");
}

#[tokio::test]
async fn test_route_and_trip_are_fetched_together() {
    // Neither lookup answers until the other one has been issued.
    let barrier = Arc::new(Barrier::new(2));
    let api = red_line().route_barrier(barrier.clone()).trip_barrier(barrier);

    let detail = timeout(Duration::from_secs(5), resolve_detail(&api, "y1"))
        .await
        .expect("route and trip were fetched one after the other")
        .unwrap();

    assert_eq!(detail.route_name, "Red Line");
    assert_eq!(detail.trip_headsign, "Ashmont");
}

#[tokio::test]
async fn test_missing_route_and_trip_use_placeholders() {
    let api = MockTransitApi::new().with_detail(vehicle("y2", "Silver", "T9"));

    let detail = resolve_detail(&api, "y2").await.unwrap();

    assert_eq!(detail.route_name, ROUTE_NOT_FOUND);
    assert_eq!(detail.trip_headsign, TRIP_NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_vehicle_fails_with_detail_error() {
    let api = red_line();

    let err = resolve_detail(&api, "nope").await.unwrap_err();

    assert_eq!(err, ApiError::vehicle_detail());
    assert_eq!(err.message(), "Failed to fetch vehicle detail.");
}

#[tokio::test]
async fn test_failed_trip_lookup_fails_the_whole_detail() {
    let api = red_line().failing_trip_lookup();

    let err = resolve_detail(&api, "y1").await.unwrap_err();

    assert_eq!(err, ApiError::trips());
}

#[tokio::test]
async fn test_failed_route_lookup_fails_the_whole_detail() {
    let api = red_line().failing_routes();

    let err = resolve_detail(&api, "y1").await.unwrap_err();

    assert_eq!(err, ApiError::routes());
}

// =============================================================================
// CONTROLLER
// =============================================================================

#[tokio::test]
async fn test_controller_moves_from_idle_to_ready() {
    let controller = DetailController::new(red_line());
    assert_eq!(controller.snapshot(), DetailState::Idle);

    assert!(controller.open("y1").await);

    match controller.snapshot() {
        DetailState::Ready { detail } => assert_eq!(detail.trip_headsign, "Ashmont"),
        other => panic!("expected ready state, got {other:?}"),
    }
}

#[tokio::test]
async fn test_controller_failure_is_terminal_until_next_open() {
    let controller = DetailController::new(red_line());

    controller.open("missing").await;
    assert_eq!(
        controller.snapshot(),
        DetailState::Failed {
            message: "Failed to fetch vehicle detail.".to_string()
        }
    );

    controller.open("y1").await;
    assert!(matches!(controller.snapshot(), DetailState::Ready { .. }));
}

#[tokio::test]
async fn test_controller_drops_superseded_lookup() {
    let gate = Arc::new(Notify::new());
    let api = red_line()
        .with_detail(vehicle("slow", "Blue", "T1"))
        .gated_detail("slow", Arc::clone(&gate));
    let controller = DetailController::new(api);

    let (slow_applied, fast_applied) = tokio::join!(controller.open("slow"), async {
        while !matches!(controller.snapshot(), DetailState::Loading { .. }) {
            tokio::task::yield_now().await;
        }
        let applied = controller.open("y1").await;
        gate.notify_one();
        applied
    });

    assert!(!slow_applied);
    assert!(fast_applied);
    match controller.snapshot() {
        DetailState::Ready { detail } => assert_eq!(detail.vehicle.id, "y1"),
        other => panic!("expected ready state, got {other:?}"),
    }
}
