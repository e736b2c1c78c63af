//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::error::{WaiterError, WaiterErrorCode};
use crate::simulator::SimulatedTableService;
use crate::types::TableState;
use crate::wait_request::{wait_for_state_ms, WaitRequest};
use std::time::Duration;
use tokio::time::Instant;

// These tests all run with a paused tokio clock: sleeps advance virtual time
// instantly, so elapsed times and poll counts are exact.

#[tokio::test(start_paused = true)]
async fn immediate_success_performs_one_query() {
    let svc = SimulatedTableService::new();
    svc.script_states("users", &[TableState::Active]);

    let start = Instant::now();
    let outcome = wait_for_state_ms(&svc, "users", TableState::Active, 5000, 1000)
        .await
        .unwrap();
    assert_eq!(outcome.table_name(), "users");
    assert_eq!(outcome.state(), TableState::Active);
    assert_eq!(outcome.queries(), 1);
    assert_eq!(svc.query_count("users"), 1);
    // no sleeps at all
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn poll_cadence_matches_state_sequence() {
    // target=Active, timeout=5000, poll=1000, sequence [Creating, Creating, Active]:
    // 3 queries with two 1000ms sleeps between them.
    let svc = SimulatedTableService::new();
    svc.script_states(
        "users",
        &[TableState::Creating, TableState::Creating, TableState::Active],
    );

    let outcome = wait_for_state_ms(&svc, "users", TableState::Active, 5000, 1000)
        .await
        .unwrap();
    assert_eq!(outcome.state(), TableState::Active);
    assert_eq!(outcome.queries(), 3);
    assert_eq!(outcome.elapsed(), Duration::from_millis(2000));
    assert_eq!(svc.query_count("users"), 3);
}

#[tokio::test(start_paused = true)]
async fn never_matching_state_times_out() {
    let svc = SimulatedTableService::new();
    svc.script_states("users", &[TableState::Creating]);

    let start = Instant::now();
    let err = wait_for_state_ms(&svc, "users", TableState::Active, 5000, 1000)
        .await
        .unwrap_err();
    assert_eq!(err.code, WaiterErrorCode::RequestTimeout);
    // queries at t=0..5000 inclusive, then the deadline check fires
    assert_eq!(svc.query_count("users"), 6);
    assert_eq!(start.elapsed(), Duration::from_millis(5000));
}

#[tokio::test(start_paused = true)]
async fn zero_timeout_checks_once_without_sleeping() {
    let svc = SimulatedTableService::new();
    svc.script_states("users", &[TableState::Creating]);

    let start = Instant::now();
    let err = wait_for_state_ms(&svc, "users", TableState::Active, 0, 1000)
        .await
        .unwrap_err();
    assert_eq!(err.code, WaiterErrorCode::RequestTimeout);
    assert_eq!(svc.query_count("users"), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn zero_timeout_still_sees_a_matching_state() {
    let svc = SimulatedTableService::new();
    svc.script_states("users", &[TableState::Active]);

    let outcome = wait_for_state_ms(&svc, "users", TableState::Active, 0, 1000)
        .await
        .unwrap();
    assert_eq!(outcome.queries(), 1);
}

#[tokio::test(start_paused = true)]
async fn poll_interval_larger_than_timeout_degenerates_to_one_poll() {
    let svc = SimulatedTableService::new();
    svc.script_states("users", &[TableState::Creating, TableState::Active]);

    // Accepted, not rejected: the initial query plus a single poll.
    let outcome = wait_for_state_ms(&svc, "users", TableState::Active, 500, 1000)
        .await
        .unwrap();
    assert_eq!(outcome.queries(), 2);
    assert_eq!(outcome.elapsed(), Duration::from_millis(1000));

    let svc2 = SimulatedTableService::new();
    svc2.script_states("users", &[TableState::Creating]);
    let err = wait_for_state_ms(&svc2, "users", TableState::Active, 500, 1000)
        .await
        .unwrap_err();
    assert_eq!(err.code, WaiterErrorCode::RequestTimeout);
    assert_eq!(svc2.query_count("users"), 2);
}

#[tokio::test(start_paused = true)]
async fn query_error_propagates_and_stops_polling() {
    let svc = SimulatedTableService::new();
    svc.script_states("users", &[TableState::Creating]);
    svc.script_error(
        "users",
        WaiterError::new(WaiterErrorCode::ServerError, "induced fault"),
    );
    // would match if the wait ever got this far
    svc.script_states("users", &[TableState::Active]);

    let err = wait_for_state_ms(&svc, "users", TableState::Active, 5000, 1000)
        .await
        .unwrap_err();
    assert_eq!(err.code, WaiterErrorCode::ServerError);
    assert_eq!(err.message, "induced fault");
    assert_eq!(svc.query_count("users"), 2);
}

#[tokio::test(start_paused = true)]
async fn dropped_table_fails_fast_when_waiting_for_active() {
    let svc = SimulatedTableService::new();
    svc.script_states("users", &[TableState::Dropped]);

    let start = Instant::now();
    let err = wait_for_state_ms(&svc, "users", TableState::Active, 60000, 1000)
        .await
        .unwrap_err();
    assert_eq!(err.code, WaiterErrorCode::IncompatibleState);
    assert_eq!(svc.query_count("users"), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn fast_fail_can_be_disabled() {
    let svc = SimulatedTableService::new();
    svc.script_states("users", &[TableState::Dropped]);

    // with the short-circuit off, the wait polls out the full budget
    let err = WaitRequest::new("users")
        .target(TableState::Active)
        .timeout(&Duration::from_millis(3000))
        .poll_interval(&Duration::from_millis(1000))
        .fail_on_incompatible_state(false)
        .execute(&svc)
        .await
        .unwrap_err();
    assert_eq!(err.code, WaiterErrorCode::RequestTimeout);
    assert_eq!(svc.query_count("users"), 4);
}

#[tokio::test(start_paused = true)]
async fn in_motion_states_are_never_short_circuited() {
    // Dropping must not trip the fast-fail while waiting for Dropped
    let svc = SimulatedTableService::new();
    svc.script_states("users", &[TableState::Dropping, TableState::Dropped]);
    let outcome = wait_for_state_ms(&svc, "users", TableState::Dropped, 5000, 1000)
        .await
        .unwrap();
    assert_eq!(outcome.queries(), 2);

    // Unknown is treated as possibly still in motion
    let svc2 = SimulatedTableService::new();
    svc2.script_states("users", &[TableState::Unknown, TableState::Active]);
    let outcome2 = wait_for_state_ms(&svc2, "users", TableState::Active, 5000, 1000)
        .await
        .unwrap();
    assert_eq!(outcome2.queries(), 2);
}

#[tokio::test(start_paused = true)]
async fn default_timeout_and_poll_interval_apply() {
    let svc = SimulatedTableService::new();
    svc.script_states("users", &[TableState::Creating, TableState::Active]);

    let outcome = WaitRequest::new("users").execute(&svc).await.unwrap();
    assert_eq!(outcome.state(), TableState::Active);
    assert_eq!(outcome.queries(), 2);
    // one sleep at the default 1s cadence
    assert_eq!(outcome.elapsed(), Duration::from_millis(1000));
}

#[tokio::test]
async fn empty_table_name_is_rejected() {
    let svc = SimulatedTableService::new();
    let err = WaitRequest::new("").execute(&svc).await.unwrap_err();
    assert_eq!(err.code, WaiterErrorCode::IllegalArgument);
}

#[test]
fn table_state_int_mapping() {
    assert_eq!(TableState::from_int(0).unwrap(), TableState::Active);
    assert_eq!(TableState::from_int(3).unwrap(), TableState::Dropping);
    assert_eq!(TableState::from_int(5).unwrap(), TableState::Unknown);
    let err = TableState::from_int(42).unwrap_err();
    assert_eq!(err.code, WaiterErrorCode::BadProtocolMessage);
}

#[test]
fn error_code_int_mapping() {
    let err = WaiterError::from_int(100, "too slow");
    assert_eq!(err.code, WaiterErrorCode::RequestTimeout);
    assert_eq!(err.message, "too slow");
    // out of range codes map to UnknownError
    let err = WaiterError::from_int(9999, "?");
    assert_eq!(err.code, WaiterErrorCode::UnknownError);
}
