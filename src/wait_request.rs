//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::error::WaiterErrorCode::{IncompatibleState, RequestTimeout};
use crate::error::{ia_err, WaiterError};
use crate::table_state_source::TableStateSource;
use crate::types::TableState;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::debug;

// Wait budget and poll cadence used when the caller does not set them.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub(crate) const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Struct used for waiting until a table reaches a target lifecycle state.
///
/// Table DDL operations are asynchronous: the administrative request returns
/// once the operation is submitted, and the table then moves through
/// lifecycle states on its own schedule. After submitting such a request,
/// use a WaitRequest to block until the table reaches the expected state.
///
/// The wait polls the given [`TableStateSource`]: one immediate state query,
/// then one query per poll interval until the target state is observed, the
/// timeout elapses, or the source returns an error. The waiter never retries
/// a failed query and never issues administrative requests of its own.
///
/// Example:
/// ```
/// use nosql_table_waiter::{SimulatedTableService, TableState, WaitRequest};
/// use std::time::Duration;
/// # #[tokio::main]
/// # pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let service = SimulatedTableService::new();
/// # service.script_states("testusers", &[TableState::Creating, TableState::Active]);
///     // A create-table request for "testusers" has already been submitted
///     // through the service's own client. Wait up to 15 seconds for the
///     // table to become active, polling every 50 milliseconds.
///     let outcome = WaitRequest::new("testusers")
///         .target(TableState::Active)
///         .timeout(&Duration::from_secs(15))
///         .poll_interval(&Duration::from_millis(50))
///         .execute(&service)
///         .await?;
///     assert_eq!(outcome.state(), TableState::Active);
/// # Ok(())
/// # }
///```
#[derive(Debug, Clone)]
pub struct WaitRequest {
    pub(crate) table_name: String,
    pub(crate) target: TableState,
    pub(crate) timeout: Option<Duration>,
    pub(crate) poll_interval: Option<Duration>,
    pub(crate) fail_on_incompatible_state: bool,
}

/// Struct representing the successful result of a [`WaitRequest`].
#[derive(Default, Debug, Clone)]
pub struct WaitOutcome {
    pub(crate) table_name: String,
    pub(crate) state: TableState,
    pub(crate) queries: u32,
    pub(crate) elapsed: Duration,
}

impl WaitRequest {
    /// Create a new WaitRequest.
    ///
    /// `table_name` is required and must be non-empty. The target state
    /// defaults to [`TableState::Active`].
    pub fn new(table_name: &str) -> WaitRequest {
        WaitRequest {
            table_name: table_name.to_string(),
            target: TableState::Active,
            timeout: None,
            poll_interval: None,
            fail_on_incompatible_state: true,
        }
    }

    /// Set the table state to wait for.
    pub fn target(mut self, state: TableState) -> Self {
        self.target = state;
        self
    }

    /// Specify the total wait budget for the request.
    ///
    /// This is optional. If not set, a default of 30 seconds is used.
    ///
    /// A zero timeout is valid: the wait performs exactly one immediate
    /// state query and resolves on its result.
    pub fn timeout(mut self, t: &Duration) -> Self {
        self.timeout = Some(t.clone());
        self
    }

    /// Specify the delay between successive state queries.
    ///
    /// This is optional. If not set, a default of 1 second is used.
    ///
    /// A poll interval larger than the timeout is accepted; the wait then
    /// degenerates to the initial query plus at most one poll.
    pub fn poll_interval(mut self, d: &Duration) -> Self {
        self.poll_interval = Some(d.clone());
        self
    }

    /// Control fast failure on incompatible terminal states.
    ///
    /// When enabled (the default), observing a table in a state that can
    /// never transition to the target, such as [`TableState::Dropped`] while
    /// waiting for [`TableState::Active`], fails the wait immediately with
    /// an `IncompatibleState` error instead of polling out the full timeout.
    /// States that might still be in motion are never short-circuited.
    pub fn fail_on_incompatible_state(mut self, enabled: bool) -> Self {
        self.fail_on_incompatible_state = enabled;
        self
    }

    /// Execute the wait against the given state source.
    ///
    /// This method will loop, polling the source for the current table state
    /// until it matches the target, the timeout elapses, or the source
    /// returns an error. Query errors are propagated verbatim; retrying them
    /// is the source's (or the caller's) responsibility.
    pub async fn execute<S: TableStateSource>(
        &self,
        source: &S,
    ) -> Result<WaitOutcome, WaiterError> {
        if self.table_name.is_empty() {
            return ia_err!("table name must be non-empty");
        }
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let poll_interval = self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL);

        let start_time = Instant::now();
        let mut queries: u32 = 0;

        loop {
            // The first query is dispatched with no initial sleep, so a
            // table already in the target state resolves immediately.
            let status = source.table_state(self.table_name.as_str()).await?;
            queries += 1;
            debug!(
                "wait-request: table={} state={:?} target={:?} elapsed={:?}",
                status.table_name,
                status.state,
                self.target,
                start_time.elapsed()
            );

            if status.state == self.target {
                return Ok(WaitOutcome {
                    table_name: status.table_name,
                    state: status.state,
                    queries: queries,
                    elapsed: start_time.elapsed(),
                });
            }

            if self.fail_on_incompatible_state && !status.state.can_reach(self.target) {
                return Err(WaiterError::new(
                    IncompatibleState,
                    format!(
                        "table {} is {:?} and can no longer reach {:?}",
                        status.table_name, status.state, self.target
                    )
                    .as_str(),
                ));
            }

            // The deadline check happens before the next dispatch, not after
            // it: a zero timeout performs exactly the one query above.
            if start_time.elapsed() >= timeout {
                return Err(WaiterError::new(
                    RequestTimeout,
                    "table did not reach the target state in the expected time",
                ));
            }

            sleep(poll_interval).await;
        }
    }
}

impl WaitOutcome {
    /// Get the table name as resolved by the service.
    pub fn table_name(&self) -> String {
        self.table_name.clone()
    }
    /// Get the final observed table state. This always equals the requested
    /// target state.
    pub fn state(&self) -> TableState {
        self.state
    }
    /// Get the number of state queries issued, including the initial check.
    pub fn queries(&self) -> u32 {
        self.queries
    }
    /// Get the wall-clock time spent waiting.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Wait for a table to reach a target lifecycle state.
///
/// Convenience wrapper over [`WaitRequest`] for the common case: the prior
/// administrative request is already submitted, and the caller wants to
/// block until `table_name` reaches `target`.
pub async fn wait_for_state<S: TableStateSource>(
    source: &S,
    table_name: &str,
    target: TableState,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<WaitOutcome, WaiterError> {
    WaitRequest::new(table_name)
        .target(target)
        .timeout(&timeout)
        .poll_interval(&poll_interval)
        .execute(source)
        .await
}

/// Wait for a table to reach a target lifecycle state.
///
/// This is a convenience method to allow direct millisecond values instead
/// of creating `Duration` structs.
pub async fn wait_for_state_ms<S: TableStateSource>(
    source: &S,
    table_name: &str,
    target: TableState,
    timeout_ms: u64,
    poll_ms: u64,
) -> Result<WaitOutcome, WaiterError> {
    wait_for_state(
        source,
        table_name,
        target,
        Duration::from_millis(timeout_ms),
        Duration::from_millis(poll_ms),
    )
    .await
}
