//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Table lifecycle state waiter for NoSQL Database table management.
//!
//! Table DDL operations (create, drop, alter) in the NoSQL Database are
//! asynchronous: the administrative request returns as soon as the operation
//! is submitted, and the table then moves through lifecycle states
//! (creating, active, dropping, dropped, ...) on the service's own schedule.
//! Applications must wait for an expected state to know when the operation
//! has completed. This crate implements that wait protocol: one immediate
//! state query, then one query per poll interval until the target state is
//! observed, the wait budget elapses, or the service reports an error.
//!
//! This crate uses Rust `async` methods throughout, using the
//! [tokio](https://crates.io/crates/tokio) runtime. There is currently no
//! blocking support.
//!
//! The general flow for an application:
//! - Implement [`TableStateSource`] for a handle to your table-management
//!   service. The trait has a single operation, a point query for the
//!   current state of one table.
//! - Submit the administrative request through that service's own client.
//! - Build a [`WaitRequest`] (or call [`wait_for_state`] /
//!   [`wait_for_state_ms`]) to block until the table reaches the target
//!   state.
//!
//! The waiter is a pure observer: it never issues administrative requests,
//! never retries a failed state query, and owns no connection state. Errors
//! from the service, a timeout, or an unreachable target state are all
//! returned to the caller as [`WaiterError`] values.
//!
//! ## Simple Example
//! The following code waits for a table to become active, using the bundled
//! [`SimulatedTableService`] in place of a real service:
//! ```
//! use nosql_table_waiter::{wait_for_state_ms, SimulatedTableService, TableState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = SimulatedTableService::new();
//!     service.script_states("users", &[TableState::Creating, TableState::Active]);
//!
//!     let outcome = wait_for_state_ms(&service, "users", TableState::Active, 5000, 50).await?;
//!     println!("table {} is {:?} after {} queries",
//!         outcome.table_name(), outcome.state(), outcome.queries());
//!     Ok(())
//! }
//! ```
//!
//! ## Demos
//!
//! Standalone demo programs are in the `demos` directory: a sequential
//! `quickstart` (create-wait, drop-wait) and a `multi_threaded` program
//! waiting on several tables concurrently. Run them with
//! `cargo run --example quickstart`; set `RUST_LOG=debug` for poll-by-poll
//! output.

pub(crate) mod error;
pub use crate::error::{WaiterError, WaiterErrorCode};

pub(crate) mod simulator;
pub use crate::simulator::SimulatedTableService;

pub(crate) mod table_state_source;
pub use crate::table_state_source::TableStateSource;

pub(crate) mod types;
pub use crate::types::{TableState, TableStatus};

pub(crate) mod wait_request;
pub use crate::wait_request::{wait_for_state, wait_for_state_ms, WaitOutcome, WaitRequest};

#[cfg(test)]
pub(crate) mod wait_tests;
