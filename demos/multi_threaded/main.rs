//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//

// This is an example program showing independent table-state waits running
// concurrently across tokio tasks. Each wait owns its own start time,
// deadline, and poll cadence; the only shared resource is the service.

// To run this example:
//    cargo run --example multi_threaded
//
// for poll-by-poll output:
//    RUST_LOG=debug cargo run --example multi_threaded

// Parameters for runtime execution
// Number of tables to create and wait on
const TABLE_COUNT: u32 = 4;
// Per-wait budget and poll cadence
const WAIT_MS: u64 = 15000;
const POLL_MS: u64 = 200;

use nosql_table_waiter::wait_for_state_ms;
use nosql_table_waiter::SimulatedTableService;
use nosql_table_waiter::TableState;
use std::error::Error;
use std::sync::Arc;
use tracing::info;

// Example way to use multiple threaded tokio runtime
#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> Result<(), Box<dyn Error>> {
    // Set up a tracing subscriber to see output based on RUST_LOG environment setting
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .compact()
        .init();

    // One service shared across all tasks.
    let service = Arc::new(SimulatedTableService::new());

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..TABLE_COUNT {
        let table_name = format!("test_multi_{}", i);

        // Each table takes a different number of polls to come up.
        let mut states = vec![TableState::Creating; i as usize];
        states.push(TableState::Active);
        service.script_states(&table_name, &states);

        tasks.spawn({
            let svc = service.clone();
            async move {
                match wait_for_state_ms(&*svc, &table_name, TableState::Active, WAIT_MS, POLL_MS)
                    .await
                {
                    Ok(outcome) => {
                        info!(
                            "table {} active after {} queries ({:?})",
                            outcome.table_name(),
                            outcome.queries(),
                            outcome.elapsed()
                        );
                        return 0;
                    }
                    Err(e) => {
                        info!("wait for {} returned error: {}", table_name, e.to_string());
                        return 1;
                    }
                }
            }
        });
    }

    let mut failures = 0;
    while let Some(res) = tasks.join_next().await {
        failures += res?;
    }
    if failures > 0 {
        return Err(format!("{} waits failed", failures).into());
    }
    println!("all {} tables reached {:?}", TABLE_COUNT, TableState::Active);

    Ok(())
}
