//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//

// This is an example program showing the table-state wait protocol. It
// scripts the lifecycle a table-management service would drive in response
// to a create and then a drop request, waits for each target state, and
// prints the outcomes.

// To run this example:
//    cargo run --example quickstart
//
// for poll-by-poll output:
//    RUST_LOG=debug cargo run --example quickstart

use nosql_table_waiter::wait_for_state_ms;
use nosql_table_waiter::SimulatedTableService;
use nosql_table_waiter::TableState;
use std::error::Error;
use tracing::info;

// Explicit program configuration. All settings live here; there are no
// process-wide mutable defaults.
#[derive(Debug)]
struct Config {
    table_name: String,
    wait_ms: u64,
    poll_ms: u64,
}

fn usage() -> ! {
    eprintln!(
        "Usage: quickstart\n\
         -table <name> (default: testusers)\n\
         -waitMs <ms> (default: 15000)\n\
         -pollMs <ms> (default: 500)"
    );
    std::process::exit(1);
}

fn parse_args() -> Config {
    let mut config = Config {
        table_name: "testusers".to_string(),
        wait_ms: 15000,
        poll_ms: 500,
    };
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() % 2 != 0 {
        usage();
    }
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-table" => config.table_name = args[i + 1].clone(),
            "-waitMs" => config.wait_ms = args[i + 1].parse().unwrap_or_else(|_| usage()),
            "-pollMs" => config.poll_ms = args[i + 1].parse().unwrap_or_else(|_| usage()),
            _ => usage(),
        }
        i += 2;
    }
    config
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Set up a tracing subscriber to see output based on RUST_LOG environment setting
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .compact()
        .init();

    let config = parse_args();
    info!("quickstart config: {:?}", config);

    // Stand-in for a running table-management service. A real application
    // would implement TableStateSource over its service client instead.
    let service = SimulatedTableService::new();

    // A create-table request has been submitted: the service reports the
    // table creating for a couple of polls, then active.
    service.script_states(
        &config.table_name,
        &[TableState::Creating, TableState::Creating, TableState::Active],
    );
    let created = wait_for_state_ms(
        &service,
        &config.table_name,
        TableState::Active,
        config.wait_ms,
        config.poll_ms,
    )
    .await?;
    println!(
        "table created: name={} state={:?} queries={} elapsed={:?}",
        created.table_name(),
        created.state(),
        created.queries(),
        created.elapsed()
    );

    // Now a drop request has been submitted.
    service.script_states(
        &config.table_name,
        &[TableState::Dropping, TableState::Dropped],
    );
    let dropped = wait_for_state_ms(
        &service,
        &config.table_name,
        TableState::Dropped,
        config.wait_ms,
        config.poll_ms,
    )
    .await?;
    println!(
        "table dropped: name={} state={:?} queries={} elapsed={:?}",
        dropped.table_name(),
        dropped.state(),
        dropped.queries(),
        dropped.elapsed()
    );

    Ok(())
}
