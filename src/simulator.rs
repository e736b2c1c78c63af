//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::error::WaiterError;
use crate::error::WaiterErrorCode::TableNotFound;
use crate::table_state_source::TableStateSource;
use crate::types::{TableState, TableStatus};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::trace;

/// In-memory stand-in for a table-management service.
///
/// Answers state queries from a per-table script: each query observes the
/// next entry in the table's scripted sequence, and the final entry repeats
/// for all further queries. This gives demos and tests a
/// [`TableStateSource`] without a running service; it is not a database
/// client and implements nothing beyond the state query.
///
/// Scripts can be extended while waits are in flight, the way a real service
/// would accept a drop request for a table that was just created.
#[derive(Default, Debug)]
pub struct SimulatedTableService {
    tables: Mutex<HashMap<String, TableScript>>,
}

#[derive(Default, Debug)]
struct TableScript {
    steps: Vec<Step>,
    next: usize,
    queries: u64,
}

#[derive(Debug, Clone)]
enum Step {
    State(TableState),
    Fail(WaiterError),
}

impl SimulatedTableService {
    pub fn new() -> SimulatedTableService {
        SimulatedTableService {
            ..Default::default()
        }
    }

    /// Script the states successive queries will observe for `table_name`,
    /// appending to any existing script.
    pub fn script_states(&self, table_name: &str, states: &[TableState]) {
        let mut tables = self.tables.lock().unwrap();
        let script = tables.entry(table_name.to_string()).or_default();
        script.steps.extend(states.iter().map(|s| Step::State(*s)));
    }

    /// Script a query failure: the query that reaches this step returns
    /// `error` instead of a state. Appends to any existing script.
    pub fn script_error(&self, table_name: &str, error: WaiterError) {
        let mut tables = self.tables.lock().unwrap();
        let script = tables.entry(table_name.to_string()).or_default();
        script.steps.push(Step::Fail(error));
    }

    /// Get the number of state queries issued so far against `table_name`.
    pub fn query_count(&self, table_name: &str) -> u64 {
        let tables = self.tables.lock().unwrap();
        match tables.get(table_name) {
            Some(script) => script.queries,
            None => 0,
        }
    }

    fn next_step(&self, table_name: &str) -> Result<Step, WaiterError> {
        let mut tables = self.tables.lock().unwrap();
        let script = match tables.get_mut(table_name) {
            Some(s) => s,
            None => {
                return Err(WaiterError::new(
                    TableNotFound,
                    format!("table {} does not exist", table_name).as_str(),
                ));
            }
        };
        script.queries += 1;
        if script.steps.is_empty() {
            return Err(WaiterError::new(
                TableNotFound,
                format!("table {} has no scripted states", table_name).as_str(),
            ));
        }
        let idx = script.next.min(script.steps.len() - 1);
        if script.next < script.steps.len() {
            script.next += 1;
        }
        Ok(script.steps[idx].clone())
    }
}

impl TableStateSource for SimulatedTableService {
    async fn table_state(&self, table_name: &str) -> Result<TableStatus, WaiterError> {
        let step = self.next_step(table_name)?;
        trace!("simulator: table={} step={:?}", table_name, step);
        match step {
            Step::State(state) => Ok(TableStatus::new(table_name, state)),
            Step::Fail(err) => Err(err),
        }
    }
}
