//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::error::WaiterError;
use crate::types::TableStatus;
use std::future::Future;

/// Capability to query the current lifecycle state of a named table.
///
/// This is the one operation the wait protocol consumes. A production
/// implementation issues a single request to its table-management service
/// per call; [`SimulatedTableService`](crate::SimulatedTableService) answers
/// from an in-memory script instead. Transport, authentication, and any
/// retry policy belong to the implementation: the waiter issues exactly one
/// call per poll and propagates errors to its caller unchanged.
pub trait TableStateSource {
    /// Fetch the current state of the named table.
    fn table_state(
        &self,
        table_name: &str,
    ) -> impl Future<Output = Result<TableStatus, WaiterError>> + Send;
}
