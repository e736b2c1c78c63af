//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::error::WaiterError;
use crate::error::WaiterErrorCode::BadProtocolMessage;

/// The lifecycle state of a table, as tracked by the managing service.
///
/// Transitions between states are driven entirely by the service in response
/// to administrative requests (create, drop, alter). Observers such as
/// [`WaitRequest`](crate::WaitRequest) only ever read this value.
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum TableState {
    // The table is ready to be used. This is the steady state after
    // creation or modification.
    #[default]
    Active = 0,
    // The table is being created and cannot yet be used
    Creating = 1,
    // The table has been dropped or does not exist
    Dropped = 2,
    // The table is being dropped and cannot be used
    Dropping = 3,
    // The table is being updated. It is available for normal use, but
    // additional table modification operations are not permitted
    // while the table is in this state.
    Updating = 4,
    // The service could not determine the table's lifecycle phase
    Unknown = 5,
}

impl TableState {
    pub fn from_int(icode: i32) -> Result<TableState, WaiterError> {
        match icode {
            0 => return Ok(TableState::Active),
            1 => return Ok(TableState::Creating),
            2 => return Ok(TableState::Dropped),
            3 => return Ok(TableState::Dropping),
            4 => return Ok(TableState::Updating),
            5 => return Ok(TableState::Unknown),
            _ => {
                return Err(WaiterError::new(
                    BadProtocolMessage,
                    format!("Invalid TableState {} in result response", icode).as_str(),
                ));
            }
        }
    }

    /// True if no table operation is in progress: the state will not change
    /// until another administrative request is submitted.
    pub fn is_terminal(&self) -> bool {
        *self == TableState::Active || *self == TableState::Dropped
    }

    /// True if a table observed in this state might still transition to `target`.
    ///
    /// Only `Dropped` is a dead end: the table no longer exists, so the
    /// operation that was being waited on cannot move it anywhere else.
    /// Every other state, including `Unknown`, is treated as still in motion.
    pub fn can_reach(&self, target: TableState) -> bool {
        *self == target || *self != TableState::Dropped
    }
}

/// Result of a single table state query: the table identity as resolved by
/// the service, and the lifecycle state observed at query time.
#[derive(Default, Debug, Clone)]
pub struct TableStatus {
    pub(crate) table_name: String,
    pub(crate) state: TableState,
}

impl TableStatus {
    pub fn new(table_name: &str, state: TableState) -> TableStatus {
        TableStatus {
            table_name: table_name.to_string(),
            state: state,
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> String {
        self.table_name.clone()
    }
    /// Get the observed state of the table.
    pub fn state(&self) -> TableState {
        self.state
    }
}
