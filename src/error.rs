//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use num_enum::TryFromPrimitive;

include!(concat!(env!("OUT_DIR"), "/version.rs"));

pub(crate) fn sdk_version() -> &'static str {
    SDK_VERSION
}

/// Enumeration of all possible errors returned by this library.
#[derive(Debug, Clone)]
pub struct WaiterError {
    pub code: WaiterErrorCode,
    pub message: String,
}

impl std::error::Error for WaiterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl std::fmt::Display for WaiterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        return write!(f, "code={:?} message=\"{}\"", self.code, self.message);
    }
}

impl WaiterError {
    pub fn new(code: WaiterErrorCode, msg: &str) -> WaiterError {
        WaiterError {
            code,
            message: msg.to_string(),
        }
    }

    pub fn from_int(icode: i32, msg: &str) -> WaiterError {
        if let Ok(code) = WaiterErrorCode::try_from(icode) {
            return WaiterError {
                code: code,
                message: msg.to_string(),
            };
        }
        WaiterError {
            code: WaiterErrorCode::UnknownError,
            message: format!("Invalid integer error code {}", icode),
        }
    }
}

macro_rules! ia_err {
    ($($t:tt)*) => {{
        let m = format!($($t)*);
        Err(crate::error::WaiterError {
            code: crate::error::WaiterErrorCode::IllegalArgument,
            message: format!("{} ({})", m, crate::error::sdk_version()),
        })
    }};
}

pub(crate) use ia_err;

// WaiterErrorCode represents the error code.
// Error codes are divided into categories as follows:
//
// 1. Error codes for user-generated errors, range from 1 to 50(exclusive).
// These include illegal arguments, resource not found, etc.
//
// 2. Error codes for server issues, begin from 100.
// These include timeouts, temporary service problems, and unknown
// server errors. They might be retryable by the caller, or not.
//
#[derive(Debug, Clone, Copy, Eq, PartialEq, TryFromPrimitive)]
#[repr(i32)]
pub enum WaiterErrorCode {
    /// NoError represents there is no error.
    NoError = 0,

    /// TableNotFound error represents the operation attempted to access a table
    /// that does not exist or is not in a visible state.
    TableNotFound = 2,

    /// IllegalArgument error represents the application provided an illegal
    /// argument for the operation.
    IllegalArgument = 4,

    /// BadProtocolMessage error represents there is an error in the data
    /// exchanged with the service, such as an out of range table state value.
    BadProtocolMessage = 17,

    /// IncompatibleState error represents a wait that can never succeed: the
    /// table was observed in a terminal state from which the requested target
    /// state is unreachable (for example, fully dropped while waiting for
    /// active). Returned instead of polling out the full wait budget.
    IncompatibleState = 25,

    /// RequestTimeout error represents the table did not reach the requested
    /// state before the wait budget elapsed. The caller may retry the wait
    /// with a larger budget.
    RequestTimeout = 100,

    /// ServerError represents there is an internal system problem.
    /// Most system problems are temporary.
    ServerError = 101,

    /// ServiceUnavailable error represents the requested service is currently
    /// unavailable. This is usually a temporary error.
    ServiceUnavailable = 102,

    /// TableBusy error represents the table is in use or busy.
    /// Note that only one modification operation at a time is allowed on a table.
    TableBusy = 103,

    /// UnknownError represents an unknown error has occurred on the server.
    UnknownError = 125,
}
