//! Exit codes for CLI commands.
//!
//! The HTTP status of the single request a command makes decides the exit
//! code, so scripts can branch on it without parsing output.

use crate::error::ClientError;

/// Success - the server answered 2xx.
pub const SUCCESS: i32 = 0;

/// Usage error - bad arguments, unsendable request, missing key or unreadable photo, or 400.
pub const USAGE: i32 = 2;

/// Not found - the server answered 404.
pub const NOT_FOUND: i32 = 3;

/// Network error - the request never got an answer.
pub const NETWORK: i32 = 4;

/// Authentication error - 401 or 403, usually a bad key or credentials.
pub const AUTH: i32 = 5;

/// Server error - the server answered 5xx.
pub const SERVER: i32 = 6;

/// Internal error - anything else.
pub const INTERNAL: i32 = 7;

/// Map an HTTP status to an exit code.
pub fn from_status(status: u16) -> i32 {
    match status {
        200..=299 => SUCCESS,
        400 => USAGE,
        401 | 403 => AUTH,
        404 => NOT_FOUND,
        500..=599 => SERVER,
        _ => INTERNAL,
    }
}

/// Convert an anyhow::Error to an appropriate exit code.
pub fn from_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ClientError>() {
        Some(ClientError::Network(_)) => NETWORK,
        Some(
            ClientError::InvalidRequest(_)
            | ClientError::PhotoRead { .. }
            | ClientError::MissingSetting(_)
            | ClientError::ConfigRead(_)
            | ClientError::ConfigParse(_),
        ) => USAGE,
        _ => INTERNAL,
    }
}
