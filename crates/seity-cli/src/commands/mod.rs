//! Command handlers.
//!
//! Each handler returns a process exit code.

pub mod config;
pub mod run;

use seity_core::SeityError;

/// Successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Runtime failure (I/O while exporting, etc.).
pub const EXIT_GENERAL_ERROR: i32 = 1;
/// Rejected flags, parameters or configuration.
pub const EXIT_INVALID_INPUT: i32 = 4;

/// Map an error chain to an exit code.
pub fn exit_code_for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SeityError>() {
        Some(e) if e.is_invalid_input() => EXIT_INVALID_INPUT,
        _ => EXIT_GENERAL_ERROR,
    }
}
