//! Exit code constants for the devstd CLI.
//!
//! The process exit code is the sole machine-readable success signal:
//! - 0: Success
//! - 1: Any failure (bad input, standard deviations, strict warnings,
//!   missing files, or write errors)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Failed execution: bad arguments, conformance errors, strict-mode
/// warnings, missing input files, or output write failures.
pub const FAILURE: i32 = 1;
