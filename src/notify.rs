//! User-facing error flags, the console stand-in for the host platform's
//! transient notification banners.

#![deny(clippy::all, clippy::pedantic)]

use crate::client::CliError;

pub const OPERATION_FAILED_TITLE: &str = "Operation failed";

/// Render the flag text for a failed operation.
#[must_use]
pub fn render(err: &CliError) -> String {
    format!("{OPERATION_FAILED_TITLE}: {err}")
}

/// Emit an error flag without aborting the surrounding loop.
pub fn error_flag(err: &CliError) {
    eprintln!("{}", render(err));
}
