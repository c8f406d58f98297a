//! User-facing pipeline failures.

use thiserror::Error;

/// Conditions reported as `ERROR: …` on stderr with exit code 2.
///
/// Everything else (network faults, unreadable files) propagates through
/// `anyhow` and exits non-zero with the full error chain.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No push fragment yielded an object carrying both skill collections.
    #[error("Could not locate skills payload in skills.sh HTML")]
    PayloadNotFound,

    /// The payload was found but the selected listing is absent or not a list.
    #[error("Missing expected key {0}")]
    MissingViewKey(&'static str),
}
