use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid runner group ID: {0} (must be a number)")]
    InvalidRunnerGroupId(String),

    /// The gh binary could not be started at all
    #[error("failed to execute gh command for {endpoint}: {source}")]
    Exec {
        endpoint: String,
        source: std::io::Error,
    },

    #[error("failed to execute gh command for {endpoint}: {status}\nStderr: {stderr}")]
    CommandFailed {
        endpoint: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to parse JSON response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
