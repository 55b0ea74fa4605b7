use thiserror::Error;

use todo_core::{Outcome, Rejection, TransportError};

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad base URL, connection failure or non-2xx response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The action was refused before any request was made.
    #[error("{0}")]
    Rejected(#[from] Rejection),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Transport(_) => 1,
            CliError::Rejected(_) => 2,
        }
    }
}

/// Turn a controller outcome into a CLI result.
pub fn check(outcome: Outcome) -> Result<(), CliError> {
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Rejected(rejection) => Err(rejection.into()),
        Outcome::Failed(err) => Err(err.into()),
    }
}
