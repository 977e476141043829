use coulomb_core::SweepError;
use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("please enter valid numeric values!")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },
    /// A prompt answer that is not even text.
    #[error("please enter valid numeric values!")]
    InvalidEncoding(#[source] std::io::Error),
    #[error("the distance must be greater than zero!")]
    NonPositiveDistance(f64),
    #[error(transparent)]
    Sweep(#[from] SweepError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl SessionError {
    /// The single line shown to the user when the run stops on this error.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::InvalidNumber { .. }
            | SessionError::InvalidEncoding(_)
            | SessionError::NonPositiveDistance(_)
            | SessionError::Sweep(_) => format!("Error: {self}"),
            SessionError::Io(err) => format!("Unexpected error: {err}"),
            SessionError::Unexpected(err) => format!("Unexpected error: {err:#}"),
        }
    }
}
