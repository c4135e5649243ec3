//! Error types for the API client and the board.

use std::fmt;

/// Failure of a single call to the ideas API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Failed to serialize request data.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Failed to deserialize response data.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The request never produced a response.
    #[error("Request error: {0}")]
    Request(String),

    /// Server answered with a non-success status.
    #[error("Server error: status {status}")]
    ServerError { status: u16, body: String },
}

/// The two network operations the board performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Fetch => f.write_str("fetch ideas"),
            Operation::Create => f.write_str("create idea"),
        }
    }
}

/// Anything that can go wrong in response to a user action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The draft was empty after trimming; nothing was sent.
    #[error("draft is empty")]
    Validation,

    #[error("{operation} failed: {source}")]
    Network {
        operation: Operation,
        #[source]
        source: ApiError,
    },
}

impl BoardError {
    pub fn network(operation: Operation, source: ApiError) -> Self {
        BoardError::Network { operation, source }
    }

    /// Text shown to the user. Generic per operation; never the cause.
    pub fn user_message(&self) -> &'static str {
        match self {
            BoardError::Validation => "Please enter an idea",
            BoardError::Network {
                operation: Operation::Fetch,
                ..
            } => "Failed to fetch ideas. Please try again.",
            BoardError::Network {
                operation: Operation::Create,
                ..
            } => "Failed to submit idea. Please try again.",
        }
    }
}
