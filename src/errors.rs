//! The `spritz` crate has a single error type, [`SpritzError`], covering
//! the three ways a caller can step outside the contract:
//!
//! - [`SpritzError::Configuration`]: the permutation table was requested
//!   with an unsupported size.
//!
//! - [`SpritzError::InvalidArgument`]: a parameter is outside its domain,
//!   e.g. a zero output length for a digest or tag.
//!
//! - [`SpritzError::ProtocolViolation`]: a construction was driven out of
//!   its fixed phase order, such as absorbing input after squeezing has
//!   begun. Producing output from such a state would have undefined
//!   security properties, so the call is rejected instead.
//!
//! All errors are detected synchronously at the offending call and none
//! are retryable: the same input reproduces the same error. Well-formed
//! absorption and squeezing never fail.

use std::{error::Error, fmt::Display};

/// An error raised by one of the Spritz constructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpritzError {
    /// The permutation state was configured with an invalid table size.
    Configuration(String),
    /// A parameter violates the construction's contract.
    InvalidArgument(String),
    /// A construction phase was invoked out of its fixed order.
    ProtocolViolation(String),
}

/// The result type used throughout the crate.
pub type SpritzResult<T> = Result<T, SpritzError>;

impl Display for SpritzError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "configuration error: {msg}"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::ProtocolViolation(msg) => write!(f, "protocol violation: {msg}"),
        }
    }
}

impl Error for SpritzError {}
