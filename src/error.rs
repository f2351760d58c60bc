//! Error types for card resolution.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Error returned when a token does not name one of the 52 standard cards.
///
/// Raised only at the boundary where runtime input (text, raw indices) is
/// converted into a [`CardName`](crate::CardName); once a `CardName` exists,
/// every registry lookup is total and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown card identity: {identity}")]
pub struct UnknownCardError {
    /// The rejected token.
    pub identity: String,
}

impl UnknownCardError {
    /// Creates an error for the given rejected token.
    #[must_use]
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }
}
