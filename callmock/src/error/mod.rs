//! Error definitions
//!
//! This module provides the error type shared by all mocks of this crate.

use std::borrow::Cow;
use std::panic::Location;

use thiserror::Error;

/// Main error type for callmock
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A mock was called before a stub was assigned to it.
    #[error("{name}: mock was called without a configured stub")]
    UnconfiguredStub {
        /// Label of the mock that was called.
        name: Cow<'static, str>,
    },

    /// The number of recorded calls does not match the expected call pattern.
    #[error("{location}: {message}")]
    Mismatch {
        /// Source location the verification was requested from.
        location: &'static Location<'static>,
        /// Human readable description of the mismatch.
        message: String,
    },
}

impl Error {
    /// Create an unconfigured stub error for the mock labeled `name`.
    #[must_use]
    pub fn unconfigured_stub(name: impl Into<Cow<'static, str>>) -> Self {
        Self::UnconfiguredStub { name: name.into() }
    }

    /// Returns `true` if this error is caused by a call pattern mismatch.
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
