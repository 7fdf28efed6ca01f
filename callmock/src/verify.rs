//! The [`verify`](self) module contains the result of a verification and
//! helpers to verify many mocks at once.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::panic::Location;

use crate::error::{Error, Result};

/// Outcome of verifying a single mock.
///
/// A failed verification is data, not a panic, so the test runner decides how
/// to report it.
#[must_use]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Verification {
    ok: bool,
    message: String,
    location: &'static Location<'static>,
}

impl Verification {
    /// Create a passed verification.
    pub fn passed(location: &'static Location<'static>) -> Self {
        Self {
            ok: true,
            message: String::new(),
            location,
        }
    }

    /// Create a failed verification with the passed `message`.
    pub fn failed(location: &'static Location<'static>, message: String) -> Self {
        Self {
            ok: false,
            message,
            location,
        }
    }

    /// Returns `true` if the expected call pattern was met, `false` otherwise.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Description of the mismatch. Empty if the verification passed.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source location the verification was requested from.
    #[must_use]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Convert the verification into a [`Result`].
    ///
    /// # Errors
    /// Returns [`Error::Mismatch`] if the verification failed.
    pub fn into_result(self) -> Result<()> {
        if self.ok {
            Ok(())
        } else {
            Err(Error::Mismatch {
                location: self.location,
                message: self.message,
            })
        }
    }

    /// Panic with the mismatch message if the verification failed.
    ///
    /// # Panics
    /// Panics if the verification failed.
    #[track_caller]
    pub fn assert_ok(self) {
        if !self.ok {
            panic!("{self}");
        }
    }
}

impl Display for Verification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.ok {
            write!(f, "{}: expectation met", self.location)
        } else {
            write!(f, "{}: {}", self.location, self.message)
        }
    }
}

/// Object safe view of anything that can verify its recorded calls.
///
/// Used by [`verify_all`] to check mocks of different signatures together.
pub trait Verify {
    /// Verify the recorded calls and attribute the result to `location`.
    fn verify_at(&self, location: &'static Location<'static>) -> Verification;
}

/// Verify all passed mocks and collect the failed verifications.
#[track_caller]
pub fn verify_all(mocks: &[&dyn Verify]) -> Report {
    let location = Location::caller();
    let failures = mocks
        .iter()
        .map(|mock| mock.verify_at(location))
        .filter(|verification| !verification.is_ok())
        .collect::<Vec<_>>();

    if !failures.is_empty() {
        tracing::debug!(
            %location,
            failed = failures.len(),
            total = mocks.len(),
            "verification failed"
        );
    }

    Report { location, failures }
}

/// Outcome of verifying many mocks using [`verify_all`].
#[must_use]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Report {
    location: &'static Location<'static>,
    failures: Vec<Verification>,
}

impl Report {
    /// Returns `true` if every mock met its expectation.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failed verifications.
    #[must_use]
    pub fn failures(&self) -> &[Verification] {
        &self.failures
    }

    /// Convert the report into a [`Result`]. The messages of all failures are
    /// joined line by line.
    ///
    /// # Errors
    /// Returns [`Error::Mismatch`] if any verification failed.
    pub fn into_result(self) -> Result<()> {
        if self.failures.is_empty() {
            return Ok(());
        }

        let message = self
            .failures
            .iter()
            .map(Verification::message)
            .collect::<Vec<_>>()
            .join("\n");

        Err(Error::Mismatch {
            location: self.location,
            message,
        })
    }

    /// Panic with all mismatch messages if any verification failed.
    ///
    /// # Panics
    /// Panics if any verification failed.
    #[track_caller]
    pub fn assert_ok(self) {
        if !self.is_ok() {
            panic!("{self}");
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.failures.is_empty() {
            return write!(f, "{}: all expectations met", self.location);
        }

        write!(
            f,
            "{}: {} mock(s) did not meet their expectation",
            self.location,
            self.failures.len()
        )?;
        for failure in &self.failures {
            write!(f, "\n    {}", failure.message)?;
        }

        Ok(())
    }
}
