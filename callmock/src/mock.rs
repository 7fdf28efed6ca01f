//! The [`mock`](self) module implements the [`Mock`] type.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::stub::{noop, returning, BoxedStub, Stub};
use crate::verify::{Verification, Verify};
use crate::CallPattern;

/// Stand-in for a single method of a real dependency.
///
/// A mock wraps a [`Stub`], counts how often it was called and compares the
/// recorded number of calls against the expected [`CallPattern`] when it is
/// verified.
///
/// `In` is the argument type of the mocked method: `()` for methods without
/// arguments, the argument type itself for one argument, or a tuple for many
/// arguments. `Out` is the return type.
///
/// A mock is usually stored inside a hand written test double that implements
/// the trait the system under test depends on, and each trait method forwards
/// to [`Mock::call`].
pub struct Mock<In, Out> {
    name: Option<Cow<'static, str>>,
    stub: Mutex<Option<BoxedStub<In, Out>>>,
    number_of_calls: AtomicUsize,
    expected_calls: CallPattern,
}

impl<In, Out> Mock<In, Out> {
    /// Create a new mock that executes `stub` and may be called any number
    /// of times.
    pub fn new<S>(stub: S) -> Self
    where
        S: Stub<In, Out> + 'static,
    {
        Self::with_pattern(stub, CallPattern::AnyNumber)
    }

    /// Create a new mock that executes `stub` and expects to be called
    /// according to `pattern`.
    pub fn with_pattern<S, P>(stub: S, pattern: P) -> Self
    where
        S: Stub<In, Out> + 'static,
        P: Into<CallPattern>,
    {
        let stub: BoxedStub<In, Out> = Box::new(stub);

        Self {
            name: None,
            stub: Mutex::new(Some(stub)),
            number_of_calls: AtomicUsize::new(0),
            expected_calls: pattern.into(),
        }
    }

    /// Create a mock with the signature of the mocked method but without any
    /// behaviour.
    ///
    /// Calling the returned mock before a stub was set using
    /// [`with_stub`](Self::with_stub) will panic.
    pub fn unconfigured() -> Self {
        Self {
            name: None,
            stub: Mutex::new(None),
            number_of_calls: AtomicUsize::new(0),
            expected_calls: CallPattern::AnyNumber,
        }
    }

    /// Set the stub that is executed when the mock is called.
    #[must_use]
    pub fn with_stub<S>(mut self, stub: S) -> Self
    where
        S: Stub<In, Out> + 'static,
    {
        let stub: BoxedStub<In, Out> = Box::new(stub);
        *self.stub.get_mut() = Some(stub);

        self
    }

    /// Set the expected number of calls.
    #[must_use]
    pub fn times<P: Into<CallPattern>>(mut self, pattern: P) -> Self {
        self.expected_calls = pattern.into();

        self
    }

    /// Set the name that identifies the mock in messages and log events.
    #[must_use]
    pub fn named<N: Into<Cow<'static, str>>>(mut self, name: N) -> Self {
        self.name = Some(name.into());

        self
    }

    /// Call the mock.
    ///
    /// The call is counted before the stub is executed, so it is recorded
    /// even if the stub panics. The stub must not call the same mock again.
    ///
    /// # Panics
    /// Panics if the mock was created using [`unconfigured`](Self::unconfigured)
    /// and no stub was set.
    #[track_caller]
    pub fn call(&self, args: In) -> Out {
        match self.try_call(args) {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }

    /// Same like [`call`](Self::call) but returns an error instead of
    /// panicking if no stub was set. The call is counted in either case.
    ///
    /// # Errors
    /// Returns [`Error::UnconfiguredStub`] if the mock has no stub.
    pub fn try_call(&self, args: In) -> Result<Out> {
        let count = self.number_of_calls.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(mock = %self.label(), count, "mock called");

        let mut stub = self.stub.lock();
        let Some(stub) = stub.as_mut() else {
            tracing::warn!(mock = %self.label(), "mock called without a configured stub");

            return Err(Error::unconfigured_stub(self.label()));
        };

        Ok(stub.exec(args))
    }

    /// Verify the recorded number of calls against the expected call pattern.
    ///
    /// The location of the caller is stored in the returned [`Verification`].
    #[track_caller]
    pub fn verify(&self) -> Verification {
        self.verify_at(Location::caller())
    }

    /// Same like [`verify`](Self::verify) but uses the passed `location`.
    pub fn verify_at(&self, location: &'static Location<'static>) -> Verification {
        let observed = self.number_of_calls();
        if self.expected_calls.matches(observed) {
            return Verification::passed(location);
        }

        let message = match &self.name {
            Some(name) => format!(
                "{name}: {} does not match expected pattern {}",
                NCalls(observed),
                self.expected_calls
            ),
            None => format!(
                "{} does not match expected pattern {}",
                NCalls(observed),
                self.expected_calls
            ),
        };

        tracing::debug!(mock = %self.label(), %location, "{message}");

        Verification::failed(location, message)
    }

    /// Number of times the mock was called so far.
    #[must_use]
    pub fn number_of_calls(&self) -> usize {
        self.number_of_calls.load(Ordering::SeqCst)
    }

    /// The expected call pattern.
    #[must_use]
    pub fn expected_calls(&self) -> CallPattern {
        self.expected_calls
    }

    /// The name of the mock, if one was set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if a stub is set, `false` otherwise.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.stub.lock().is_some()
    }

    /// Name of the mock, or its signature if no name was set.
    fn label(&self) -> Cow<'static, str> {
        self.name
            .clone()
            .unwrap_or_else(|| Cow::Borrowed(type_name::<fn(In) -> Out>()))
    }
}

impl<In, Out> Mock<In, Out>
where
    Out: Clone + Send + 'static,
{
    /// Create a new mock that returns a clone of `value` on every call.
    pub fn returning<P: Into<CallPattern>>(value: Out, pattern: P) -> Self {
        Self::with_pattern(returning(value), pattern)
    }
}

impl<In> Mock<In, ()> {
    /// Create a new mock that does nothing when called.
    pub fn noop<P: Into<CallPattern>>(pattern: P) -> Self {
        Self::with_pattern(noop(), pattern)
    }
}

impl<In, Out> Default for Mock<In, Out> {
    fn default() -> Self {
        Self::unconfigured()
    }
}

impl<In, Out> Verify for Mock<In, Out> {
    fn verify_at(&self, location: &'static Location<'static>) -> Verification {
        Mock::verify_at(self, location)
    }
}

impl<In, Out> Debug for Mock<In, Out> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Mock")
            .field("name", &self.label())
            .field("number_of_calls", &self.number_of_calls())
            .field("expected_calls", &self.expected_calls)
            .field("is_configured", &self.is_configured())
            .finish()
    }
}

struct NCalls(usize);

impl Display for NCalls {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.0 {
            1 => write!(f, "1 call"),
            n => write!(f, "{n} calls"),
        }
    }
}
