//! Stub out methods of a dependency and verify how often they were called.
//!
//! A [`Mock`] wraps a replacement function (a [`Stub`]), counts every call and
//! compares the recorded number of calls against a [`CallPattern`] when it is
//! verified. Verification returns a [`Verification`] instead of panicking, so
//! any test runner can decide how to report a mismatch.
//!
//! ```rust
//! use callmock::{CallPattern, Mock};
//!
//! trait Greeter {
//!     fn greet(&self, name: &'static str) -> String;
//! }
//!
//! struct MockGreeter {
//!     greet: Mock<&'static str, String>,
//! }
//!
//! impl Greeter for MockGreeter {
//!     fn greet(&self, name: &'static str) -> String {
//!         self.greet.call(name)
//!     }
//! }
//!
//! let greeter = MockGreeter {
//!     greet: Mock::with_pattern(|name: &'static str| format!("hi {name}"), CallPattern::Exactly(1)),
//! };
//!
//! assert_eq!("hi bob", greeter.greet("bob"));
//! assert!(greeter.greet.verify().is_ok());
//! ```

pub mod call_pattern;
pub mod error;
pub mod mock;
pub mod stub;
pub mod verify;

pub use call_pattern::{matches, CallPattern};
pub use error::{Error, Result};
pub use mock::Mock;
pub use stub::Stub;
pub use verify::{verify_all, Report, Verification, Verify};
