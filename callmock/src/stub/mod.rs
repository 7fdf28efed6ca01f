//! The [`stub`](self) module contains the [`Stub`] trait and some pre-defined
//! stubs that may be installed into a [`Mock`](crate::Mock).

mod noop;
mod returns;

pub use noop::{noop, Noop};
pub use returns::{returning, Returning};

/// Replacement behaviour that is executed every time a mock is called.
///
/// This is similar to [`FnMut`] of the standard library, which means any
/// closure `FnMut(In) -> Out` is a stub.
///
/// The arguments passed to the stub are either
/// - a unit `()` for no arguments
/// - a single type `T` for one argument
/// - or a tuple `(T1, T2, ...)` of many arguments
pub trait Stub<In, Out>: Send {
    /// Execute the stub with the passed arguments.
    fn exec(&mut self, args: In) -> Out;
}

impl<X, In, Out> Stub<In, Out> for X
where
    X: FnMut(In) -> Out + Send,
{
    fn exec(&mut self, args: In) -> Out {
        self(args)
    }
}

/// Boxed stub as it is stored inside a mock.
pub type BoxedStub<In, Out> = Box<dyn Stub<In, Out>>;
