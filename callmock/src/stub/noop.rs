use super::Stub;

/// Creates a [`Noop`] stub.
pub fn noop() -> Noop {
    Noop
}

/// Stub that ignores its arguments and does nothing.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Noop;

impl<X> Stub<X, ()> for Noop {
    fn exec(&mut self, _args: X) {}
}
