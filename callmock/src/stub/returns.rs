use super::Stub;

/// Creates a [`Returning`] stub that returns a clone of `value` on every call.
pub fn returning<T>(value: T) -> Returning<T> {
    Returning(value)
}

/// Stub that ignores its arguments and returns a clone of the stored value.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Returning<T>(pub T);

impl<T, X> Stub<X, T> for Returning<T>
where
    T: Clone + Send,
{
    fn exec(&mut self, _args: X) -> T {
        self.0.clone()
    }
}
