/// A possibly absent error deciding whether a conditional log call fires
pub trait ErrorGate {
    /// `true` when an error is present
    fn is_failure(&self) -> bool;
}

impl<T> ErrorGate for Option<T> {
    fn is_failure(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> ErrorGate for Result<T, E> {
    fn is_failure(&self) -> bool {
        self.is_err()
    }
}

impl<G: ErrorGate + ?Sized> ErrorGate for &G {
    fn is_failure(&self) -> bool {
        (**self).is_failure()
    }
}
