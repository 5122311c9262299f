use crate::{ErrString, JaggedResult};

/// Extension trait for [`JaggedResult`].
pub trait ResultExt<T>: private::Sealed {
    /// Wraps the error, if any, with a message describing what was being attempted.
    fn context<M: Into<ErrString>>(self, msg: M) -> JaggedResult<T>;
}

mod private {
    use crate::JaggedResult;

    pub trait Sealed {}

    impl<T> Sealed for JaggedResult<T> {}
}

impl<T> ResultExt<T> for JaggedResult<T> {
    fn context<M: Into<ErrString>>(self, msg: M) -> JaggedResult<T> {
        self.map_err(|e| e.with_context(msg))
    }
}
