#![deny(missing_docs)]

//! Error types for the jagged list kernels.
//!
//! Every fallible operation in the workspace returns a [`JaggedResult`]. Errors are built with
//! [`jagged_err!`], returned early with [`jagged_bail!`], and internal invariant violations abort
//! through [`jagged_panic!`].

mod ext;

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

pub use ext::*;

// Alias so `thiserror` does not auto-detect these fields as backtraces and emit a
// nightly-only `Error::provide` impl; the field type is still `std::backtrace::Backtrace`.
type CapturedBacktrace = Backtrace;

/// A string wrapper used for error messages, avoiding allocation for static messages.
#[derive(Debug)]
pub struct ErrString(Cow<'static, str>);

impl<T> From<T> for ErrString
where
    T: Into<Cow<'static, str>>,
{
    fn from(msg: T) -> Self {
        Self(msg.into())
    }
}

impl AsRef<str> for ErrString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ErrString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ErrString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// The error type shared by every jagged crate.
///
/// The first four variants are the user-facing taxonomy of the list functions. The remaining
/// variants cover the array model itself.
#[derive(thiserror::Error)]
#[non_exhaustive]
pub enum JaggedError {
    /// A function was called with the wrong number of arguments.
    #[error("Number of arguments for function {0} doesn't match: {1}\nBacktrace:\n{2}")]
    ArgumentCountMismatch(ErrString, ErrString, CapturedBacktrace),
    /// A function argument has a type the function cannot accept.
    #[error("Illegal type of argument for function {0}: {1}\nBacktrace:\n{2}")]
    IllegalArgumentType(ErrString, ErrString, CapturedBacktrace),
    /// A runtime column does not have the physical representation its type promises.
    #[error("Illegal column for function {0}: {1}\nBacktrace:\n{2}")]
    IllegalColumn(ErrString, ErrString, CapturedBacktrace),
    /// An internal invariant was violated.
    #[error("Logical error: {0}\nBacktrace:\n{1}")]
    LogicalError(ErrString, CapturedBacktrace),
    /// An index is out of bounds.
    #[error("index {0} out of bounds from {1} to {2}\nBacktrace:\n{3}")]
    OutOfBounds(usize, usize, usize, CapturedBacktrace),
    /// An invalid argument was provided.
    #[error("{0}\nBacktrace:\n{1}")]
    InvalidArgument(ErrString, CapturedBacktrace),
    /// A wrapper for other errors, carrying additional context.
    #[error("{0}: {1}")]
    Context(ErrString, Box<JaggedError>),
}

impl JaggedError {
    /// Adds additional context to an error.
    pub fn with_context<T: Into<ErrString>>(self, msg: T) -> Self {
        JaggedError::Context(msg.into(), Box::new(self))
    }

    /// Returns the innermost error, skipping any layers of context.
    pub fn root(&self) -> &JaggedError {
        match self {
            JaggedError::Context(_, inner) => inner.root(),
            other => other,
        }
    }
}

impl Debug for JaggedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// A type alias for results with [`JaggedError`] as the error type.
pub type JaggedResult<T> = Result<T, JaggedError>;

/// A trait for unwrapping a result or option with a message, panicking with a
/// [`JaggedError`] on failure.
pub trait JaggedExpect {
    /// The type of the value being expected.
    type Output;

    /// Returns the value, or panics with the provided message.
    fn jagged_expect(self, msg: &str) -> Self::Output;
}

impl<T, E> JaggedExpect for Result<T, E>
where
    E: Into<JaggedError>,
{
    type Output = T;

    #[inline(always)]
    fn jagged_expect(self, msg: &str) -> Self::Output {
        self.map_err(|err| err.into())
            .unwrap_or_else(|e| crate::jagged_panic!(e.with_context(msg.to_string())))
    }
}

impl<T> JaggedExpect for Option<T> {
    type Output = T;

    #[inline(always)]
    fn jagged_expect(self, msg: &str) -> Self::Output {
        self.unwrap_or_else(|| {
            let err = JaggedError::InvalidArgument(msg.to_string().into(), Backtrace::capture());
            crate::jagged_panic!(err)
        })
    }
}

/// Builds a [`JaggedError`].
///
/// The variant is selected with a prefix, e.g. `jagged_err!(IllegalColumn: "list_slice", "...")`.
/// Without a prefix the error is an [`JaggedError::InvalidArgument`].
#[macro_export]
macro_rules! jagged_err {
    (ArgumentCountMismatch: $func:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::JaggedError::ArgumentCountMismatch(
            $func.to_string().into(),
            format!($fmt $(, $arg)*).into(),
            ::std::backtrace::Backtrace::capture(),
        )
    };
    (IllegalArgumentType: $func:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::JaggedError::IllegalArgumentType(
            $func.to_string().into(),
            format!($fmt $(, $arg)*).into(),
            ::std::backtrace::Backtrace::capture(),
        )
    };
    (IllegalColumn: $func:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::JaggedError::IllegalColumn(
            $func.to_string().into(),
            format!($fmt $(, $arg)*).into(),
            ::std::backtrace::Backtrace::capture(),
        )
    };
    (LogicalError: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::JaggedError::LogicalError(
            format!($fmt $(, $arg)*).into(),
            ::std::backtrace::Backtrace::capture(),
        )
    };
    (OutOfBounds: $idx:expr, $start:expr, $stop:expr) => {
        $crate::JaggedError::OutOfBounds(
            $idx,
            $start,
            $stop,
            ::std::backtrace::Backtrace::capture(),
        )
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::JaggedError::InvalidArgument(
            format!($fmt $(, $arg)*).into(),
            ::std::backtrace::Backtrace::capture(),
        )
    };
}

/// Returns early with a [`JaggedError`] built by [`jagged_err!`].
#[macro_export]
macro_rules! jagged_bail {
    ($($tt:tt)+) => {
        return Err($crate::jagged_err!($($tt)+))
    };
}

/// Panics with a [`JaggedError`], either given directly or built from a format string.
#[macro_export]
macro_rules! jagged_panic {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::jagged_panic!($crate::jagged_err!($fmt $(, $arg)*))
    };
    ($err:expr) => {{
        let err: $crate::JaggedError = $err;
        panic!("{}", err)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails_with_count(n: usize) -> JaggedResult<()> {
        jagged_bail!(ArgumentCountMismatch: "list_slice", "passed {n}, should be 2 or 3")
    }

    #[test]
    fn bail_builds_requested_variant() {
        let err = fails_with_count(4).unwrap_err();
        assert!(matches!(err, JaggedError::ArgumentCountMismatch(..)));
        assert!(err.to_string().starts_with(
            "Number of arguments for function list_slice doesn't match: passed 4, should be 2 or 3"
        ));
    }

    #[test]
    fn plain_message_is_invalid_argument() {
        let err = jagged_err!("bad value {}", 7);
        assert!(matches!(err, JaggedError::InvalidArgument(..)));
        assert!(err.to_string().starts_with("bad value 7"));
    }

    #[test]
    fn context_keeps_root() {
        let err = jagged_err!(LogicalError: "missing list").with_context("while slicing");
        assert!(err.to_string().starts_with("while slicing: Logical error: missing list"));
        assert!(matches!(err.root(), JaggedError::LogicalError(..)));
    }

    #[test]
    #[should_panic(expected = "no rows")]
    fn expect_on_none_panics() {
        let value: Option<u32> = None;
        value.jagged_expect("no rows");
    }
}
