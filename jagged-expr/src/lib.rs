//! Named scalar functions over jagged arrays.
//!
//! A [`ScalarFunction`] first resolves its return type from the argument types, then runs
//! over whole columns. Functions are looked up by name through the [registry](find_function).

use std::fmt::Debug;

use jagged_array::{Array, ArrayRef};
use jagged_dtype::DType;
use jagged_error::{JaggedResult, jagged_bail};

mod list_enumerate;
mod list_slice;
mod registry;

pub use list_enumerate::*;
pub use list_slice::*;
pub use registry::*;

/// A function applied row-wise to a set of argument columns.
pub trait ScalarFunction: Debug + Send + Sync {
    /// The name the function is registered under.
    fn name(&self) -> &'static str;

    /// Resolves the type of the result from the argument types.
    fn return_dtype(&self, arg_dtypes: &[DType]) -> JaggedResult<DType>;

    /// Computes the result of the function on arguments of `row_count` rows.
    ///
    /// "Invoke" assumes the arguments were already resolved against
    /// [`ScalarFunction::return_dtype`]. Use [`ScalarFunction::evaluate`] instead, which resolves
    /// the type and checks the result against it.
    fn invoke(
        &self,
        args: &[ArrayRef],
        return_dtype: &DType,
        row_count: usize,
    ) -> JaggedResult<ArrayRef>;

    /// Resolves the return type of the arguments and invokes the function on them.
    fn evaluate(&self, args: &[ArrayRef]) -> JaggedResult<ArrayRef> {
        let arg_dtypes = args.iter().map(|a| a.dtype().clone()).collect::<Vec<_>>();
        let return_dtype = self.return_dtype(&arg_dtypes)?;
        let row_count = args.first().map_or(0, |a| a.len());
        if let Some(arg) = args.iter().find(|a| a.len() != row_count) {
            jagged_bail!(
                IllegalColumn: self.name(),
                "all arguments must have {} rows, got one with {}",
                row_count,
                arg.len()
            );
        }

        let result = self.invoke(args, &return_dtype, row_count)?;
        debug_assert_eq!(
            result.dtype(),
            &return_dtype,
            "{} returned an array of the wrong type",
            self.name()
        );
        debug_assert_eq!(result.len(), row_count);
        Ok(result)
    }
}

/// Fails unless `count` lies within `min..=max`.
pub(crate) fn check_arg_count(
    function: &'static str,
    count: usize,
    min: usize,
    max: usize,
) -> JaggedResult<()> {
    if count < min || count > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{min} or {max}")
        };
        jagged_bail!(
            ArgumentCountMismatch: function,
            "passed {}, should be {}",
            count,
            expected
        );
    }
    Ok(())
}
