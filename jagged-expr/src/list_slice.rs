use jagged_array::arrays::NullArray;
use jagged_array::compute::list_slice;
use jagged_array::{ArrayRef, IntoArray};
use jagged_dtype::DType;
use jagged_error::{JaggedResult, jagged_bail};

use crate::{ScalarFunction, check_arg_count};

/// `list_slice(list, offset[, length])`: a sub-range of every row.
///
/// `offset` is 1-based, negative values count from the end of the row and `0` selects nothing.
/// A negative `length` drops that many elements from the end of the row. Null offsets and
/// lengths are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListSlice;

impl ListSlice {
    pub const NAME: &'static str = "list_slice";
}

impl ScalarFunction for ListSlice {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn return_dtype(&self, arg_dtypes: &[DType]) -> JaggedResult<DType> {
        check_arg_count(Self::NAME, arg_dtypes.len(), 2, 3)?;

        let list = &arg_dtypes[0];
        if list.is_null_type() {
            return Ok(DType::Null);
        }
        if !list.is_list() {
            jagged_bail!(
                IllegalArgumentType: Self::NAME,
                "First argument for function {} must be a list but it has type {}",
                Self::NAME,
                list
            );
        }

        for (i, dtype) in arg_dtypes.iter().enumerate().skip(1) {
            if !dtype.is_int() && !dtype.is_null_type() {
                jagged_bail!(
                    IllegalArgumentType: Self::NAME,
                    "Argument {} for function {} must be integer but it has type {}",
                    i + 1,
                    Self::NAME,
                    dtype
                );
            }
        }

        Ok(list.clone())
    }

    fn invoke(
        &self,
        args: &[ArrayRef],
        return_dtype: &DType,
        row_count: usize,
    ) -> JaggedResult<ArrayRef> {
        check_arg_count(Self::NAME, args.len(), 2, 3)?;
        if return_dtype.is_null_type() {
            return Ok(NullArray::new(row_count).into_array());
        }
        list_slice(
            &args[0],
            args.get(1).map(|a| a.as_ref()),
            args.get(2).map(|a| a.as_ref()),
        )
    }
}
