//! Compute kernels on top of jagged arrays.
//!
//! Kernels take `&dyn Array` inputs and return freshly built [`ArrayRef`](crate::ArrayRef)s.
//! Encodings opt into fast paths by exposing a kernel trait from [`Array`], such as
//! [`TakeRangesFn`]; everything else goes through a scalar-at-a-time fallback.

mod list_enumerate;
mod list_slice;
mod take_ranges;

pub use list_enumerate::*;
pub use list_slice::*;
pub use take_ranges::*;
use jagged_error::JaggedResult;

use crate::Array;
use crate::arrays::{ConstantArray, ListArray};

/// Returns the list column behind `array`, materialising a constant list if needed.
///
/// Returns `None` if the array is not list-backed.
pub fn to_list_backed(array: &dyn Array) -> JaggedResult<Option<ListArray>> {
    if let Some(list) = array.as_opt::<ListArray>() {
        return Ok(Some(list.clone()));
    }
    if let Some(constant) = array.as_opt::<ConstantArray>() {
        if constant.dtype().is_list() {
            let canonical = constant.to_canonical()?;
            return Ok(canonical.as_opt::<ListArray>().cloned());
        }
    }
    Ok(None)
}
