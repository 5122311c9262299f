use jagged_buffer::BufferMut;
use jagged_error::{JaggedResult, jagged_bail};

use crate::arrays::{ListArray, PrimitiveArray};
use crate::compute::to_list_backed;
use crate::validity::Validity;
use crate::{Array, ArrayRef, IntoArray};

/// Replaces every element of a list column with its 1-based position within its row.
///
/// The result shares the row offsets of the input (the same buffer, not a copy) and keeps its
/// row validity. Its elements are non-nullable `u32`: row `[a, b, c]` becomes `[1, 2, 3]`.
pub fn list_enumerate(array: &dyn Array) -> JaggedResult<ArrayRef> {
    let Some(list) = to_list_backed(array)? else {
        jagged_bail!(
            IllegalColumn: "list_enumerate",
            "expected a list column, got {} array of type {}",
            array.encoding(),
            array.dtype()
        );
    };

    let mut positions = BufferMut::<u32>::zeroed(list.elements().len());
    let out = positions.as_mut_slice();
    for row in 0..list.len() {
        for (slot, position) in out[list.row_range(row)].iter_mut().zip(1u32..) {
            *slot = position;
        }
    }

    let elements = PrimitiveArray::new(positions.freeze(), Validity::NonNullable).into_array();
    Ok(ListArray::try_new(elements, list.offsets().clone(), list.validity())?.into_array())
}
