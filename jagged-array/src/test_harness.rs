use jagged_buffer::BufferMut;
use jagged_dtype::NativePType;
use jagged_error::JaggedExpect;
use rand::Rng;
use rand::rngs::StdRng;

use crate::arrays::{ConstantArray, ListArray, PrimitiveArray};
use crate::compute::{SliceArg, to_list_backed};
use crate::validity::Validity;
use crate::{Array, ArrayRef, IntoArray};

/// A nullable list of nullable `i64` with `rows` rows of up to `max_row_len` elements.
///
/// About one row in ten and one element in eight is null. Null rows still own elements.
pub fn random_list(rng: &mut StdRng, rows: usize, max_row_len: usize) -> ListArray {
    let mut offsets = BufferMut::<u64>::with_capacity(rows + 1);
    offsets.push(0);
    let mut elements = Vec::new();
    for _ in 0..rows {
        let row_len = rng.random_range(0..=max_row_len);
        for _ in 0..row_len {
            let value = rng.random_range(-100i64..100);
            elements.push((!rng.random_bool(0.125)).then_some(value));
        }
        offsets.push(elements.len() as u64);
    }
    let validity = (0..rows)
        .map(|_| !rng.random_bool(0.1))
        .collect::<Validity>()
        .into_nullable();

    ListArray::try_new(
        PrimitiveArray::from_option_iter(elements).into_array(),
        offsets.freeze(),
        validity,
    )
    .jagged_expect("random list is well formed")
}

/// A slice argument for `rows` rows with values in `-max_abs..=max_abs`.
///
/// Picks evenly between absent, constant and per-row arguments. Per-row values are null about
/// one time in five.
pub fn random_slice_arg(rng: &mut StdRng, rows: usize, max_abs: i64) -> SliceArg {
    match rng.random_range(0..3) {
        0 => SliceArg::Absent,
        1 => SliceArg::Constant(rng.random_range(-max_abs..=max_abs)),
        _ => SliceArg::PerRow(
            (0..rows)
                .map(|_| {
                    let value = rng.random_range(-max_abs..=max_abs);
                    (!rng.random_bool(0.2)).then_some(value)
                })
                .collect(),
        ),
    }
}

/// The column a [`SliceArg`] was classified from: `None` if absent.
pub fn slice_arg_array(arg: &SliceArg, rows: usize) -> Option<ArrayRef> {
    match arg {
        SliceArg::Absent => None,
        SliceArg::Constant(value) => Some(ConstantArray::new(*value, rows).into_array()),
        SliceArg::PerRow(values) => {
            Some(PrimitiveArray::from_option_iter(values.iter().copied()).into_array())
        }
    }
}

/// The value of a [`SliceArg`] at `row`.
pub fn slice_arg_at(arg: &SliceArg, row: usize) -> Option<i64> {
    match arg {
        SliceArg::Absent => None,
        SliceArg::Constant(value) => Some(*value),
        SliceArg::PerRow(values) => values[row],
    }
}

/// Reads a list of primitives back into rows, `None` for null rows and null elements.
pub fn list_rows<T: NativePType>(array: &dyn Array) -> Vec<Option<Vec<Option<T>>>> {
    let list = to_list_backed(array)
        .jagged_expect("list materialises")
        .jagged_expect("array is list backed");
    let elements = list
        .elements()
        .as_opt::<PrimitiveArray>()
        .jagged_expect("list elements are primitive");
    let values = elements.as_slice::<T>();
    let validity = elements.validity();

    (0..list.len())
        .map(|row| {
            list.validity().is_valid(row).then(|| {
                list.row_range(row)
                    .map(|i| validity.is_valid(i).then_some(values[i]))
                    .collect()
            })
        })
        .collect()
}
