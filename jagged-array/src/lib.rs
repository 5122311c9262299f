//! Columnar arrays with first-class list (jagged) support, and the compute kernels that
//! operate on them.
//!
//! Every array implements [`Array`] and is shared behind an [`ArrayRef`]. A list column is a
//! [`ListArray`](arrays::ListArray): `N + 1` cumulative offsets over one flattened element array.

pub mod aliases;
pub mod arrays;
pub mod builders;
pub mod compute;
mod encoding;
#[cfg(feature = "test-harness")]
pub mod test_harness;
pub mod validity;

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

pub use encoding::*;
use jagged_dtype::DType;
use jagged_error::{JaggedResult, jagged_bail};
use jagged_scalar::Scalar;

use crate::compute::TakeRangesFn;
use crate::validity::Validity;

/// The base trait for all jagged arrays.
pub trait Array: 'static + Send + Sync + Debug {
    /// Returns the array as a reference to a generic [`Any`] trait object.
    fn as_any(&self) -> &dyn Any;

    /// Returns the array as an [`ArrayRef`].
    fn to_array(&self) -> ArrayRef;

    /// Returns the length of the array.
    fn len(&self) -> usize;

    /// Returns whether the array is empty (has zero rows).
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the logical type of the array.
    fn dtype(&self) -> &DType;

    /// Returns the encoding of the array.
    fn encoding(&self) -> EncodingId;

    /// Returns the row-level validity of the array.
    fn validity(&self) -> Validity;

    /// Returns whether the item at `index` is valid.
    fn is_valid(&self, index: usize) -> JaggedResult<bool> {
        if index >= self.len() {
            jagged_bail!(OutOfBounds: index, 0, self.len());
        }
        Ok(self.validity().is_valid(index))
    }

    /// Returns whether the item at `index` is null.
    fn is_invalid(&self, index: usize) -> JaggedResult<bool> {
        self.is_valid(index).map(|v| !v)
    }

    /// Fetch the scalar at the given index, returning a null scalar for null rows.
    fn scalar_at(&self, index: usize) -> JaggedResult<Scalar> {
        if index >= self.len() {
            jagged_bail!(OutOfBounds: index, 0, self.len());
        }
        if !self.validity().is_valid(index) {
            return Ok(Scalar::null(self.dtype().clone()));
        }
        self.valid_scalar_at(index)
    }

    /// Fetch the scalar at an in-bounds index known to be valid.
    fn valid_scalar_at(&self, index: usize) -> JaggedResult<Scalar>;

    /// The range gather kernel of this encoding, if it has one.
    fn take_ranges_fn(&self) -> Option<&dyn TakeRangesFn> {
        None
    }
}

/// A reference-counted pointer to a dynamic [`Array`] trait object.
pub type ArrayRef = Arc<dyn Array>;

impl Array for Arc<dyn Array> {
    fn as_any(&self) -> &dyn Any {
        self.as_ref().as_any()
    }

    fn to_array(&self) -> ArrayRef {
        self.clone()
    }

    fn len(&self) -> usize {
        self.as_ref().len()
    }

    fn dtype(&self) -> &DType {
        self.as_ref().dtype()
    }

    fn encoding(&self) -> EncodingId {
        self.as_ref().encoding()
    }

    fn validity(&self) -> Validity {
        self.as_ref().validity()
    }

    fn is_valid(&self, index: usize) -> JaggedResult<bool> {
        self.as_ref().is_valid(index)
    }

    fn scalar_at(&self, index: usize) -> JaggedResult<Scalar> {
        self.as_ref().scalar_at(index)
    }

    fn valid_scalar_at(&self, index: usize) -> JaggedResult<Scalar> {
        self.as_ref().valid_scalar_at(index)
    }

    fn take_ranges_fn(&self) -> Option<&dyn TakeRangesFn> {
        self.as_ref().take_ranges_fn()
    }
}

impl dyn Array {
    /// Returns the array downcast to the given `A`, if it is one.
    pub fn as_opt<A: Array>(&self) -> Option<&A> {
        self.as_any().downcast_ref::<A>()
    }

    /// Is self an array with encoding `A`.
    pub fn is<A: Array>(&self) -> bool {
        self.as_opt::<A>().is_some()
    }
}

/// Converts an owned array into an [`ArrayRef`].
pub trait IntoArray {
    fn into_array(self) -> ArrayRef;
}

impl IntoArray for ArrayRef {
    fn into_array(self) -> ArrayRef {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jagged_error::JaggedError;

    use crate::arrays::{ListArray, PrimitiveArray};
    use crate::{Array, ArrayRef, IntoArray};

    #[test]
    fn downcast_through_array_ref() {
        let array: ArrayRef = PrimitiveArray::from_iter([1i32, 2, 3]).into_array();
        assert!(array.is::<PrimitiveArray>());
        assert!(!array.is::<ListArray>());
        assert_eq!(array.as_opt::<PrimitiveArray>().unwrap().len(), 3);

        let as_dyn: &dyn Array = &array;
        assert!(as_dyn.is::<PrimitiveArray>());
    }

    #[test]
    fn to_array_shares_arc() {
        let array: ArrayRef = PrimitiveArray::from_iter([1u8]).into_array();
        assert!(Arc::ptr_eq(&array, &array.to_array()));
    }

    #[test]
    fn scalar_at_out_of_bounds() {
        let array = PrimitiveArray::from_iter([1u8, 2]);
        assert!(matches!(
            array.scalar_at(2),
            Err(JaggedError::OutOfBounds(2, 0, 2, _))
        ));
    }
}
