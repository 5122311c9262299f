use std::any::Any;
use std::ops::Range;
use std::sync::Arc;

use arrow_buffer::{BooleanBuffer, BooleanBufferBuilder};
use jagged_dtype::{DType, Nullability};
use jagged_error::{JaggedExpect, JaggedResult};
use jagged_scalar::Scalar;

use crate::compute::TakeRangesFn;
use crate::validity::Validity;
use crate::{Array, ArrayRef, EncodingId, IntoArray};

#[derive(Clone, Debug)]
pub struct BoolArray {
    dtype: DType,
    buffer: BooleanBuffer,
    validity: Validity,
}

impl BoolArray {
    pub const ID: EncodingId = EncodingId::new_ref("jagged.bool");

    pub fn try_new(buffer: BooleanBuffer, validity: Validity) -> JaggedResult<Self> {
        validity.check_len(buffer.len())?;
        Ok(Self {
            dtype: DType::Bool(validity.nullability()),
            buffer,
            validity,
        })
    }

    pub fn new(buffer: BooleanBuffer, nullability: Nullability) -> Self {
        Self::try_new(buffer, Validity::from_nullability(nullability))
            .jagged_expect("uniform validity fits any length")
    }

    pub fn boolean_buffer(&self) -> &BooleanBuffer {
        &self.buffer
    }

    /// Create a new BoolArray from a set of nullable boolean values.
    pub fn from_option_iter<I: IntoIterator<Item = Option<bool>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut validity = BooleanBufferBuilder::new(lower);
        let mut values = BooleanBufferBuilder::new(lower);
        for value in iter {
            validity.append(value.is_some());
            values.append(value.unwrap_or_default());
        }

        Self::try_new(values.finish(), Validity::from(validity.finish()))
            .jagged_expect("validity built alongside values")
    }
}

impl FromIterator<bool> for BoolArray {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self::new(BooleanBuffer::from_iter(iter), Nullability::NonNullable)
    }
}

impl Array for BoolArray {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_array(&self) -> ArrayRef {
        self.clone().into_array()
    }

    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn dtype(&self) -> &DType {
        &self.dtype
    }

    fn encoding(&self) -> EncodingId {
        Self::ID
    }

    fn validity(&self) -> Validity {
        self.validity.clone()
    }

    fn valid_scalar_at(&self, index: usize) -> JaggedResult<Scalar> {
        Ok(Scalar::bool(
            self.buffer.value(index),
            self.dtype.nullability(),
        ))
    }

    fn take_ranges_fn(&self) -> Option<&dyn TakeRangesFn> {
        Some(self)
    }
}

impl TakeRangesFn for BoolArray {
    fn take_ranges(&self, ranges: &[Range<usize>]) -> JaggedResult<ArrayRef> {
        let total = ranges.iter().map(|r| r.len()).sum();
        let mut values = BooleanBufferBuilder::new(total);
        for range in ranges {
            values.append_buffer(&self.buffer.slice(range.start, range.len()));
        }
        Ok(BoolArray::try_new(values.finish(), self.validity.take_ranges(ranges))?.into_array())
    }
}

impl IntoArray for BoolArray {
    fn into_array(self) -> ArrayRef {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use jagged_scalar::Scalar;

    use crate::Array;
    use crate::arrays::BoolArray;

    #[test]
    fn nullable_bools() {
        let array = BoolArray::from_option_iter([Some(true), None, Some(false)]);
        assert!(array.dtype().is_nullable());
        assert_eq!(array.scalar_at(0).unwrap(), Scalar::from(true));
        assert!(array.scalar_at(1).unwrap().is_null());
        assert_eq!(array.scalar_at(2).unwrap(), Scalar::from(false));
    }
}
