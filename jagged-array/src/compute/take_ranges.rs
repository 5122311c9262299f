use std::ops::Range;

use jagged_error::{JaggedResult, jagged_bail};

use crate::builders::{ArrayBuilderExt, builder_with_capacity};
use crate::{Array, ArrayRef};

/// Gathers the concatenation of element ranges out of an array.
pub trait TakeRangesFn {
    /// Returns a new array holding `self[r]` for each range `r`, in order.
    ///
    /// Ranges have already been bounds-checked against the array.
    fn take_ranges(&self, ranges: &[Range<usize>]) -> JaggedResult<ArrayRef>;
}

/// Copies the elements of each range of `array`, in order, into a new array.
///
/// Ranges may be empty, overlap, or come in any order. The result has the dtype of `array`,
/// and element validity is gathered along with the values.
pub fn take_ranges(array: &dyn Array, ranges: &[Range<usize>]) -> JaggedResult<ArrayRef> {
    for range in ranges {
        if range.start > range.end {
            jagged_bail!(
                "Range start {} is greater than its end {}",
                range.start,
                range.end
            );
        }
        if range.end > array.len() {
            jagged_bail!(OutOfBounds: range.end, 0, array.len());
        }
    }

    let taken = match array.take_ranges_fn() {
        Some(f) => f.take_ranges(ranges)?,
        None => {
            log::debug!(
                "No take_ranges implementation found for {}, falling back to scalar_at",
                array.encoding()
            );
            take_ranges_fallback(array, ranges)?
        }
    };

    debug_assert_eq!(
        taken.len(),
        ranges.iter().map(|r| r.len()).sum::<usize>(),
        "take_ranges length mismatch"
    );
    debug_assert!(
        taken.dtype().eq_ignore_nullability(array.dtype()),
        "take_ranges dtype mismatch"
    );

    Ok(taken)
}

fn take_ranges_fallback(array: &dyn Array, ranges: &[Range<usize>]) -> JaggedResult<ArrayRef> {
    let total = ranges.iter().map(|r| r.len()).sum();
    let mut builder = builder_with_capacity(array.dtype(), total);
    for index in ranges.iter().flat_map(|r| r.clone()) {
        builder.append_scalar(&array.scalar_at(index)?)?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::Arc;

    use jagged_dtype::{DType, Nullability, PType};
    use jagged_error::{JaggedError, JaggedResult};
    use jagged_scalar::Scalar;
    use rstest::rstest;

    use crate::arrays::{BoolArray, ConstantArray, NullArray, PrimitiveArray, VarBinArray};
    use crate::compute::take_ranges;
    use crate::validity::Validity;
    use crate::{Array, ArrayRef, EncodingId, IntoArray};

    /// An array with no gather kernel: the values `0..len` as `i64`, every third one null.
    #[derive(Debug, Clone)]
    struct SequenceArray {
        dtype: DType,
        len: usize,
    }

    impl Array for SequenceArray {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn to_array(&self) -> ArrayRef {
            Arc::new(self.clone())
        }

        fn len(&self) -> usize {
            self.len
        }

        fn dtype(&self) -> &DType {
            &self.dtype
        }

        fn encoding(&self) -> EncodingId {
            EncodingId::new_ref("test.sequence")
        }

        fn validity(&self) -> Validity {
            (0..self.len).map(|i| i % 3 != 2).collect()
        }

        fn valid_scalar_at(&self, index: usize) -> JaggedResult<Scalar> {
            Ok(Scalar::primitive(index as i64, Nullability::Nullable))
        }
    }

    fn assert_same_values(actual: &dyn Array, expected: &dyn Array) {
        assert_eq!(actual.len(), expected.len());
        for i in 0..expected.len() {
            assert_eq!(actual.scalar_at(i).unwrap(), expected.scalar_at(i).unwrap());
        }
    }

    #[test]
    fn fallback_uses_scalars() {
        let sequence = SequenceArray {
            dtype: DType::Primitive(PType::I64, Nullability::Nullable),
            len: 10,
        };
        let taken = take_ranges(&sequence, &[7..9, 0..3]).unwrap();
        assert!(taken.is::<PrimitiveArray>());
        assert_same_values(
            &taken,
            &PrimitiveArray::from_option_iter([Some(7i64), None, Some(0), Some(1), None]),
        );
    }

    #[rstest]
    #[case(PrimitiveArray::from_option_iter([Some(1i32), None, Some(3), Some(4)]).into_array())]
    #[case(BoolArray::from_option_iter([Some(true), Some(false), None, Some(true)]).into_array())]
    #[case(VarBinArray::from_option_iter([Some("a"), Some("bc"), None, Some("")], Nullability::Nullable).into_array())]
    #[case(NullArray::new(4).into_array())]
    #[case(ConstantArray::new(5u8, 4).into_array())]
    fn gather_matches_scalars(#[case] array: ArrayRef) {
        let ranges = [2..4, 0..0, 1..2, 0..4];
        let taken = take_ranges(&array, &ranges).unwrap();
        assert_eq!(taken.encoding(), array.encoding());
        assert_eq!(taken.len(), 7);
        let indices = ranges.iter().flat_map(|r| r.clone());
        for (i, index) in indices.enumerate() {
            assert_eq!(
                taken.scalar_at(i).unwrap(),
                array.scalar_at(index).unwrap()
            );
        }
    }

    #[test]
    fn out_of_bounds() {
        let array = PrimitiveArray::from_iter([1u8, 2, 3]);
        assert!(matches!(
            take_ranges(&array, &[1..4]),
            Err(JaggedError::OutOfBounds(4, 0, 3, _))
        ));
    }

    #[test]
    fn empty_ranges() {
        let array = PrimitiveArray::from_iter([1u8, 2, 3]);
        let taken = take_ranges(&array, &[]).unwrap();
        assert!(taken.is_empty());
        assert_eq!(taken.dtype(), array.dtype());
    }
}
