use std::ops::Range;

use jagged_buffer::BufferMut;
use jagged_error::JaggedResult;
use num_traits::AsPrimitive;

use crate::arrays::ListArray;
use crate::compute::{TakeRangesFn, take_ranges};
use crate::{ArrayRef, IntoArray};

impl TakeRangesFn for ListArray {
    fn take_ranges(&self, ranges: &[Range<usize>]) -> JaggedResult<ArrayRef> {
        let rows: usize = ranges.iter().map(|r| r.len()).sum();
        let mut offsets = BufferMut::with_capacity(rows + 1);
        offsets.push(0u64);

        let mut element_ranges: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
        let mut cursor = 0u64;
        for range in ranges {
            let start = self.offsets[range.start];
            let end = self.offsets[range.end];
            offsets.extend(
                self.offsets[range.start + 1..=range.end]
                    .iter()
                    .map(|o| o - start + cursor),
            );
            cursor += end - start;
            if end > start {
                element_ranges.push(start.as_()..end.as_());
            }
        }

        let elements = take_ranges(&self.elements, &element_ranges)?;
        Ok(ListArray::try_new(elements, offsets.freeze(), self.validity.take_ranges(ranges))?
            .into_array())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jagged_dtype::PType;

    use crate::Array;
    use crate::arrays::{ListArray, PrimitiveArray};
    use crate::compute::take_ranges;

    #[test]
    fn take_rows_of_nested_lists() {
        let list = ListArray::from_iter_opt_slow(
            [Some(vec![1i32, 2]), None, Some(vec![3]), Some(vec![4, 5, 6])],
            Arc::new(PType::I32.into()),
        )
        .unwrap();

        let taken = take_ranges(&list, &[1..2, 3..4, 0..1]).unwrap();
        let taken = taken.as_opt::<ListArray>().unwrap();

        assert_eq!(taken.len(), 3);
        assert_eq!(taken.offsets().as_slice(), &[0, 0, 3, 5]);
        assert!(!taken.is_valid(0).unwrap());
        assert!(taken.is_valid(1).unwrap());
        let elements = taken.elements().as_opt::<PrimitiveArray>().unwrap();
        assert_eq!(elements.as_slice::<i32>(), &[4, 5, 6, 1, 2]);
    }
}
