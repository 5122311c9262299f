use std::ops::Range;

use jagged_buffer::BufferMut;
use jagged_dtype::match_each_native_ptype;
use jagged_error::JaggedResult;

use crate::arrays::PrimitiveArray;
use crate::compute::TakeRangesFn;
use crate::{ArrayRef, IntoArray};

impl TakeRangesFn for PrimitiveArray {
    fn take_ranges(&self, ranges: &[Range<usize>]) -> JaggedResult<ArrayRef> {
        let total = ranges.iter().map(|r| r.len()).sum();
        let validity = self.validity.take_ranges(ranges);
        match_each_native_ptype!(self.ptype(), |$T| {
            let values = self.as_slice::<$T>();
            let mut taken = BufferMut::<$T>::with_capacity(total);
            for range in ranges {
                taken.extend_from_slice(&values[range.clone()]);
            }
            Ok(PrimitiveArray::try_new(taken.freeze(), validity)?.into_array())
        })
    }
}
