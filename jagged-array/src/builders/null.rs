use std::any::Any;

use jagged_dtype::DType;

use crate::arrays::NullArray;
use crate::builders::ArrayBuilder;
use crate::{ArrayRef, IntoArray};

static NULL_DTYPE: DType = DType::Null;

pub struct NullBuilder {
    length: usize,
}

impl Default for NullBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NullBuilder {
    pub fn new() -> Self {
        Self { length: 0 }
    }
}

impl ArrayBuilder for NullBuilder {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn dtype(&self) -> &DType {
        &NULL_DTYPE
    }

    fn len(&self) -> usize {
        self.length
    }

    fn append_nulls(&mut self, n: usize) {
        self.length += n;
    }

    fn finish(&mut self) -> ArrayRef {
        NullArray::new(std::mem::take(&mut self.length)).into_array()
    }
}
