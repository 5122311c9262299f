use std::any::Any;

use jagged_buffer::{BufferMut, buffer_mut};
use jagged_dtype::{DType, Nullability};
use jagged_error::JaggedExpect;

use crate::arrays::VarBinArray;
use crate::builders::ArrayBuilder;
use crate::builders::lazy_validity_builder::LazyNullBufferBuilder;
use crate::{ArrayRef, IntoArray};

pub struct Utf8Builder {
    offsets: BufferMut<u64>,
    bytes: BufferMut<u8>,
    nulls: LazyNullBufferBuilder,
    dtype: DType,
}

impl Utf8Builder {
    pub fn with_capacity(nullability: Nullability, capacity: usize) -> Self {
        let mut offsets = BufferMut::with_capacity(capacity + 1);
        offsets.push(0);
        Self {
            offsets,
            bytes: BufferMut::empty(),
            nulls: LazyNullBufferBuilder::new(capacity),
            dtype: DType::Utf8(nullability),
        }
    }

    pub fn append_value<S: AsRef<str>>(&mut self, value: S) {
        self.bytes.extend_from_slice(value.as_ref().as_bytes());
        self.offsets.push(self.bytes.len() as u64);
        self.nulls.append_non_null();
    }

    pub fn append_option<S: AsRef<str>>(&mut self, value: Option<S>) {
        match value {
            Some(value) => self.append_value(value),
            None => self.append_null(),
        }
    }
}

impl ArrayBuilder for Utf8Builder {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn dtype(&self) -> &DType {
        &self.dtype
    }

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    fn append_nulls(&mut self, n: usize) {
        self.offsets.push_n(self.bytes.len() as u64, n);
        self.nulls.append_n_nulls(n);
    }

    fn finish(&mut self) -> ArrayRef {
        let offsets = std::mem::replace(&mut self.offsets, buffer_mut![0u64]);
        let bytes = std::mem::take(&mut self.bytes);
        let validity = self.nulls.finish_with_nullability(self.dtype.nullability());
        VarBinArray::try_new(offsets.freeze(), bytes.freeze(), validity)
            .jagged_expect("strings were appended from valid utf8")
            .into_array()
    }
}
