use std::any::Any;

use arrow_buffer::BooleanBufferBuilder;
use jagged_dtype::{DType, Nullability};
use jagged_error::JaggedExpect;

use crate::arrays::BoolArray;
use crate::builders::ArrayBuilder;
use crate::builders::lazy_validity_builder::LazyNullBufferBuilder;
use crate::{ArrayRef, IntoArray};

pub struct BoolBuilder {
    inner: BooleanBufferBuilder,
    nulls: LazyNullBufferBuilder,
    nullability: Nullability,
    dtype: DType,
}

impl BoolBuilder {
    pub fn with_capacity(nullability: Nullability, capacity: usize) -> Self {
        Self {
            inner: BooleanBufferBuilder::new(capacity),
            nulls: LazyNullBufferBuilder::new(capacity),
            nullability,
            dtype: DType::Bool(nullability),
        }
    }

    pub fn append_value(&mut self, value: bool) {
        self.inner.append(value);
        self.nulls.append_non_null();
    }

    pub fn append_option(&mut self, value: Option<bool>) {
        match value {
            Some(value) => self.append_value(value),
            None => self.append_null(),
        }
    }
}

impl ArrayBuilder for BoolBuilder {
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
        self.inner.len()
    }

    fn append_nulls(&mut self, n: usize) {
        self.inner.append_n(n, false);
        self.nulls.append_n_nulls(n);
    }

    fn finish(&mut self) -> ArrayRef {
        let validity = self.nulls.finish_with_nullability(self.nullability);
        BoolArray::try_new(self.inner.finish(), validity)
            .jagged_expect("validity built alongside values")
            .into_array()
    }
}
