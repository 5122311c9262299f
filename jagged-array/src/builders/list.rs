use std::any::Any;
use std::sync::Arc;

use jagged_buffer::{BufferMut, buffer_mut};
use jagged_dtype::{DType, Nullability};
use jagged_error::{JaggedExpect, JaggedResult, jagged_bail};
use jagged_scalar::ListScalar;

use crate::arrays::ListArray;
use crate::builders::lazy_validity_builder::LazyNullBufferBuilder;
use crate::builders::{ArrayBuilder, ArrayBuilderExt, builder_with_capacity};
use crate::{ArrayRef, IntoArray};

/// Builder for [`ListArray`], with `u64` offsets.
pub struct ListBuilder {
    value_builder: Box<dyn ArrayBuilder>,
    offsets: BufferMut<u64>,
    nulls: LazyNullBufferBuilder,
    nullability: Nullability,
    dtype: DType,
}

impl ListBuilder {
    pub fn with_capacity(
        value_dtype: Arc<DType>,
        nullability: Nullability,
        capacity: usize,
    ) -> Self {
        // Assume two elements per row on average
        let value_builder = builder_with_capacity(value_dtype.as_ref(), 2 * capacity);
        let mut offsets = BufferMut::with_capacity(capacity + 1);

        offsets.push(0);

        Self {
            value_builder,
            offsets,
            nulls: LazyNullBufferBuilder::new(capacity),
            nullability,
            dtype: DType::List(value_dtype, nullability),
        }
    }

    pub fn append_value(&mut self, value: ListScalar) -> JaggedResult<()> {
        match value.elements() {
            None => {
                if self.nullability == Nullability::NonNullable {
                    jagged_bail!("Cannot append null value to non-nullable list");
                }
                self.append_null();
                Ok(())
            }
            Some(elements) => {
                for scalar in elements {
                    self.value_builder.append_scalar(&scalar)?;
                }
                self.nulls.append_non_null();
                self.offsets.push(self.value_builder.len() as u64);
                Ok(())
            }
        }
    }
}

impl ArrayBuilder for ListBuilder {
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
        // A null list is a zero-span offset with its validity bit unset
        self.offsets.push_n(self.value_builder.len() as u64, n);
        self.nulls.append_n_nulls(n);
    }

    fn finish(&mut self) -> ArrayRef {
        let offsets = std::mem::replace(&mut self.offsets, buffer_mut![0u64]);
        let validity = self.nulls.finish_with_nullability(self.nullability);
        ListArray::try_new(self.value_builder.finish(), offsets.freeze(), validity)
            .jagged_expect("Buffer, offsets, validity must have same length.")
            .into_array()
    }
}
