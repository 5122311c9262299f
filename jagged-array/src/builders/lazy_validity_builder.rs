use arrow_buffer::{BooleanBuffer, BooleanBufferBuilder};
use jagged_dtype::Nullability;
use jagged_error::{JaggedExpect, jagged_panic};

use crate::validity::Validity;

/// A validity bitmap builder that only allocates once a null is appended.
pub struct LazyNullBufferBuilder {
    inner: Option<BooleanBufferBuilder>,
    len: usize,
    capacity: usize,
}

impl LazyNullBufferBuilder {
    /// Creates a new empty builder.
    /// `capacity` is the number of bits in the null buffer.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: None,
            len: 0,
            capacity,
        }
    }

    #[inline]
    pub fn append_n_non_nulls(&mut self, n: usize) {
        if let Some(buf) = self.inner.as_mut() {
            buf.append_n(n, true)
        } else {
            self.len += n;
        }
    }

    #[inline]
    pub fn append_non_null(&mut self) {
        self.append_n_non_nulls(1)
    }

    #[inline]
    pub fn append_n_nulls(&mut self, n: usize) {
        self.materialize_if_needed();
        self.inner
            .as_mut()
            .jagged_expect("buffer just materialized")
            .append_n(n, false);
    }

    pub fn finish(&mut self) -> Option<BooleanBuffer> {
        self.len = 0;
        Some(self.inner.take()?.finish())
    }

    /// Finishes into the [`Validity`] of an array with the given nullability.
    pub fn finish_with_nullability(&mut self, nullability: Nullability) -> Validity {
        match (self.finish(), nullability) {
            (None, Nullability::NonNullable) => Validity::NonNullable,
            (Some(_), Nullability::NonNullable) => {
                jagged_panic!("Non-nullable builder has null values")
            }
            (None, Nullability::Nullable) => Validity::AllValid,
            (Some(nulls), Nullability::Nullable) => Validity::from(nulls),
        }
    }

    #[inline]
    fn materialize_if_needed(&mut self) {
        if self.inner.is_none() {
            self.materialize()
        }
    }

    // This only happens once per builder
    #[cold]
    #[inline(never)]
    fn materialize(&mut self) {
        if self.inner.is_none() {
            let mut b = BooleanBufferBuilder::new(self.len.max(self.capacity));
            b.append_n(self.len, true);
            self.inner = Some(b);
        }
    }
}
