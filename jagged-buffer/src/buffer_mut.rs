use std::fmt::{Debug, Formatter};
use std::ops::{Deref, DerefMut};

use arrow_buffer::{ArrowNativeType, BufferBuilder, ScalarBuffer};

use crate::Buffer;

/// A mutable buffer of items of `T`, frozen into a [`Buffer`] once written.
pub struct BufferMut<T: ArrowNativeType>(BufferBuilder<T>);

impl<T: ArrowNativeType> BufferMut<T> {
    /// Create a new `BufferMut` with the requested capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(BufferBuilder::new(capacity))
    }

    /// Create a new empty `BufferMut`.
    pub fn empty() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new `BufferMut` holding `len` copies of `item`.
    pub fn full(item: T, len: usize) -> Self {
        let mut buffer = Self::with_capacity(len);
        buffer.push_n(item, len);
        buffer
    }

    /// Create a new `BufferMut` of `len` zeroes.
    pub fn zeroed(len: usize) -> Self {
        let mut buffer = Self::with_capacity(len);
        buffer.0.append_n_zeroed(len);
        buffer
    }

    /// Returns the number of elements written.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no elements have been written.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the capacity of the buffer in elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Appends a single element.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.0.append(value)
    }

    /// Appends `n` copies of `item`.
    #[inline]
    pub fn push_n(&mut self, item: T, n: usize) {
        self.0.append_n(n, item)
    }

    /// Appends a copy of every element of the slice.
    #[inline]
    pub fn extend_from_slice(&mut self, slice: &[T]) {
        self.0.append_slice(slice)
    }

    /// Returns the written elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Returns the written elements mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_slice_mut()
    }

    /// Freeze the buffer into an immutable, shareable [`Buffer`].
    pub fn freeze(mut self) -> Buffer<T> {
        let len = self.0.len();
        Buffer::from(ScalarBuffer::new(self.0.finish(), 0, len))
    }
}

impl<T: ArrowNativeType> Debug for BufferMut<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(&format!("BufferMut<{}>", std::any::type_name::<T>()))
            .field("length", &self.len())
            .field("as_slice", &self.as_slice())
            .finish()
    }
}

impl<T: ArrowNativeType> Default for BufferMut<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ArrowNativeType> Deref for BufferMut<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T: ArrowNativeType> DerefMut for BufferMut<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: ArrowNativeType> AsRef<[T]> for BufferMut<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: ArrowNativeType> Extend<T> for BufferMut<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<T: ArrowNativeType> FromIterator<T> for BufferMut<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut buffer = Self::with_capacity(iter.size_hint().0);
        buffer.extend(iter);
        buffer
    }
}
