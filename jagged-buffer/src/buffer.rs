use std::fmt::{Debug, Formatter};
use std::ops::Deref;

use arrow_buffer::{ArrowNativeType, ScalarBuffer};

use crate::BufferMut;

/// An immutable buffer of items of `T`.
///
/// Cloning never copies: every clone points at the same shared allocation.
#[derive(Clone)]
pub struct Buffer<T: ArrowNativeType>(ScalarBuffer<T>);

impl<T: ArrowNativeType> Buffer<T> {
    /// Create a new empty buffer.
    pub fn empty() -> Self {
        Self::from(Vec::new())
    }

    /// Create a new buffer of `len` copies of `item`.
    pub fn full(item: T, len: usize) -> Self {
        BufferMut::full(item, len).freeze()
    }

    /// Returns the length of the buffer in elements of type T.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the buffer is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a slice over the buffer of elements of type T.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns true if both buffers view the same elements of the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.inner().ptr_eq(other.0.inner())
    }

    /// Returns the underlying Arrow buffer.
    pub fn into_inner(self) -> ScalarBuffer<T> {
        self.0
    }
}

impl<T: ArrowNativeType> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(&format!("Buffer<{}>", std::any::type_name::<T>()))
            .field("length", &self.len())
            .field("as_slice", &self.as_slice())
            .finish()
    }
}

impl<T: ArrowNativeType> Default for Buffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ArrowNativeType> Deref for Buffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T: ArrowNativeType> AsRef<[T]> for Buffer<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: ArrowNativeType> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: ArrowNativeType> From<Vec<T>> for Buffer<T> {
    fn from(values: Vec<T>) -> Self {
        Self(ScalarBuffer::from(values))
    }
}

impl<T: ArrowNativeType> From<ScalarBuffer<T>> for Buffer<T> {
    fn from(values: ScalarBuffer<T>) -> Self {
        Self(values)
    }
}

impl<T: ArrowNativeType> From<BufferMut<T>> for Buffer<T> {
    fn from(value: BufferMut<T>) -> Self {
        value.freeze()
    }
}

impl<T: ArrowNativeType> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BufferMut::from_iter(iter).freeze()
    }
}

impl<'a, T: ArrowNativeType> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
