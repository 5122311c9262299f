#![deny(missing_docs)]

//! Typed buffers backing jagged arrays.
//!
//! A [`Buffer`] is immutable and cheap to clone: clones share the same allocation, which is how a
//! list kernel hands its input offsets to its output without copying them. A [`BufferMut`] is the
//! growable counterpart, frozen into a [`Buffer`] once fully written. Both sit on top of the
//! Arrow buffers, so items are any [`ArrowNativeType`].

mod buffer;
mod buffer_mut;
mod macros;

pub use arrow_buffer::ArrowNativeType;
pub use buffer::*;
pub use buffer_mut::*;
