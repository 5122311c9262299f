#![deny(missing_docs)]

//! A type system for jagged arrays
//!
//! This crate contains the logical types understood by the list kernels: the always-null type,
//! booleans, fixed-width primitives, UTF-8 strings, and variable-length lists of any of these.

pub use dtype::*;
pub use nullability::*;
pub use ptype::*;

mod dtype;
mod nullability;
mod ptype;
