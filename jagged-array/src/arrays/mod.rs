//! All the built-in encoding schemes and arrays.

mod bool;
mod constant;
mod list;
mod null;
mod primitive;
mod varbin;

pub use bool::*;
pub use constant::*;
pub use list::*;
pub use null::*;
pub use primitive::*;
pub use varbin::*;
