//! Re-exports of third-party crates we use in the API.
//!
//! The HashMap should be preferred over the standard library variant.
//! Currently defers to [hashbrown](https://docs.rs/hashbrown/latest/hashbrown/).

pub mod hash_map;
