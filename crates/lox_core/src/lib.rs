//! Core types for the Lox runtime.
//!
//! This crate contains the fundamental types that are independent of the heap:
//! - `Value` - NaN-boxed runtime value representation
//! - `ObjectId` - Handle to heap-allocated objects
//! - `fnv1a` - Stable string hash used for interning

pub mod gc;
pub mod hash;
pub mod value;

pub use gc::ObjectId;
pub use hash::fnv1a;
pub use value::{FastHashMap, Value, fast_hasher, fast_map_new, fast_map_with_capacity};
