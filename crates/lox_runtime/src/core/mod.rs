//! Core runtime infrastructure.
//!
//! - `Heap` - object arena and the heap list
//! - `LoxString` - immutable string object
//! - `Strings` - interning registry

pub mod heap;
pub mod intern;
pub mod string;
