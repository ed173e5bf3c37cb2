//! Lox runtime object model.
//!
//! Heap objects live in an arena owned by a [`Runtime`]; [`Value`]s refer to
//! them through [`ObjectId`] handles. Strings are interned, so two string
//! values with equal content always carry the same handle.

pub mod config;
pub mod core;
pub mod errors;
mod printer;
mod runtime;
pub mod sync;
mod util;

pub use config::RuntimeConfig;
pub use crate::core::heap::{Heap, HeapObject, ManagedObject, ObjHeader, ObjType};
pub use crate::core::intern::Strings;
pub use crate::core::string::LoxString;
pub use errors::ObjectError;
pub use runtime::Runtime;
pub use sync::SharedRuntime;
pub use util::Appendable;

pub use lox_core::{ObjectId, Value, fnv1a};
