//! Utility modules.

mod appendable;

pub use appendable::Appendable;
