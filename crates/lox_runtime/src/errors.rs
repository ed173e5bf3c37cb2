//! Runtime errors and the message constants they render with.

use lox_core::ObjectId;
use std::fmt;
use std::io;

pub mod messages {
    pub const TYPE_MISMATCH: &str = "Type mismatch";
    pub const INVALID_HANDLE: &str = "Invalid object handle";
    pub const OUTPUT_FAILED: &str = "Output failed";
}

#[derive(Debug)]
pub enum ObjectError {
    /// A checked accessor was called on a value of another type.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The handle was issued by another heap, or its index is out of range.
    InvalidHandle(ObjectId),
    /// Writing a rendered value failed.
    Io(io::Error),
}

impl ObjectError {
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        ObjectError::TypeMismatch { expected, found }
    }
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectError::TypeMismatch { expected, found } => {
                write!(f, "{}: expected {}, found {}", messages::TYPE_MISMATCH, expected, found)
            }
            ObjectError::InvalidHandle(id) => write!(
                f,
                "{}: heap {} index {}",
                messages::INVALID_HANDLE,
                id.heap(),
                id.index()
            ),
            ObjectError::Io(err) => write!(f, "{}: {}", messages::OUTPUT_FAILED, err),
        }
    }
}

impl std::error::Error for ObjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ObjectError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ObjectError {
    fn from(err: io::Error) -> Self {
        ObjectError::Io(err)
    }
}
