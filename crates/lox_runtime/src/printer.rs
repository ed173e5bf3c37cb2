//! Diagnostic rendering of values.
//!
//! Strings are written as their raw bytes: no quotes, no escaping, no
//! trailing newline.

use std::io::{self, Write};

use lox_core::Value;

use crate::core::heap::ManagedObject;
use crate::errors::ObjectError;
use crate::runtime::Runtime;
use crate::util::Appendable;

impl Runtime {
    /// Write an object's rendering to stdout.
    pub fn print_object(&self, value: Value) -> Result<(), ObjectError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_object(&mut out, value)?;
        out.flush()?;
        Ok(())
    }

    /// Write any value's rendering to stdout.
    pub fn print_value(&self, value: Value) -> Result<(), ObjectError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_value(&mut out, value)?;
        out.flush()?;
        Ok(())
    }

    pub fn write_object<W: Write>(&self, out: &mut W, value: Value) -> Result<(), ObjectError> {
        let id = value
            .as_obj()
            .ok_or_else(|| ObjectError::type_mismatch("object", value.type_name()))?;
        match self.heap.get(id)?.body() {
            ManagedObject::Str(s) => out.write_all(s.as_bytes())?,
        }
        Ok(())
    }

    pub fn write_value<W: Write>(&self, out: &mut W, value: Value) -> Result<(), ObjectError> {
        if value.is_obj() {
            return self.write_object(out, value);
        }
        let mut text = String::new();
        text.append_value(&value, &self.heap);
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Rendering as an owned string; invalid UTF-8 in strings is replaced.
    pub fn display_value(&self, value: Value) -> String {
        let mut text = String::new();
        text.append_value(&value, &self.heap);
        text
    }
}
