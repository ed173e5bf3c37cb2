use lox_core::{ObjectId, Value, fnv1a};

use crate::config::RuntimeConfig;
use crate::core::heap::{Heap, ManagedObject, ObjType, out_of_memory};
use crate::core::intern::Strings;
use crate::core::string::{LoxString, byte_layout};
use crate::errors::ObjectError;

/// Owns every heap object and the interning registry.
///
/// Independent runtimes never share objects; an [`ObjectId`] is only
/// meaningful to the runtime that returned it.
pub struct Runtime {
    pub(crate) heap: Heap,
    pub(crate) strings: Strings,
    config: RuntimeConfig,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        log::debug!(
            "runtime created: heap_capacity={}, strings_capacity={}",
            config.heap_capacity,
            config.strings_capacity
        );
        Self {
            heap: Heap::with_capacity(config.heap_capacity),
            strings: Strings::with_capacity(config.strings_capacity),
            config,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    /// Build a string from a buffer the caller gives up.
    ///
    /// If equal content is already interned the buffer is dropped before
    /// returning the existing object; otherwise the buffer becomes the new
    /// string's storage (see [`LoxString`] for when that moves the bytes).
    pub fn take_string(&mut self, buffer: Vec<u8>) -> ObjectId {
        let hash = fnv1a(&buffer);
        if let Some(id) = self.strings.find(&self.heap, &buffer, hash) {
            log::trace!("intern hit {:?}, released {} byte buffer", id, buffer.len());
            return id;
        }
        self.new_string(LoxString::from_owned(buffer, hash))
    }

    /// Build a string from bytes the caller keeps. Nothing is allocated when
    /// equal content is already interned.
    pub fn copy_string(&mut self, source: &[u8]) -> ObjectId {
        let hash = fnv1a(source);
        if let Some(id) = self.strings.find(&self.heap, source, hash) {
            log::trace!("intern hit {:?}", id);
            return id;
        }
        self.new_string(LoxString::from_slice(source, hash))
    }

    fn new_string(&mut self, string: LoxString) -> ObjectId {
        let hash = string.hash();
        let len = string.len();
        let id = self.heap.alloc(ManagedObject::Str(string));
        self.strings.insert(hash, id);
        log::trace!("intern miss {:?}, hash={:#010x}, len={}", id, hash, len);
        id
    }

    pub fn intern(&mut self, s: &str) -> Value {
        Value::obj(self.copy_string(s.as_bytes()))
    }

    pub fn string_value(&mut self, buffer: Vec<u8>) -> Value {
        Value::obj(self.take_string(buffer))
    }

    // ------------------------------------------------------------------
    // Type tests and checked accessors
    // ------------------------------------------------------------------

    pub fn obj_type(&self, value: Value) -> Result<ObjType, ObjectError> {
        let id = value
            .as_obj()
            .ok_or_else(|| ObjectError::type_mismatch("object", value.type_name()))?;
        Ok(self.heap.get(id)?.obj_type())
    }

    /// True only when `value` is an object reference AND the object's
    /// discriminant is `ty`.
    pub fn is_obj_type(&self, value: Value, ty: ObjType) -> bool {
        self.obj_type(value).is_ok_and(|t| t == ty)
    }

    pub fn is_string(&self, value: Value) -> bool {
        self.is_obj_type(value, ObjType::String)
    }

    pub fn as_string(&self, value: Value) -> Result<&LoxString, ObjectError> {
        let id = value
            .as_obj()
            .ok_or_else(|| ObjectError::type_mismatch(ObjType::String.name(), value.type_name()))?;
        self.heap.get(id)?.as_string()
    }

    pub fn as_bytes(&self, value: Value) -> Result<&[u8], ObjectError> {
        Ok(self.as_string(value)?.as_bytes())
    }

    pub fn values_equal(&self, a: Value, b: Value) -> bool {
        a.equals(b)
    }

    /// String `+`: the joined bytes are handed to [`Runtime::take_string`],
    /// so the result is interned like any other string.
    pub fn concatenate(&mut self, a: Value, b: Value) -> Result<Value, ObjectError> {
        let buffer = {
            let left = self.as_bytes(a)?;
            let right = self.as_bytes(b)?;
            let total = left.len() + right.len();
            let mut buffer = Vec::new();
            // +1 leaves room for the terminator so adopting the buffer never reallocates.
            if buffer.try_reserve_exact(total + 1).is_err() {
                out_of_memory(byte_layout(total + 1));
            }
            buffer.extend_from_slice(left);
            buffer.extend_from_slice(right);
            buffer
        };
        Ok(self.string_value(buffer))
    }
}
