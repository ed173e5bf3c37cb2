//! A runtime shared between threads.
//!
//! Allocation and interning run under one lock, so threads racing to intern
//! equal content all receive the same object.

use std::sync::Arc;

use lox_core::{ObjectId, Value};
use parking_lot::Mutex;

use crate::runtime::Runtime;

#[derive(Clone)]
pub struct SharedRuntime(Arc<Mutex<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Arc::new(Mutex::new(runtime)))
    }

    pub fn copy_string(&self, source: &[u8]) -> ObjectId {
        self.0.lock().copy_string(source)
    }

    pub fn take_string(&self, buffer: Vec<u8>) -> ObjectId {
        self.0.lock().take_string(buffer)
    }

    pub fn intern(&self, s: &str) -> Value {
        self.0.lock().intern(s)
    }

    /// Run `f` with exclusive access to the runtime.
    pub fn with<R>(&self, f: impl FnOnce(&mut Runtime) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// The runtime back, if this is the last handle.
    pub fn try_unwrap(self) -> Result<Runtime, Self> {
        Arc::try_unwrap(self.0)
            .map(Mutex::into_inner)
            .map_err(Self)
    }
}
