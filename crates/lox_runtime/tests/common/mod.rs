#![allow(dead_code)]

use lox_runtime::{ObjectId, Runtime};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn runtime() -> Runtime {
    init_logging();
    Runtime::new()
}

/// Heap list order, newest first.
pub fn heap_ids(rt: &Runtime) -> Vec<ObjectId> {
    rt.heap().iter().map(|(id, _)| id).collect()
}
