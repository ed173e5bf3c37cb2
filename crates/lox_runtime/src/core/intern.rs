//! String interning registry.
//!
//! Buckets are keyed by the string's FNV-1a hash. The hash only narrows the
//! search: a candidate is a match when its bytes are equal, so two different
//! strings that collide simply share a bucket.

use super::heap::Heap;
use lox_core::{FastHashMap, ObjectId, fast_map_new, fast_map_with_capacity};
use smallvec::SmallVec;

type Bucket = SmallVec<[ObjectId; 1]>;

pub struct Strings {
    buckets: FastHashMap<u32, Bucket>,
    len: usize,
}

impl Default for Strings {
    fn default() -> Self {
        Self::new()
    }
}

impl Strings {
    pub fn new() -> Self {
        Self {
            buckets: fast_map_new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: fast_map_with_capacity(capacity),
            len: 0,
        }
    }

    /// Canonical string with exactly these bytes, if one was interned.
    pub fn find(&self, heap: &Heap, bytes: &[u8], hash: u32) -> Option<ObjectId> {
        let bucket = self.buckets.get(&hash)?;
        bucket.iter().copied().find(|&id| {
            heap.get(id)
                .and_then(|obj| obj.as_string())
                .is_ok_and(|s| s.as_bytes() == bytes)
        })
    }

    /// Register a freshly allocated string. The caller must have checked
    /// [`Strings::find`] first.
    pub(crate) fn insert(&mut self, hash: u32, id: ObjectId) {
        self.buckets.entry(hash).or_default().push(id);
        self.len += 1;
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct hashes; smaller than `len` only on collisions.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
