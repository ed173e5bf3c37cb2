//! Garbage collection infrastructure - base types.

/// Handle to a heap-allocated object.
///
/// A handle packs the tag of the heap that issued it (bits 32..48) with the
/// object's index in that heap's arena (bits 0..32), so the whole handle fits
/// the 48-bit payload of a boxed [`Value`](crate::Value). Handles stay valid
/// for the lifetime of their heap because objects are never moved or freed
/// while it is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl ObjectId {
    /// Largest packed handle that fits in the 48-bit payload.
    pub const MAX_RAW: usize = (1usize << 48) - 1;
    /// Largest arena index a heap can hand out.
    pub const MAX_INDEX: usize = u32::MAX as usize;

    const HEAP_SHIFT: u32 = 32;

    #[inline(always)]
    pub const fn new(heap: u16, index: usize) -> Self {
        ObjectId(((heap as usize) << Self::HEAP_SHIFT) | (index & Self::MAX_INDEX))
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 & Self::MAX_INDEX
    }

    /// Tag of the heap that issued this handle.
    #[inline(always)]
    pub fn heap(self) -> u16 {
        (self.0 >> Self::HEAP_SHIFT) as u16
    }
}
