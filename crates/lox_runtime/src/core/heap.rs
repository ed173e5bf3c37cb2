//! Object headers, the heap arena and the heap list.
//!
//! Objects are stored in allocation order and never move, so an [`ObjectId`]
//! stays valid for the lifetime of the heap. Every heap draws its own tag and
//! stamps it into the handles it issues, so a handle from another heap is
//! rejected even when its index is in range here. Each header also links to the
//! object allocated just before it; walking those links from [`Heap::head`]
//! visits every live object exactly once, newest first. This is the list a
//! collector would trace.

use super::string::LoxString;
use crate::errors::ObjectError;
use lox_core::ObjectId;
use std::alloc::Layout;
use std::sync::atomic::{AtomicU16, Ordering};

// Tag 0 is never handed out, so a bare `ObjectId(n)` belongs to no heap.
static NEXT_HEAP_TAG: AtomicU16 = AtomicU16::new(1);

// Tags wrap after 65535 heaps; only heaps that far apart can share one.
fn next_heap_tag() -> u16 {
    loop {
        let tag = NEXT_HEAP_TAG.fetch_add(1, Ordering::Relaxed);
        if tag != 0 {
            return tag;
        }
    }
}

/// Discriminant stored in every object header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjType {
    String,
}

impl ObjType {
    pub const ALL: [ObjType; 1] = [ObjType::String];

    pub fn name(self) -> &'static str {
        match self {
            ObjType::String => "string",
        }
    }
}

/// Per-object metadata: the type tag and the heap list link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjHeader {
    obj_type: ObjType,
    next: Option<ObjectId>,
}

impl ObjHeader {
    #[inline]
    pub fn obj_type(&self) -> ObjType {
        self.obj_type
    }

    /// The object allocated immediately before this one.
    #[inline]
    pub fn next(&self) -> Option<ObjectId> {
        self.next
    }
}

#[derive(Debug)]
pub enum ManagedObject {
    Str(LoxString),
}

impl ManagedObject {
    pub fn obj_type(&self) -> ObjType {
        match self {
            ManagedObject::Str(_) => ObjType::String,
        }
    }

    /// Estimated footprint: header plus owned buffers.
    pub fn size(&self) -> usize {
        let base = std::mem::size_of::<HeapObject>();
        let deep = match self {
            ManagedObject::Str(s) => s.len() + 1,
        };
        base + deep
    }
}

#[derive(Debug)]
pub struct HeapObject {
    header: ObjHeader,
    body: ManagedObject,
}

impl HeapObject {
    #[inline]
    pub fn header(&self) -> &ObjHeader {
        &self.header
    }

    #[inline]
    pub fn obj_type(&self) -> ObjType {
        self.header.obj_type
    }

    #[inline]
    pub fn body(&self) -> &ManagedObject {
        &self.body
    }

    pub fn as_string(&self) -> Result<&LoxString, ObjectError> {
        match &self.body {
            ManagedObject::Str(s) => Ok(s),
            #[allow(unreachable_patterns)]
            other => Err(ObjectError::type_mismatch(
                ObjType::String.name(),
                other.obj_type().name(),
            )),
        }
    }
}

pub struct Heap {
    tag: u16,
    objects: Vec<HeapObject>,
    head: Option<ObjectId>,
    alloc_count: usize,
    alloc_bytes: usize,
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heap {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut objects = Vec::new();
        if objects.try_reserve_exact(capacity).is_err() {
            out_of_memory(
                Layout::array::<HeapObject>(capacity).unwrap_or(Layout::new::<HeapObject>()),
            );
        }
        Self {
            tag: next_heap_tag(),
            objects,
            head: None,
            alloc_count: 0,
            alloc_bytes: 0,
        }
    }

    /// Allocate a managed object and splice it onto the head of the heap list.
    ///
    /// This is the only way an object enters the heap. Running out of memory
    /// (or out of arena indices) terminates the process.
    pub fn alloc(&mut self, obj: ManagedObject) -> ObjectId {
        let index = self.objects.len();
        if index > ObjectId::MAX_INDEX {
            log::error!("heap exhausted: {} objects allocated", self.objects.len());
            std::alloc::handle_alloc_error(Layout::new::<HeapObject>());
        }
        if self.objects.try_reserve(1).is_err() {
            out_of_memory(Layout::new::<HeapObject>());
        }

        let id = ObjectId::new(self.tag, index);
        let header = ObjHeader {
            obj_type: obj.obj_type(),
            next: self.head,
        };
        let size = obj.size();
        self.objects.push(HeapObject { header, body: obj });
        self.head = Some(id);
        self.alloc_count += 1;
        self.alloc_bytes += size;

        log::trace!("alloc {:?} {:?} ({} bytes)", id, header.obj_type, size);
        id
    }

    /// Resolve a handle issued by this heap. Handles from any other heap are
    /// `InvalidHandle`, whatever their index.
    pub fn get(&self, id: ObjectId) -> Result<&HeapObject, ObjectError> {
        if id.heap() != self.tag {
            return Err(ObjectError::InvalidHandle(id));
        }
        self.objects.get(id.index()).ok_or(ObjectError::InvalidHandle(id))
    }

    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        id.heap() == self.tag && id.index() < self.objects.len()
    }

    /// Tag stamped into every handle this heap issues.
    #[inline]
    pub fn tag(&self) -> u16 {
        self.tag
    }

    /// Most recently allocated object.
    #[inline]
    pub fn head(&self) -> Option<ObjectId> {
        self.head
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Walk the heap list from its head.
    pub fn iter(&self) -> HeapIter<'_> {
        HeapIter {
            heap: self,
            cursor: self.head,
        }
    }

    pub fn alloc_count(&self) -> usize {
        self.alloc_count
    }

    pub fn alloc_bytes(&self) -> usize {
        self.alloc_bytes
    }

    /// Get memory statistics by object type
    pub fn memory_stats(&self) -> String {
        let mut str_count = 0usize;
        let mut str_bytes = 0usize;

        for (_, obj) in self.iter() {
            match obj.body() {
                ManagedObject::Str(_) => {
                    str_count += 1;
                    str_bytes += obj.body().size();
                }
            }
        }

        let heap_overhead = self.objects.capacity() * std::mem::size_of::<HeapObject>();
        format!(
            "=== Heap Memory Stats ===\n\
             Str:      {:>8} objects, {:>12} bytes\n\
             --------------------------\n\
             Total:    {:>8} objects, {:>12} bytes\n\
             Heap vec: {:>8} slots,   {:>12} bytes overhead",
            str_count,
            str_bytes,
            self.alloc_count,
            self.alloc_bytes,
            self.objects.capacity(),
            heap_overhead,
        )
    }
}

/// Iterator over the heap list, newest object first.
pub struct HeapIter<'a> {
    heap: &'a Heap,
    cursor: Option<ObjectId>,
}

impl<'a> Iterator for HeapIter<'a> {
    type Item = (ObjectId, &'a HeapObject);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let obj = self.heap.objects.get(id.index())?;
        self.cursor = obj.header.next;
        Some((id, obj))
    }
}

pub(crate) fn out_of_memory(layout: Layout) -> ! {
    log::error!("out of memory allocating {} bytes", layout.size());
    std::alloc::handle_alloc_error(layout)
}
