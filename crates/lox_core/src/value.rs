//! Runtime value representation.
//!
//! Defines the runtime value representation using NaN-boxing: numbers are stored
//! as their raw `f64` bits, everything else lives inside the negative quiet-NaN
//! space with a 4-bit tag and a 48-bit payload.

use crate::gc::ObjectId;
use ahash::RandomState;
use hashbrown::HashMap;
use std::fmt;
use std::hash::Hash;

pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

/// Fixed seeds keep iteration order reproducible between runs.
pub fn fast_hasher() -> RandomState {
    RandomState::with_seeds(0, 0, 0, 0)
}

pub fn fast_map_new<K: Eq + Hash, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(fast_hasher())
}

pub fn fast_map_with_capacity<K: Eq + Hash, V>(cap: usize) -> FastHashMap<K, V> {
    HashMap::with_capacity_and_hasher(cap, fast_hasher())
}

// NaN-Boxing constants
pub const QNAN: u64 = 0x7ff8000000000000;
pub const TAG_BASE: u64 = 0xfff0000000000000;
pub const TAG_MASK: u64 = 0x000f000000000000;
pub const PAYLOAD_MASK: u64 = 0x0000ffffffffffff;

pub const TAG_NUMBER: u64 = 0x0000;
pub const TAG_NIL: u64 = 0x0001;
pub const TAG_BOOL: u64 = 0x0002;
pub const TAG_OBJ: u64 = 0x0003;

/// A Lox value: `nil`, a boolean, a number or a reference to a heap object.
///
/// Equality on `Value` itself is bit identity. Language-level equality (where
/// `0.0 == -0.0` and `NaN != NaN`) is [`Value::equals`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Value(u64);

impl Default for Value {
    fn default() -> Self {
        Self::NIL
    }
}

impl Value {
    pub const NIL: Value = Value(TAG_BASE | (TAG_NIL << 48));
    pub const TRUE: Value = Value(TAG_BASE | (TAG_BOOL << 48) | 1);
    pub const FALSE: Value = Value(TAG_BASE | (TAG_BOOL << 48));

    #[inline(always)]
    pub fn nil() -> Self {
        Self::NIL
    }

    #[inline(always)]
    pub fn from_f64(f: f64) -> Self {
        // Every NaN collapses to one pattern so no NaN payload can alias a tag.
        if f.is_nan() {
            return Self(QNAN);
        }
        Self(f.to_bits())
    }

    #[inline(always)]
    pub fn from_bool(b: bool) -> Self {
        if b { Self::TRUE } else { Self::FALSE }
    }

    #[inline(always)]
    pub fn obj(id: ObjectId) -> Self {
        debug_assert!(id.0 <= ObjectId::MAX_RAW, "object id out of range: {}", id.0);
        Self(TAG_BASE | (TAG_OBJ << 48) | (id.0 as u64 & PAYLOAD_MASK))
    }

    #[inline(always)]
    pub const fn raw(self) -> u64 {
        self.0
    }

    // -inf is the only number whose bits cover TAG_BASE; it keeps tag 0.
    #[inline(always)]
    pub fn is_number(&self) -> bool {
        (self.0 & TAG_BASE) != TAG_BASE || (self.0 & TAG_MASK) == 0
    }
    #[inline(always)]
    pub fn is_nil(&self) -> bool {
        self.0 == Self::NIL.0
    }
    #[inline(always)]
    pub fn is_bool(&self) -> bool {
        self.get_tag() == TAG_BOOL
    }
    #[inline(always)]
    pub fn is_obj(&self) -> bool {
        self.get_tag() == TAG_OBJ
    }

    #[inline(always)]
    pub fn as_number(self) -> Option<f64> {
        self.is_number().then(|| f64::from_bits(self.0))
    }

    #[inline(always)]
    pub fn as_bool(self) -> Option<bool> {
        self.is_bool().then_some((self.0 & 1) != 0)
    }

    #[inline(always)]
    pub fn as_obj(self) -> Option<ObjectId> {
        self.is_obj().then(|| ObjectId((self.0 & PAYLOAD_MASK) as usize))
    }

    pub fn get_tag(&self) -> u64 {
        if self.is_number() {
            TAG_NUMBER
        } else {
            (self.0 & TAG_MASK) >> 48
        }
    }

    /// `nil` and `false` are falsey, everything else is truthy.
    #[inline]
    pub fn is_falsey(&self) -> bool {
        self.is_nil() || *self == Self::FALSE
    }

    /// Lox equality. Objects compare by identity, which is content equality
    /// for strings because they are interned.
    pub fn equals(self, other: Value) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.0 == other.0,
            _ => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self.get_tag() {
            TAG_NUMBER => "number",
            TAG_NIL => "nil",
            TAG_BOOL => "bool",
            TAG_OBJ => "object",
            _ => "unknown",
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::from_f64(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::from_bool(b)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Self::obj(id)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get_tag() {
            TAG_NUMBER => write!(f, "Number({})", f64::from_bits(self.0)),
            TAG_NIL => write!(f, "Nil"),
            TAG_BOOL => write!(f, "Bool({})", (self.0 & 1) != 0),
            TAG_OBJ => write!(f, "Obj(id={:?})", ObjectId((self.0 & PAYLOAD_MASK) as usize)),
            tag => write!(f, "Unknown(tag={}, bits=0x{:016x})", tag, self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_infinity_is_a_number() {
        let v = Value::from_f64(f64::NEG_INFINITY);
        assert!(v.is_number());
        assert!(!v.is_obj());
        assert_eq!(v.as_number(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn nan_is_canonical() {
        let a = Value::from_f64(f64::NAN);
        let b = Value::from_f64(-f64::NAN);
        assert_eq!(a.raw(), QNAN);
        assert_eq!(a, b);
        assert!(a.is_number());
    }
}
