use crate::core::heap::{Heap, ManagedObject};
use lox_core::Value;

/// Text sinks that know how to render Lox values.
pub trait Appendable {
    fn append_str(&mut self, s: &str);
    fn append_i64(&mut self, i: i64);
    fn append_f64(&mut self, f: f64);
    fn append_bool(&mut self, b: bool);
    fn append_nil(&mut self);
    fn append_value(&mut self, v: &Value, heap: &Heap);
}

/// Integral numbers below this magnitude print without a fraction.
const INTEGRAL_LIMIT: f64 = 1e16;

impl Appendable for String {
    fn append_str(&mut self, s: &str) {
        self.push_str(s);
    }
    fn append_i64(&mut self, i: i64) {
        let mut buf = itoa::Buffer::new();
        self.push_str(buf.format(i));
    }
    fn append_f64(&mut self, f: f64) {
        if f == 0.0 && f.is_sign_negative() {
            self.push_str("-0");
        } else if f.fract() == 0.0 && f.abs() < INTEGRAL_LIMIT {
            self.append_i64(f as i64);
        } else {
            let mut buf = ryu::Buffer::new();
            self.push_str(buf.format(f));
        }
    }
    fn append_bool(&mut self, b: bool) {
        self.push_str(if b { "true" } else { "false" });
    }
    fn append_nil(&mut self) {
        self.push_str("nil");
    }
    fn append_value(&mut self, v: &Value, heap: &Heap) {
        if let Some(f) = v.as_number() {
            self.append_f64(f);
        } else if let Some(b) = v.as_bool() {
            self.append_bool(b);
        } else if v.is_nil() {
            self.append_nil();
        } else if let Some(obj) = v.as_obj().and_then(|id| heap.get(id).ok()) {
            match obj.body() {
                ManagedObject::Str(s) => self.push_str(&String::from_utf8_lossy(s.as_bytes())),
            }
        } else {
            self.push_str("<invalid object>");
        }
    }
}
