mod common;

use lox_runtime::{ObjectError, Runtime, Value};

fn render(rt: &Runtime, v: Value) -> Vec<u8> {
    let mut out = Vec::new();
    rt.write_value(&mut out, v).unwrap();
    out
}

#[test]
fn strings_render_verbatim() {
    let mut rt = common::runtime();
    let v = rt.intern("say \"hi\"\n");
    assert_eq!(render(&rt, v), b"say \"hi\"\n");

    let raw = rt.string_value(vec![0xff, b'x', 0xfe]);
    assert_eq!(render(&rt, raw), vec![0xff, b'x', 0xfe]);
    assert_eq!(rt.display_value(raw), "\u{fffd}x\u{fffd}");
}

#[test]
fn primitives_render_like_lox() {
    let rt = common::runtime();
    let cases: [(Value, &str); 10] = [
        (Value::NIL, "nil"),
        (Value::TRUE, "true"),
        (Value::FALSE, "false"),
        (Value::from_f64(3.0), "3"),
        (Value::from_f64(-42.0), "-42"),
        (Value::from_f64(0.5), "0.5"),
        (Value::from_f64(-0.0), "-0"),
        (Value::from_f64(0.1 + 0.2), "0.30000000000000004"),
        (Value::from_f64(f64::INFINITY), "inf"),
        (Value::from_f64(f64::NAN), "NaN"),
    ];
    for (v, expected) in cases {
        assert_eq!(String::from_utf8(render(&rt, v)).unwrap(), expected);
        assert_eq!(rt.display_value(v), expected);
    }
}

#[test]
fn write_object_rejects_primitives() {
    let rt = common::runtime();
    let mut out = Vec::new();
    let err = rt.write_object(&mut out, Value::from_f64(1.0)).unwrap_err();
    assert!(matches!(err, ObjectError::TypeMismatch { expected: "object", .. }));
    assert!(out.is_empty());
    assert!(rt.print_object(Value::NIL).is_err());
}

#[test]
fn print_object_writes_to_stdout() {
    let mut rt = common::runtime();
    let v = rt.intern("");
    rt.print_object(v).unwrap();
    rt.print_value(Value::NIL).unwrap();
}
