mod common;

use lox_runtime::{ObjType, Value};

#[test]
fn foo_bar_foo() {
    let mut rt = common::runtime();

    let foo = Value::obj(rt.copy_string(b"foo"));
    let bar = Value::obj(rt.take_string(b"bar".to_vec()));
    let foo_again = Value::obj(rt.take_string(String::from("foo").into_bytes()));

    let strings: Vec<_> = rt
        .heap()
        .iter()
        .filter(|(_, obj)| obj.obj_type() == ObjType::String)
        .collect();
    assert_eq!(strings.len(), 2);
    assert_eq!(foo, foo_again);
    assert_ne!(foo, bar);

    let mut rendered = Vec::new();
    for v in [foo, bar, foo_again] {
        let mut out = Vec::new();
        rt.write_object(&mut out, v).unwrap();
        rendered.push(out);
    }
    assert_eq!(rendered, vec![b"foo".to_vec(), b"bar".to_vec(), b"foo".to_vec()]);
}
