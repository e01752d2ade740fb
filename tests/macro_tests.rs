use serde_human::{human, to_string, to_string_with_options, HumanOptions, Map, Number, Value};

#[test]
fn test_human_macro_null() {
    let value = human!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_human_macro_booleans() {
    assert_eq!(human!(true), Value::Bool(true));
    assert_eq!(human!(false), Value::Bool(false));
}

#[test]
fn test_human_macro_numbers() {
    assert_eq!(human!(42), Value::Number(Number::Int(42)));
    assert_eq!(human!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(human!(-123), Value::Number(Number::Int(-123)));
    assert_eq!(human!(7u64), Value::Number(Number::UInt(7)));
}

#[test]
fn test_human_macro_strings() {
    assert_eq!(human!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(human!(""), Value::String(String::new()));
}

#[test]
fn test_human_macro_sequences() {
    assert_eq!(human!([]), Value::Seq(vec![]));

    let mixed = human!([1, "hello", true, null]);
    assert_eq!(
        mixed,
        Value::Seq(vec![
            Value::Number(Number::Int(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_human_macro_maps() {
    assert_eq!(human!({}), Value::Map(Map::new()));

    let value = human!({
        "name": "Alice",
        "age": 30,
        "tags": ["admin", "dev"],
    });
    let map = value.as_map().unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.get_str("name"), Some(&Value::from("Alice")));
    assert_eq!(map.get_str("age"), Some(&Value::from(30)));
}

#[test]
fn test_human_macro_encodes_sorted() {
    let value = human!({ "test2": 2.9, "test0": "0", "test1": 1 });
    assert_eq!(
        to_string(&value).unwrap(),
        "\n* test0: 0\n* test1: 1\n* test2: 2.9\n"
    );
}

#[test]
fn test_human_macro_nested_collections() {
    let value = human!({ "outer": { "inner": [1, 2] } });
    let options = HumanOptions::new().with_list_symbols(["-", "+", "~"]);
    assert_eq!(
        to_string_with_options(&value, options).unwrap(),
        "\n- outer:\n  + inner:\n    ~ 1\n    ~ 2\n"
    );
}
