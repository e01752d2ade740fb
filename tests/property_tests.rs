//! Property-based tests for the layout guarantees of the encoder.
//!
//! Each property is checked against generated inputs: map ordering, bullet
//! cycling, field order, skip rules and annotation parsing.

use proptest::prelude::*;
use serde_human::tag::parse_tag;
use serde_human::{to_string, to_string_with_options, Field, HumanOptions, Map, Struct, Value};

fn keys_and_values() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::btree_map("[a-z0-9]{1,8}", any::<i64>(), 1..12)
        .prop_map(|m| m.into_iter().collect())
}

fn field_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9_]{0,10}"
}

/// Wraps `value` in `depth` single-element sequences.
fn nest(value: Value, depth: usize) -> Value {
    (0..depth).fold(value, |inner, _| Value::Seq(vec![inner]))
}

proptest! {
    #[test]
    fn prop_map_output_independent_of_insertion_order(
        entries in keys_and_values(),
        seed in any::<u64>(),
    ) {
        let forward: Map = entries
            .iter()
            .map(|(k, v)| (Value::from(k.as_str()), Value::from(*v)))
            .collect();

        let mut shuffled = entries.clone();
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled.reverse();
        let backward: Map = shuffled
            .iter()
            .map(|(k, v)| (Value::from(k.as_str()), Value::from(*v)))
            .collect();

        prop_assert_eq!(to_string(&forward).unwrap(), to_string(&backward).unwrap());
    }

    #[test]
    fn prop_map_keys_sorted_lexicographically(entries in keys_and_values()) {
        let map: Map = entries
            .iter()
            .map(|(k, v)| (Value::from(k.as_str()), Value::from(*v)))
            .collect();
        let text = to_string(&map).unwrap();

        let keys: Vec<&str> = text
            .lines()
            .skip(1)
            .filter_map(|line| line.strip_prefix("* "))
            .filter_map(|line| line.split(':').next())
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(keys.len(), entries.len());
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn prop_bullet_cycles_with_depth(
        depth in 1usize..8,
        symbols in prop::collection::vec("[+*~#-]", 1..4),
    ) {
        let value = nest(Value::from("leaf"), depth);
        let options = HumanOptions::new().with_list_symbols(symbols.clone()).with_indent(2);
        let text = to_string_with_options(&value, options).unwrap();

        let lines: Vec<&str> = text.lines().skip(1).collect();
        prop_assert_eq!(lines.len(), depth);
        for (i, line) in lines.iter().enumerate() {
            let d = i + 1;
            let expected = format!("{}{}", " ".repeat(2 * i), symbols[(d - 1) % symbols.len()]);
            prop_assert!(
                line.starts_with(&expected),
                "line {:?} expected prefix {:?}",
                line,
                expected
            );
        }
    }

    #[test]
    fn prop_fields_keep_declaration_order(
        names in prop::collection::btree_set(field_name(), 1..10),
    ) {
        let mut names: Vec<String> = names.into_iter().collect();
        names.reverse();
        let root: Struct = names
            .iter()
            .enumerate()
            .map(|(i, name)| Field::new(name.as_str(), &i))
            .collect();

        let text = to_string(&root).unwrap();
        let labels: Vec<&str> = text.lines().filter_map(|l| l.split(':').next()).collect();
        prop_assert_eq!(labels, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn prop_skip_and_omit_empty(name in field_name(), value in any::<i32>()) {
        let skipped = Struct::new().with(Field::new(name.as_str(), &value).tag("human", "-"));
        prop_assert_eq!(to_string(&skipped).unwrap(), "");

        let omitted = Struct::new()
            .with(Field::new(name.as_str(), &value).tag("human", ",omitempty"));
        let text = to_string(&omitted).unwrap();
        if value == 0 {
            prop_assert_eq!(text, "");
        } else {
            prop_assert_eq!(text, format!("{}: {}\n", name, value));
        }
    }

    #[test]
    fn prop_valid_tags_parse(name in "[A-Za-z0-9_]{0,12}", omit in any::<bool>()) {
        let raw = if omit { format!("{},omitempty", name) } else { name.clone() };
        let tag = parse_tag(&raw).unwrap();
        prop_assert_eq!(tag.name, name);
        prop_assert_eq!(tag.omit_empty, omit);
    }

    #[test]
    fn prop_invalid_tags_keep_raw_string(
        prefix in "[a-z]{0,4}",
        symbol in "[ !&/$.:;]",
        suffix in "[a-z]{0,4}",
    ) {
        let raw = format!("{}{}{}", prefix, symbol, suffix);
        let err = parse_tag(&raw).unwrap_err();
        prop_assert_eq!(err.as_invalid_tag(), Some(raw.as_str()));
    }
}
