use extend_file::{extend_file, FileInput, CANONICAL_KEYS};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::String),
    ]
}

fn nested_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("data".to_string()),
        Just("locals".to_string()),
        "k_[a-z]{1,4}",
    ]
}

fn nested_value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(nested_key(), inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn top_level_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("path".to_string()),
        Just("content".to_string()),
        Just("data".to_string()),
        Just("orig".to_string()),
        Just("locals".to_string()),
        Just("original".to_string()),
        "k_[a-z]{1,4}",
    ]
}

fn object_of(keys: impl Strategy<Value = String>) -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(keys, nested_value(), 0..8).prop_map(|m| m.into_iter().collect())
}

fn file_input() -> impl Strategy<Value = Value> {
    prop_oneof![
        leaf(),
        object_of(top_level_key()).prop_map(Value::Object),
    ]
}

proptest! {
    #[test]
    fn output_has_exactly_the_canonical_keys(
        file in file_input(),
        options in object_of(top_level_key()),
    ) {
        let record = extend_file(file, Some(&options));
        let value = record.to_value();
        let mut keys: Vec<&str> = value
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        let mut expected = CANONICAL_KEYS.to_vec();
        expected.sort_unstable();
        prop_assert_eq!(keys, expected);
        prop_assert_eq!(record.orig().content(), record.content.as_str());
        prop_assert_eq!(&value["orig"]["content"], &Value::String(record.content.clone()));
    }

    #[test]
    fn overflow_keys_are_relocated_into_orig(extra in object_of("k_[a-z]{1,4}")) {
        let mut input = extra.clone();
        input.insert("content".into(), Value::String("body".into()));
        let record = extend_file(Value::Object(input), None);
        for (key, value) in &extra {
            prop_assert_eq!(record.orig().get(key), Some(value));
        }
    }

    #[test]
    fn normalizing_twice_is_a_no_op(
        file in file_input(),
        options in object_of(top_level_key()),
    ) {
        let once = extend_file(file, Some(&options));
        let twice = extend_file(FileInput::from(once.clone()), None);
        prop_assert_eq!(twice, once);
    }
}
