use deep_property::{extract, get, has, normalize, set, Record};
use proptest::prelude::*;
use serde_json::{json, Value};

fn key() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ ]{0,6}"
}

fn keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(key(), 1..6)
}

proptest! {
    #[test]
    fn prop_undotted_string_is_single_key(s in "[^.]{0,12}") {
        prop_assert_eq!(normalize(&s).unwrap(), vec![s.clone()]);
    }

    #[test]
    fn prop_dotted_string_splits_on_every_dot(parts in prop::collection::vec("[^.]{0,4}", 2..6)) {
        let joined = parts.join(".");
        prop_assert_eq!(normalize(&joined).unwrap(), parts);
    }

    #[test]
    fn prop_key_list_is_copied(list in keys()) {
        let original = list.clone();
        let mut normalized = normalize(&list).unwrap();
        prop_assert_eq!(&normalized, &list);
        normalized.push("extra".to_string());
        normalized[0].push('!');
        prop_assert_eq!(list, original);
    }

    #[test]
    fn prop_non_string_elements_rejected(list in keys(), at in 0usize..6, n in any::<i64>()) {
        let mut steps: Vec<Value> = list.into_iter().map(Value::String).collect();
        let at = at.min(steps.len());
        steps.insert(at, json!(n));
        prop_assert!(normalize(&Value::Array(steps)).is_err());
    }

    #[test]
    fn prop_set_then_read_round_trips(path in keys(), n in any::<i64>()) {
        let mut data = Record::new();
        let value = json!(n);
        set(&mut data, &path, value.clone()).unwrap();
        prop_assert_eq!(get(&data, &path).unwrap(), &value);
        prop_assert!(has(&data, &path).unwrap());
        prop_assert_eq!(extract(&data, &path).unwrap(), (true, &value));
    }

    #[test]
    fn prop_unwritten_paths_are_absent(path in keys()) {
        let data = Record::new();
        prop_assert_eq!(extract(&data, &path).unwrap(), (false, &Value::Null));
        prop_assert!(!has(&data, &path).unwrap());
        prop_assert!(data.is_empty());
    }
}
