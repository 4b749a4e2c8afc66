//! Tests for the parameter filter
//!
//! Optional inputs the caller left unset must never reach the request body,
//! while explicit values (including JSON null) pass through untouched.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{json, Map, Value};

    use crate::core::parameter::{filter_defined_params, scalar_to_string, select_params};

    fn refilter(map: &Map<String, Value>) -> Map<String, Value> {
        filter_defined_params(map.clone().into_iter().map(|(k, v)| (k, Some(v))))
    }

    #[test]
    fn test_filter_drops_undefined_entries() {
        let filtered = filter_defined_params([
            ("a", Some(json!(1))),
            ("b", None),
            ("c", Some(json!("x"))),
        ]);

        assert_eq!(Value::Object(filtered), json!({"a": 1, "c": "x"}));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_defined_params([
            ("a", Some(json!(1))),
            ("b", None),
            ("c", Some(json!("x"))),
        ]);
        let twice = refilter(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_keeps_explicit_null_and_falsy_values() {
        let filtered = filter_defined_params([
            ("nothing", Some(Value::Null)),
            ("zero", Some(json!(0))),
            ("empty", Some(json!(""))),
            ("off", Some(json!(false))),
        ]);

        assert_eq!(filtered.len(), 4);
        assert_eq!(filtered["nothing"], Value::Null);
        assert_eq!(filtered["off"], json!(false));
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let filtered = filter_defined_params([
            ("zeta", Some(json!(1))),
            ("alpha", None),
            ("mid", Some(json!(2))),
            ("beta", Some(json!(3))),
        ]);

        let keys: Vec<&str> = filtered.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "mid", "beta"]);
    }

    #[test]
    fn test_filter_empty_input() {
        let filtered = filter_defined_params(Vec::<(String, Option<Value>)>::new());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_select_params_marks_absent_inputs_undefined() {
        let inputs = json!({"name": "Flag", "tags": ["a"], "unused": 1});
        let inputs = inputs.as_object().unwrap();

        let selected = select_params(inputs, ["name", "description", "tags"]);

        assert_eq!(
            selected,
            vec![
                ("name".to_string(), Some(json!("Flag"))),
                ("description".to_string(), None),
                ("tags".to_string(), Some(json!(["a"]))),
            ]
        );
    }

    #[test]
    fn test_scalar_to_string() {
        assert_eq!(scalar_to_string(&json!("key")), Some("key".to_string()));
        assert_eq!(scalar_to_string(&json!(42)), Some("42".to_string()));
        assert_eq!(scalar_to_string(&json!(true)), Some("true".to_string()));
        assert_eq!(scalar_to_string(&json!(null)), None);
        assert_eq!(scalar_to_string(&json!(["a"])), None);
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[a-z]{0,8}".prop_map(Value::String),
        ]
    }

    proptest! {
        /// Filtering twice yields the same mapping as filtering once, and
        /// exactly the defined entries survive.
        #[test]
        fn filter_is_idempotent_for_any_input(
            entries in prop::collection::vec(("[a-z]{1,6}", prop::option::of(arb_value())), 0..16)
        ) {
            let once = filter_defined_params(entries.clone());
            let twice = refilter(&once);
            prop_assert_eq!(&once, &twice);

            for (name, value) in once.iter() {
                // Later duplicates overwrite earlier ones, so check against the last defined entry
                let last = entries
                    .iter()
                    .rev()
                    .find(|(n, v)| n == name && v.is_some())
                    .and_then(|(_, v)| v.clone());
                prop_assert_eq!(Some(value.clone()), last);
            }
        }
    }
}
