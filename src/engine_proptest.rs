//! Property-based tests for the formatting engine.
//!
//! These tests use proptest to generate structured values, serialize them
//! compactly, and verify the invariants canonical formatting promises:
//! formatting is deterministic, idempotent, and value-preserving.

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;
    use serde_json::Value;

    use crate::engine::{self, FormatOptions};
    use crate::language::Language;

    /// A strategy producing JSON values with plain ASCII strings and
    /// integer numbers. Floats are left out on purpose: their shortest
    /// round-trip representation is serde_json's concern, not the
    /// formatter's.
    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[ -~]{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        /// Property: formatting valid JSON always succeeds and ends with
        /// exactly one trailing newline.
        #[test]
        fn json_format_terminates_with_newline(value in json_value()) {
            let input = serde_json::to_string(&value).unwrap();
            let formatted = engine::format_text(&input, Language::Json, &FormatOptions::default()).unwrap();
            prop_assert!(formatted.ends_with('\n'));
            prop_assert!(!formatted.ends_with("\n\n"));
        }

        /// Property: formatting is idempotent (formatting the output again
        /// changes nothing).
        #[test]
        fn json_format_is_idempotent(value in json_value()) {
            let input = serde_json::to_string(&value).unwrap();
            let once = engine::format_text(&input, Language::Json, &FormatOptions::default()).unwrap();
            let twice = engine::format_text(&once, Language::Json, &FormatOptions::default()).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Property: formatting preserves the parsed value exactly.
        #[test]
        fn json_format_preserves_value(value in json_value()) {
            let input = serde_json::to_string(&value).unwrap();
            let formatted = engine::format_text(&input, Language::Json, &FormatOptions::default()).unwrap();
            let reparsed: Value = serde_json::from_str(&formatted).unwrap();
            prop_assert_eq!(reparsed, value);
        }

        /// Property: the indent options only affect whitespace, never the
        /// parsed value.
        #[test]
        fn json_indent_options_do_not_change_value(value in json_value(), tab_width in 0usize..8) {
            let input = serde_json::to_string(&value).unwrap();
            let options = FormatOptions { tab_width, ..FormatOptions::default() };
            let formatted = engine::format_text(&input, Language::Json, &options).unwrap();
            let reparsed: Value = serde_json::from_str(&formatted).unwrap();
            prop_assert_eq!(reparsed, value);
        }
    }

    proptest! {
        /// Property: YAML formatting of simple string maps is idempotent.
        #[test]
        fn yaml_format_is_idempotent(map in prop::collection::btree_map("[a-z]{1,8}", "[a-z0-9 ]{0,12}", 0..6)) {
            let input = serde_yaml::to_string(&map).unwrap();
            let once = engine::format_text(&input, Language::Yaml, &FormatOptions::default()).unwrap();
            let twice = engine::format_text(&once, Language::Yaml, &FormatOptions::default()).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Property: TOML formatting of flat string tables is idempotent
        /// and value-preserving.
        #[test]
        fn toml_format_is_idempotent(map in prop::collection::btree_map("[a-z]{1,8}", "[a-z0-9]{0,12}", 0..6)) {
            let input = toml::to_string(&map).unwrap();
            let once = engine::format_text(&input, Language::Toml, &FormatOptions::default()).unwrap();
            let twice = engine::format_text(&once, Language::Toml, &FormatOptions::default()).unwrap();
            prop_assert_eq!(&once, &twice);

            let reparsed: std::collections::BTreeMap<String, String> = toml::from_str(&once).unwrap();
            prop_assert_eq!(reparsed, map);
        }
    }
}
