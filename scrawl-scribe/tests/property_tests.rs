//! Property-based tests for the scribe primitives

use proptest::prelude::*;
use scrawl_scribe::{JsonScribe, Scalar};

fn emit(f: impl FnOnce(&mut JsonScribe<'_, Vec<u8>>)) -> String {
    let mut out = Vec::new();
    let mut scribe = JsonScribe::new(&mut out);
    f(&mut scribe);
    String::from_utf8(out).expect("scribe output is UTF-8")
}

proptest! {
    #[test]
    fn string_members_round_trip_through_a_parser(
        entries in prop::collection::vec((".*", ".*"), 0..16)
    ) {
        let out = emit(|s| {
            s.open_object().unwrap();
            for (key, value) in &entries {
                s.open_key().unwrap();
                s.append(key).unwrap();
                s.close().unwrap();
                s.scalar(Scalar::from(value.as_str())).unwrap();
            }
            s.close().unwrap();
        });

        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid document");
        // Duplicate keys collapse last-wins in the parsed map, same as when
        // inserting the entries into a map in order.
        let mut expected = serde_json::Map::new();
        for (key, value) in &entries {
            expected.insert(key.clone(), serde_json::Value::String(value.clone()));
        }
        prop_assert_eq!(parsed, serde_json::Value::Object(expected));
    }

    #[test]
    fn sibling_count_yields_exactly_n_minus_one_commas(count in 0usize..32) {
        let out = emit(|s| {
            s.open_array().unwrap();
            for _ in 0..count {
                s.empty_object().unwrap();
            }
            s.close().unwrap();
        });
        prop_assert_eq!(out.matches(',').count(), count.saturating_sub(1));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid document");
        prop_assert_eq!(parsed.as_array().expect("array").len(), count);
    }

    #[test]
    fn mixed_scalar_arrays_always_parse(
        values in prop::collection::vec(any::<f64>(), 0..32)
    ) {
        let out = emit(|s| {
            s.open_array().unwrap();
            for &value in &values {
                s.scalar(Scalar::from(value)).unwrap();
            }
            s.close().unwrap();
        });
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid document");
        let elements = parsed.as_array().expect("array");
        prop_assert_eq!(elements.len(), values.len());
        for (element, value) in elements.iter().zip(&values) {
            if value.is_finite() {
                prop_assert!(element.is_number());
            } else {
                prop_assert!(element.is_null());
            }
        }
    }

    #[test]
    fn streamed_values_match_wholesale_values(chunks in prop::collection::vec(".*", 0..8)) {
        let streamed = emit(|s| {
            s.open_array().unwrap();
            s.open_value().unwrap();
            for chunk in &chunks {
                s.append(chunk).unwrap();
            }
            s.close().unwrap();
            s.close().unwrap();
        });
        let whole = chunks.concat();
        let wholesale = emit(|s| {
            s.open_array().unwrap();
            s.scalar(Scalar::from(whole.as_str())).unwrap();
            s.close().unwrap();
        });
        prop_assert_eq!(streamed, wholesale);
    }

    #[test]
    fn arbitrary_nesting_stays_balanced(depth in 1usize..64) {
        let out = emit(|s| {
            for level in 0..depth {
                if level % 2 == 0 {
                    s.open_array().unwrap();
                } else {
                    s.open_object().unwrap();
                    s.open_key().unwrap();
                    s.append("inner").unwrap();
                    s.close().unwrap();
                }
            }
            // The innermost context is either an array (gets one element)
            // or an object with a pending key (gets its value)
            s.scalar(Scalar::from(0)).unwrap();
            for _ in 0..depth {
                s.close().unwrap();
            }
        });
        let _: serde_json::Value = serde_json::from_str(&out).expect("balanced document");
    }
}
