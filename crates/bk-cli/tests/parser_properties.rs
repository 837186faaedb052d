//! Property tests for the argument tokenizer

use bk_cli::args::{RawValue, parse};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[a-z]{2,9}"
}

fn value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./]{1,12}"
}

proptest! {
    #[test]
    fn flag_value_pairs_round_through(pairs in prop::collection::btree_map(name(), value(), 0..6)) {
        let tokens: Vec<String> = pairs
            .iter()
            .flat_map(|(k, v)| [format!("--{k}"), v.clone()])
            .collect();

        let args = parse(&tokens).unwrap();

        prop_assert_eq!(args.len(), pairs.len());
        for (k, v) in &pairs {
            prop_assert_eq!(args.get(k), Some(&RawValue::Str(v.clone())));
        }
    }

    #[test]
    fn bundles_set_every_character(chars in prop::collection::btree_set("[a-uw-z]", 2..6)) {
        let bundle: String = chars.iter().map(String::as_str).collect();
        let args = parse([format!("-{bundle}")]).unwrap();

        prop_assert_eq!(args.len(), chars.len());
        for c in &chars {
            prop_assert_eq!(args.get(c), Some(&RawValue::Flag(true)));
        }
    }

    #[test]
    fn leading_value_is_always_rejected(
        first in value(),
        rest in prop::collection::vec(value(), 0..4),
    ) {
        let tokens: Vec<String> = std::iter::once(first).chain(rest).collect();
        prop_assert!(parse(&tokens).is_err());
    }

    #[test]
    fn trailing_flags_are_true(flags in prop::collection::btree_set(name(), 1..5)) {
        let tokens: Vec<String> = flags.iter().map(|f| format!("--{f}")).collect();
        let args = parse(&tokens).unwrap();

        for f in &flags {
            prop_assert_eq!(args.get(f), Some(&RawValue::Flag(true)));
        }
    }
}
