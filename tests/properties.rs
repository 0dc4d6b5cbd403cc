// tests/properties.rs

use std::collections::HashMap;

use dashbling_config::config::coerce::{try_parse_bool, try_parse_number};
use dashbling_config::config::{ActionRegistry, parse};
use dashbling_test_utils::builders::{JobBuilder, RawConfigBuilder};
use proptest::prelude::*;
use toml::Value;

// Case permutations of "true" / "false".
fn bool_word() -> impl Strategy<Value = (String, bool)> {
    (any::<bool>(), proptest::collection::vec(any::<bool>(), 5)).prop_map(|(truth, upper)| {
        let word = if truth { "true" } else { "false" };
        let cased: String = word
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();
        (cased, truth)
    })
}

proptest! {
    #[test]
    fn bool_words_coerce_in_any_case((word, truth) in bool_word()) {
        prop_assert_eq!(try_parse_bool(Value::String(word)), Value::Boolean(truth));
    }

    #[test]
    fn other_strings_pass_through_bool_coercion(s in "[a-z0-9]{0,8}") {
        prop_assume!(s != "true" && s != "false");
        prop_assert_eq!(try_parse_bool(Value::String(s.clone())), Value::String(s));
    }

    #[test]
    fn integer_strings_coerce_to_integers(n in any::<i64>()) {
        prop_assert_eq!(try_parse_number(Value::String(n.to_string())), Value::Integer(n));
    }

    #[test]
    fn alphabetic_strings_pass_through_number_coercion(s in "[g-z]{1,8}") {
        prop_assert_eq!(try_parse_number(Value::String(s.clone())), Value::String(s));
    }

    #[test]
    fn any_port_from_env_is_applied(port in any::<u16>()) {
        let raw = RawConfigBuilder::empty_jobs().port(1).build();
        let env: HashMap<String, String> =
            [("PORT".to_string(), port.to_string())].into_iter().collect();

        let config = parse(&raw, ".", &env, &ActionRegistry::new()).unwrap();
        prop_assert_eq!(config.port(), port);
    }

    // One bad job per index, plus optional top-level violations: the error
    // count always equals the number of violations.
    #[test]
    fn every_violation_is_reported(
        bad_actions in 0usize..5,
        bad_schedules in 0usize..5,
        bad_port in any::<bool>(),
        bad_https in any::<bool>(),
        bad_path in any::<bool>(),
    ) {
        let registry = ActionRegistry::new().with_action("ok", || {});
        let mut builder = RawConfigBuilder::empty_jobs();
        for _ in 0..bad_actions {
            builder = builder.with_job(JobBuilder::new("* * * * *", "missing"));
        }
        for _ in 0..bad_schedules {
            builder = builder.with_job(JobBuilder::new("* *", "ok"));
        }
        if bad_port {
            builder = builder.port("abc");
        }
        if bad_https {
            builder = builder.force_https("maybe");
        }
        if bad_path {
            builder = builder.event_storage_path(false);
        }

        let expected = bad_actions
            + bad_schedules
            + usize::from(bad_port)
            + usize::from(bad_https)
            + usize::from(bad_path);

        let result = parse(&builder.build(), ".", &HashMap::<String, String>::new(), &registry);
        match result {
            Ok(_) => prop_assert_eq!(expected, 0),
            Err(err) => prop_assert_eq!(err.errors().len(), expected),
        }
    }
}
