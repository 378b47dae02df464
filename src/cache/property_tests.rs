//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check key derivation and memoization properties over
//! generated inputs.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{build_key, CachedCall, CallArgs, ManualClock, ResourceCache};
use crate::config::CacheConfig;

// == Test Configuration ==
const TEST_TTL_SECS: u64 = 300;

// == Strategies ==
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}"
}

/// Scalars and small nested values, the shapes producers take as arguments
fn arg_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ,:=\\[\\]{}\"-]{0,16}".prop_map(Value::String),
    ];
    leaf.prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| json!(m)),
        ]
    })
}

fn kwargs_strategy() -> impl Strategy<Value = HashMap<String, Value>> {
    prop::collection::hash_map(name_strategy(), arg_strategy(), 0..6)
}

fn cache_with_clock() -> (Arc<ResourceCache>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(0));
    let cache = Arc::new(ResourceCache::with_clock(
        &CacheConfig::with_ttl_seconds(TEST_TTL_SECS),
        clock.clone(),
    ));
    (cache, clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Keyword arguments produce the same key whatever order they are given in.
    #[test]
    fn prop_keyword_order_independence(kwargs in kwargs_strategy()) {
        let mut pairs: Vec<_> = kwargs.into_iter().collect();

        let forward = pairs
            .iter()
            .fold(CallArgs::new(), |args, (name, value)| args.kwarg(name.clone(), value));
        pairs.reverse();
        let backward = pairs
            .iter()
            .fold(CallArgs::new(), |args, (name, value)| args.kwarg(name.clone(), value));

        prop_assert_eq!(
            build_key("p", "op", &forward),
            build_key("p", "op", &backward)
        );
    }

    // Swapping two different positional arguments changes the key.
    #[test]
    fn prop_positional_order_sensitivity(a in arg_strategy(), b in arg_strategy()) {
        prop_assume!(a != b);

        let ab = CallArgs::new().arg(&a).arg(&b);
        let ba = CallArgs::new().arg(&b).arg(&a);

        prop_assert_ne!(build_key("p", "op", &ab), build_key("p", "op", &ba));
    }

    // Different single positional values give different keys.
    #[test]
    fn prop_positional_value_sensitivity(a in arg_strategy(), b in arg_strategy()) {
        prop_assume!(a != b);

        let key_a = build_key("p", "op", &CallArgs::new().arg(&a));
        let key_b = build_key("p", "op", &CallArgs::new().arg(&b));

        prop_assert_ne!(key_a, key_b);
    }

    // Key derivation is pure: same inputs, same key.
    #[test]
    fn prop_key_is_deterministic(
        prefix in name_strategy(),
        operation in name_strategy(),
        positional in prop::collection::vec(arg_strategy(), 0..4),
        kwargs in kwargs_strategy()
    ) {
        let build = || {
            let args = positional.iter().fold(CallArgs::new(), |args, v| args.arg(v));
            let args = kwargs
                .iter()
                .fold(args, |args, (name, value)| args.kwarg(name.clone(), value));
            build_key(&prefix, &operation, &args)
        };

        prop_assert_eq!(build(), build());
    }

    // N identical calls collapse into one producer call and one entry.
    #[test]
    fn prop_hit_collapsing(
        calls in 1usize..20,
        positional in prop::collection::vec(arg_strategy(), 0..3)
    ) {
        let (cache, _) = cache_with_clock();
        let invocations = AtomicUsize::new(0);
        let cached = CachedCall::new(cache.clone(), "p", "op", |_: &CallArgs| {
            invocations.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(json!(["A", "B"]))
        });
        let args = positional.iter().fold(CallArgs::new(), |args, v| args.arg(v));

        for _ in 0..calls {
            prop_assert_eq!(cached.call(&args), Ok(json!(["A", "B"])));
        }

        prop_assert_eq!(invocations.load(Ordering::SeqCst), 1);
        prop_assert_eq!(cache.count(), 1);
    }

    // Reads before expiry hit; reads at or after expiry miss.
    #[test]
    fn prop_ttl_boundary(ttl_ms in 1u64..1_000_000, offset in 0u64..1_000_000) {
        let (cache, clock) = cache_with_clock();
        let invocations = AtomicUsize::new(0);
        let cached = CachedCall::new(cache, "p", "op", |_: &CallArgs| {
            invocations.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(json!(1))
        })
        .with_ttl(Duration::from_millis(ttl_ms));

        cached.call(&CallArgs::new()).unwrap();
        clock.set(offset);
        cached.call(&CallArgs::new()).unwrap();

        let expected = if offset < ttl_ms { 1 } else { 2 };
        prop_assert_eq!(invocations.load(Ordering::SeqCst), expected);
    }

    // A failing producer never changes the entry count.
    #[test]
    fn prop_failure_transparency(
        prefill in prop::collection::vec(name_strategy(), 0..10),
        message in "[a-zA-Z ]{1,20}"
    ) {
        let (cache, _) = cache_with_clock();
        for key in &prefill {
            cache.set(key.clone(), json!(key));
        }
        let before = cache.stats().total_entries;

        let expected = message.clone();
        let cached = CachedCall::new(cache.clone(), "p", "op", move |_: &CallArgs| {
            Err::<Value, _>(expected.clone())
        });

        prop_assert_eq!(cached.call(&CallArgs::new()), Err(message));
        prop_assert_eq!(cache.stats().total_entries, before);
    }

    // Clear empties the store and turns every earlier key into a miss.
    #[test]
    fn prop_clear_resets(keys in prop::collection::vec(name_strategy(), 1..20)) {
        let (cache, _) = cache_with_clock();
        for key in &keys {
            cache.set(key.clone(), json!(true));
        }

        cache.clear();

        prop_assert_eq!(cache.stats().total_entries, 0);
        for key in &keys {
            prop_assert!(cache.get(key).is_none(), "Key '{}' survived clear", key);
        }
    }

    // Approximate size equals the summed serialized length of stored values.
    #[test]
    fn prop_approximate_size_matches_serialized_values(
        values in prop::collection::hash_map(name_strategy(), arg_strategy(), 0..10)
    ) {
        let (cache, _) = cache_with_clock();
        let mut expected = 0;
        for (key, value) in &values {
            expected += serde_json::to_vec(value).unwrap().len();
            cache.set(key.clone(), value.clone());
        }

        prop_assert_eq!(cache.approximate_size(), expected);
    }
}
