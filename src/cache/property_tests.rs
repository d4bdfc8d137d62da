//! Property-Based Tests for Cache Module

use proptest::prelude::*;
use std::collections::HashMap;
use std::thread::sleep;
use std::time::Duration;

use bytes::Bytes;

use crate::cache::{shared, CacheStore};

const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates raw lookup keys, valid addresses or not
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(a, b, c, d)| format!("{}.{}.{}.{}", a, b, c, d)),
        "[a-f0-9:]{2,20}",
        "[a-zA-Z0-9_.-]{1,32}",
    ]
}

fn payload_strategy() -> impl Strategy<Value = Bytes> {
    "[a-zA-Z0-9 {}\":,]{1,256}".prop_map(Bytes::from)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Bytes },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), payload_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every get returns exactly the last value set for that key
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_TTL);
        let mut model: HashMap<String, Bytes> = HashMap::new();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let got = store.get(&key);
                    prop_assert_eq!(&got, &model.get(&key).cloned());
                    if got.is_some() {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, model.len());
    }

    // Overwriting a key keeps a single entry holding the newest value
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in payload_strategy(),
        value2 in payload_strategy()
    ) {
        let mut store = CacheStore::new(TEST_TTL);

        store.set(key.clone(), value1);
        store.set(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // Sweeping fresh entries never removes anything
    #[test]
    fn prop_sweep_keeps_live_entries(
        entries in prop::collection::vec((key_strategy(), payload_strategy()), 1..40)
    ) {
        let mut store = CacheStore::new(TEST_TTL);
        for (key, value) in &entries {
            store.set(key.clone(), value.clone());
        }
        let len = store.len();

        prop_assert_eq!(store.sweep_expired(), 0);
        prop_assert_eq!(store.len(), len);
    }
}

// Fewer cases for the time-sensitive property
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // Once the TTL has elapsed every entry is invisible and a sweep drops it
    #[test]
    fn prop_ttl_expiration_behavior(
        entries in prop::collection::vec((key_strategy(), payload_strategy()), 1..20)
    ) {
        let mut store = CacheStore::new(Duration::from_millis(30));
        for (key, value) in &entries {
            store.set(key.clone(), value.clone());
        }

        sleep(Duration::from_millis(50));

        for (key, _) in &entries {
            prop_assert!(store.get(key).is_none(), "Entry '{}' should be expired", key);
        }
        let len = store.len();
        prop_assert_eq!(store.sweep_expired(), len);
        prop_assert!(store.is_empty());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Concurrent readers and writers only ever observe complete values
    #[test]
    fn prop_concurrent_operation_correctness(
        operations in prop::collection::vec(cache_op_strategy(), 10..50)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let cache = shared(CacheStore::new(TEST_TTL));
            let written: std::collections::HashSet<Bytes> = operations
                .iter()
                .filter_map(|op| match op {
                    CacheOp::Set { value, .. } => Some(value.clone()),
                    CacheOp::Get { .. } => None,
                })
                .collect();

            let mut handles = vec![];
            for op in operations {
                let cache = cache.clone();
                handles.push(tokio::spawn(async move {
                    match op {
                        CacheOp::Set { key, value } => {
                            cache.write().await.set(key, value);
                            None
                        }
                        CacheOp::Get { key } => cache.read().await.get(&key),
                    }
                }));
            }

            for handle in handles {
                let observed = handle.await.expect("Task should not panic");
                if let Some(value) = observed {
                    prop_assert!(written.contains(&value), "Read a value nobody wrote");
                }
            }

            let stats = cache.read().await.stats();
            prop_assert!(stats.hit_rate() >= 0.0 && stats.hit_rate() <= 1.0);
            Ok(())
        })?;
    }
}
