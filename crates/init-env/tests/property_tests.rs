//! Property-based tests for filtering and merge precedence.
//!
//! Test coverage:
//! - Flat scalar objects load exactly as written.
//! - Object and array values never survive filtering.
//! - Repeated loads with overwrite return the same mapping.
//! - Without overwrite, pre-existing values win in the env and the result.

use init_env::{EnvLoader, EnvMap, EnvStore, InMemoryEnv, LoadOptions, MemFs, ScalarValue, SerdeJson};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

/// Strategy for keys: mostly environment-style, sometimes empty or
/// containing `=`, which an OS environment would refuse.
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Z][A-Z0-9_]{0,12}",
        1 => "(=[a-z0-9]{0,4})?",
    ]
}

/// Strategy for JSON scalars.
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zA-Z0-9 ._/-]{0,24}".prop_map(Value::String),
        any::<i64>().prop_map(|n| json!(n)),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
    ]
}

/// Strategy for JSON containers.
fn container_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({})),
        Just(json!([])),
        scalar_strategy().prop_map(|v| json!({ "inner": v })),
        scalar_strategy().prop_map(|v| json!([v])),
    ]
}

fn flat_object_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(key_strategy(), scalar_strategy(), 0..12)
        .prop_map(|m| m.into_iter().collect())
}

fn loader_for(document: &Map<String, Value>) -> EnvLoader<MemFs, SerdeJson> {
    let text = Value::Object(document.clone()).to_string();
    EnvLoader::new(MemFs::with_file("./config.json", text), SerdeJson)
}

fn expected(document: &Map<String, Value>) -> EnvMap {
    document
        .iter()
        .filter_map(|(k, v)| ScalarValue::from_json(v).map(|s| (k.clone(), s)))
        .collect()
}

proptest! {
    #[test]
    fn prop_flat_object_loads_exactly(document in flat_object_strategy()) {
        let mut env = InMemoryEnv::new();
        let loaded = loader_for(&document).load(&mut env, &LoadOptions::default());

        prop_assert_eq!(loaded.len(), document.len());
        for (key, value) in &document {
            let loaded_value: Value = loaded[key].clone().into();
            prop_assert_eq!(&loaded_value, value);
        }
    }

    #[test]
    fn prop_containers_are_filtered_out(
        scalars in flat_object_strategy(),
        containers in prop::collection::btree_map("[a-z]{1,8}", container_strategy(), 0..6),
    ) {
        let mut document = scalars.clone();
        for (key, value) in containers {
            document.insert(key, value);
        }

        let mut env = InMemoryEnv::new();
        let loaded = loader_for(&document).load(&mut env, &LoadOptions::default());

        prop_assert_eq!(loaded, expected(&scalars));
    }

    #[test]
    fn prop_repeated_load_is_idempotent(document in flat_object_strategy()) {
        let mut env = InMemoryEnv::new();
        let loader = loader_for(&document);

        let first = loader.load(&mut env, &LoadOptions::default());
        let env_after_first = env.clone();
        let second = loader.load(&mut env, &LoadOptions::default());

        prop_assert_eq!(first, second);
        prop_assert_eq!(env, env_after_first);
    }

    #[test]
    fn prop_existing_values_win_without_overwrite(
        document in flat_object_strategy(),
        existing in prop::collection::hash_map(key_strategy(), "[a-z]{1,8}", 0..8),
    ) {
        let mut env: InMemoryEnv = existing.clone().into_iter().collect();
        let options = LoadOptions::default().with_overwrite(false);

        let loaded = loader_for(&document).load(&mut env, &options);

        for (key, value) in &existing {
            let current = env.get(key);
            prop_assert_eq!(current.as_deref(), Some(value.as_str()));
            if document.contains_key(key) {
                prop_assert_eq!(&loaded[key], &ScalarValue::String(value.clone()));
            }
        }
        for (key, value) in &document {
            if !existing.contains_key(key) {
                let written = ScalarValue::from_json(value).unwrap().to_env_string();
                prop_assert_eq!(env.get(key), Some(written));
            }
        }
    }
}
