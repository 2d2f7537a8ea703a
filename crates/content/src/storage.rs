// ABOUTME: Typed JSON helpers over a client-side key/value store.
// ABOUTME: Degrade to fallbacks outside a browser or when the stored data is unusable.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::env::Environment;

/// Error reported by a [`KeyValueStore`] write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage error: {0}")]
pub struct StoreError(pub String);

/// String key/value storage, shaped like browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store with an optional size quota, in bytes of stored values.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_except(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(_, v)| v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            if self.used_except(key) + value.len() > quota {
                return Err(StoreError(format!("quota of {quota} bytes exceeded")));
            }
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads and decodes `key`, or returns `fallback` when not in a browser, the
/// key is missing or empty, or the value is not valid JSON for `T`.
pub fn get_stored<T, S>(env: &Environment, store: &S, key: &str, fallback: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    if !env.is_browser() {
        return fallback;
    }
    match store.get(key) {
        Some(raw) if !raw.is_empty() => serde_json::from_str(&raw).unwrap_or(fallback),
        _ => fallback,
    }
}

/// Encodes and writes `value`. Failures are logged, not returned.
pub fn set_stored<T, S>(env: &Environment, store: &mut S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    if !env.is_browser() {
        return;
    }
    let result = serde_json::to_string(value)
        .map_err(|e| StoreError(e.to_string()))
        .and_then(|json| store.set(key, json));
    if let Err(err) = result {
        warn!(key, %err, "failed to save to storage");
    }
}

/// Deletes `key`. Failures are logged, not returned.
pub fn remove_stored<S>(env: &Environment, store: &mut S, key: &str)
where
    S: KeyValueStore + ?Sized,
{
    if !env.is_browser() {
        return;
    }
    if let Err(err) = store.remove(key) {
        warn!(key, %err, "failed to remove from storage");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browser() -> Environment {
        Environment::browser("Linux x86_64")
    }

    #[test]
    fn round_trips_in_browser() {
        let env = browser();
        let mut store = MemoryStore::new();
        set_stored(&env, &mut store, "theme", "dark");
        assert_eq!(get_stored(&env, &store, "theme", String::new()), "dark");

        remove_stored(&env, &mut store, "theme");
        assert_eq!(get_stored(&env, &store, "theme", "light".to_string()), "light");
    }

    #[test]
    fn server_environment_is_a_no_op() {
        let env = Environment::server();
        let mut store = MemoryStore::new();
        set_stored(&env, &mut store, "k", &1);
        assert!(store.is_empty());

        store.set("k", "5".into()).unwrap();
        assert_eq!(get_stored(&env, &store, "k", 0), 0);
    }

    #[test]
    fn bad_json_falls_back() {
        let env = browser();
        let mut store = MemoryStore::new();
        store.set("count", "{oops".into()).unwrap();
        assert_eq!(get_stored(&env, &store, "count", 7u32), 7);
    }

    #[test]
    fn quota_failure_is_swallowed() {
        let env = browser();
        let mut store = MemoryStore::with_quota(4);
        set_stored(&env, &mut store, "big", "far too long");
        assert!(store.is_empty());
        set_stored(&env, &mut store, "ok", &12);
        assert_eq!(store.len(), 1);
    }
}
