// ABOUTME: Small text and collection helpers used by listing and page templates.
// ABOUTME: Truncation, number formatting, de-duplication, grouping, multi-key sorting, and ids.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use chrono::Utc;
use rand::Rng;
use serde::de::DeserializeOwned;

/// Cuts `text` to at most `max_len` characters, ending with `suffix` when cut.
///
/// Lengths are counted in chars. When `suffix` is longer than `max_len` the
/// result is just the suffix.
pub fn truncate(text: &str, max_len: usize, suffix: &str) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let keep = max_len.saturating_sub(suffix.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

/// Formats an integer with `,` thousands separators.
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Limits `value` to `[min, max]`. If `min > max`, `max` wins.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let lower = if value < min { min } else { value };
    if lower > max {
        max
    } else {
        lower
    }
}

/// Removes duplicates, keeping the first occurrence of each value.
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// Groups items by key. Each group keeps input order.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key_fn: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}

/// Returns a sorted copy of `items`, comparing with each comparator in turn
/// until one is not `Equal`. Fully equal items keep input order.
pub fn sort_by<T: Clone>(items: &[T], comparators: &[&dyn Fn(&T, &T) -> Ordering]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        comparators
            .iter()
            .map(|cmp| cmp(a, b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

/// Parses JSON, returning `fallback` on any error.
pub fn safe_json_parse<T: DeserializeOwned>(json: &str, fallback: T) -> T {
    serde_json::from_str(json).unwrap_or(fallback)
}

/// Generates an id of the form `<unix millis>-<7 base36 chars>`.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..7)
        .filter_map(|_| char::from_digit(rng.gen_range(0..36), 36))
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}
