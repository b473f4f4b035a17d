// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merging of configuration maps.
//!
//! Sources are merged left to right in the order they were registered. Nested maps
//! present on both sides are merged recursively; in every other case the value from
//! the later source replaces the earlier one.

use crate::domain::{ConfigMap, ConfigValue};

/// Merges `source` over `destination` and returns the result.
///
/// # Examples
///
/// ```
/// use layercfg::domain::merge::merge;
/// use layercfg::domain::{ConfigMap, ConfigValue};
///
/// let mut base = ConfigMap::new();
/// base.insert("a".to_string(), ConfigValue::from(1));
/// let mut overlay = ConfigMap::new();
/// overlay.insert("a".to_string(), ConfigValue::from(2));
///
/// let merged = merge(base, overlay);
/// assert_eq!(merged["a"], ConfigValue::from(2));
/// ```
pub fn merge(mut destination: ConfigMap, source: ConfigMap) -> ConfigMap {
    merge_into(&mut destination, source);
    destination
}

/// Merges `source` into `destination` in place.
pub fn merge_into(destination: &mut ConfigMap, source: ConfigMap) {
    for (key, incoming) in source {
        match destination.get_mut(&key) {
            None => {
                destination.insert(key, incoming);
            }
            Some(current) => match (current, incoming) {
                (ConfigValue::Map(existing), ConfigValue::Map(nested)) => {
                    merge_into(existing, nested);
                }
                (current, incoming) => replace_value(&key, current, incoming),
            },
        }
    }
}

/// Folds `sources` in order into a single map.
pub fn merge_all<I>(sources: I) -> ConfigMap
where
    I: IntoIterator<Item = ConfigMap>,
{
    sources.into_iter().fold(ConfigMap::new(), merge)
}

/// Replaces a value that is not merged recursively.
///
/// This covers scalar overrides as well as shape conflicts where one side is a map
/// and the other a scalar. The later value wins outright and its shape is kept;
/// no reconciliation is attempted.
fn replace_value(key: &str, current: &mut ConfigValue, incoming: ConfigValue) {
    if current.is_map() != incoming.is_map() {
        tracing::trace!(
            "Replacing {} with {} at key '{}'",
            current.kind(),
            incoming.kind(),
            key
        );
    }
    *current = incoming;
}
