//! Adapters from key-value sources to the string mapping used for
//! placeholder substitution.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value as JsonValue};

/// A source of `{key}` substitution values.
///
/// The resulting map is ordered by key, which fixes the order in which
/// placeholders are substituted.
pub trait ToStringMap {
    fn to_string_map(&self) -> BTreeMap<String, String>;
}

impl<T: ToStringMap + ?Sized> ToStringMap for &T {
    fn to_string_map(&self) -> BTreeMap<String, String> {
        (**self).to_string_map()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> ToStringMap for BTreeMap<K, V> {
    fn to_string_map(&self) -> BTreeMap<String, String> {
        collect_pairs(self.iter())
    }
}

impl<K: AsRef<str>, V: AsRef<str>, S: BuildHasher> ToStringMap for HashMap<K, V, S> {
    fn to_string_map(&self) -> BTreeMap<String, String> {
        collect_pairs(self.iter())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> ToStringMap for [(K, V)] {
    fn to_string_map(&self) -> BTreeMap<String, String> {
        collect_pairs(self.iter().map(|(k, v)| (k, v)))
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> ToStringMap for [(K, V); N] {
    fn to_string_map(&self) -> BTreeMap<String, String> {
        self.as_slice().to_string_map()
    }
}

/// Object members become entries. Any other JSON value is an empty mapping.
impl ToStringMap for JsonValue {
    fn to_string_map(&self) -> BTreeMap<String, String> {
        match self {
            JsonValue::Object(members) => members.to_string_map(),
            _ => BTreeMap::new(),
        }
    }
}

impl ToStringMap for Map<String, JsonValue> {
    fn to_string_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(key, value)| (key.clone(), json_text(value)))
            .collect()
    }
}

/// Strings are used verbatim and `null` is empty; everything else is
/// rendered as compact JSON.
fn json_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

fn collect_pairs<'a, K, V>(pairs: impl Iterator<Item = (&'a K, &'a V)>) -> BTreeMap<String, String>
where
    K: AsRef<str> + 'a,
    V: AsRef<str> + 'a,
{
    pairs
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect()
}
