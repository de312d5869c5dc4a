use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Active filter selection sent with a data request.
///
/// Keys are dimension names. An empty value never gets stored: setting a key
/// to `""` removes it, so an absent key always means "no filter on that
/// dimension". Equality ignores insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: IndexMap<String, String>,
}

impl ParameterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key` to `value`. Returns `true` when the key is present afterwards.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();
        if key.is_empty() || value.is_empty() {
            self.entries.shift_remove(&key);
            return false;
        }
        self.entries.insert(key, value);
        true
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes the set as `key=value` pairs joined by `&`.
    ///
    /// Keys and values are percent-encoded. An empty set yields `""`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&urlencoding::encode(key));
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.set(key, value);
        }
        set
    }
}

impl<'de> Deserialize<'de> for ParameterSet {
    /// Decodes a flat JSON object; empty keys and values are dropped like in `set`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<String, String>::deserialize(deserializer)
            .map(|entries| entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::ParameterSet;

    #[test]
    fn empty_value_removes_existing_key() {
        let mut params = ParameterSet::new().with("location", "Remote");
        assert!(!params.set("location", ""));
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = ParameterSet::new().with("location", "NYC").with("job", "Engineer");
        let b = ParameterSet::new().with("job", "Engineer").with("location", "NYC");
        assert_eq!(a, b);
    }

    #[test]
    fn query_string_percent_encodes_values() {
        let params = ParameterSet::new()
            .with("location", "New York")
            .with("job", "R&D");
        assert_eq!(params.to_query_string(), "location=New%20York&job=R%26D");
    }
}
