use crate::collections::NameValueCollection;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

/// Read-only binding data exposed by an execution context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingContext {
    data: IndexMap<String, Value>,
}

impl BindingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary key/value pairs. Empty keys are skipped.
    pub fn from_values<K, I>(values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut data = IndexMap::new();
        for (key, value) in values {
            let key = key.into();
            if key.is_empty() {
                trace!("Skipping binding data entry with an empty key");
                continue;
            }
            data.insert(key, value);
        }
        Self { data }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.data.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// String-valued binding data; unkeyed and empty-keyed entries are skipped.
impl From<&NameValueCollection> for BindingContext {
    fn from(collection: &NameValueCollection) -> Self {
        let keyed = collection.iter().filter_map(|(key, value)| match key {
            Some(key) => Some((key.to_string(), Value::String(value))),
            None => {
                trace!("Skipping binding data entry without a key");
                None
            }
        });
        Self::from_values(keyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_collection_keeps_string_values() {
        let collection: NameValueCollection = [("Custom-Header-1", "one"), ("Custom-Header-2", "two")]
            .into_iter()
            .collect();
        let binding = BindingContext::from(&collection);

        assert_eq!(binding.len(), 2);
        assert_eq!(binding.get("Custom-Header-1"), Some(&json!("one")));
        assert_eq!(
            binding.keys().collect::<Vec<_>>(),
            vec!["Custom-Header-1", "Custom-Header-2"]
        );
    }

    #[test]
    fn test_from_collection_skips_malformed_keys() {
        let mut collection = NameValueCollection::new();
        collection.add_entry(None, "orphan");
        collection.add("", "blank");
        collection.add("kept", "yes");

        let binding = BindingContext::from(&collection);
        assert_eq!(binding.len(), 1);
        assert_eq!(binding.get("kept"), Some(&json!("yes")));
    }

    #[test]
    fn test_from_values_accepts_json() {
        let binding = BindingContext::from_values([("id", json!(123)), ("tags", json!(["a"]))]);
        assert_eq!(binding.get("id"), Some(&json!(123)));
        assert_eq!(binding.iter().count(), 2);
    }

    #[test]
    fn test_empty_by_default() {
        assert!(BindingContext::new().is_empty());
    }
}
