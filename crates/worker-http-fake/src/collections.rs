//! Multimaps used for request configuration and frozen request state.
//!
//! Both collections compare keys case-insensitively (ASCII) but keep the
//! casing the caller supplied, and both iterate in insertion order.

use hyper::header::HeaderName;

fn keys_match(stored: &str, wanted: &str) -> bool {
    stored.eq_ignore_ascii_case(wanted)
}

/// Ordered name/value multimap whose entries may lack a key.
///
/// Used as the input for headers, query params and binding data, and as the
/// parsed query view of a request. Values added under an existing key are
/// appended, and [`get`](Self::get) returns them comma-joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValueCollection {
    entries: Vec<NameValueEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NameValueEntry {
    key: Option<String>,
    values: Vec<String>,
}

impl NameValueEntry {
    fn joined(&self) -> String {
        self.values.join(",")
    }
}

impl NameValueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys (the unkeyed entry counts as one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: Option<&str>) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| match (entry.key.as_deref(), key) {
                (Some(stored), Some(wanted)) => keys_match(stored, wanted),
                (None, None) => true,
                _ => false,
            })
    }

    /// Append a value under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.add_entry(Some(key.into()), value);
    }

    /// Append a value under an optional key. `None` files it under the
    /// unkeyed entry.
    pub fn add_entry(&mut self, key: Option<String>, value: impl Into<String>) {
        let value = value.into();
        match self.position(key.as_deref()) {
            Some(index) => self.entries[index].values.push(value),
            None => self.entries.push(NameValueEntry {
                key,
                values: vec![value],
            }),
        }
    }

    /// Replace every value stored under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(Some(&key)) {
            Some(index) => self.entries[index].values = vec![value],
            None => self.entries.push(NameValueEntry {
                key: Some(key),
                values: vec![value],
            }),
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(Some(key)) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Comma-joined values for `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.position(Some(key)).map(|i| self.entries[i].joined())
    }

    pub fn get_values(&self, key: &str) -> Option<&[String]> {
        self.position(Some(key))
            .map(|i| self.entries[i].values.as_slice())
    }

    /// Comma-joined values of the unkeyed entry.
    pub fn unkeyed(&self) -> Option<String> {
        self.position(None).map(|i| self.entries[i].joined())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(Some(key)).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = Option<&str>> {
        self.entries.iter().map(|entry| entry.key.as_deref())
    }

    /// Iterate `(key, comma-joined values)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, String)> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_deref(), entry.joined()))
    }
}

impl<K, V> FromIterator<(K, V)> for NameValueCollection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collection = NameValueCollection::new();
        collection.extend(iter);
        collection
    }
}

impl<K, V> Extend<(K, V)> for NameValueCollection
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

/// Header multimap of a built request or response.
///
/// Names are validated as HTTP tokens when added; values are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCollection {
    entries: Vec<(String, Vec<String>)>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(stored, _)| keys_match(stored, name))
    }

    /// Append `value` under `name`, skipping value validation.
    ///
    /// Returns false (and stores nothing) when `name` is not a valid header
    /// name.
    pub fn try_add_without_validation(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        let name = name.into();
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            return false;
        }

        let value = value.into();
        match self.position(&name) {
            Some(index) => self.entries[index].1.push(value),
            None => self.entries.push((name, vec![value])),
        }
        true
    }

    /// Replace all values of `name`. Returns false for an invalid name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            return false;
        }

        let value = value.into();
        match self.position(&name) {
            Some(index) => self.entries[index].1 = vec![value],
            None => self.entries.push((name, vec![value])),
        }
        true
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.position(name)
            .map(|index| self.entries[index].1.as_slice())
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.position(name)
            .map(|index| self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderCollection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = HeaderCollection::new();
        for (name, value) in iter {
            headers.try_add_without_validation(name, value);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_value_lookup_ignores_case() {
        let mut collection = NameValueCollection::new();
        collection.add("Content-Type", "application/json");
        assert_eq!(
            collection.get("content-type").as_deref(),
            Some("application/json")
        );
        assert!(collection.contains_key("CONTENT-TYPE"));
        assert_eq!(collection.keys().collect::<Vec<_>>(), vec![Some("Content-Type")]);
    }

    #[test]
    fn test_name_value_add_appends_and_set_replaces() {
        let mut collection = NameValueCollection::new();
        collection.add("tag", "a");
        collection.add("TAG", "b");
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("tag").as_deref(), Some("a,b"));
        assert_eq!(
            collection.get_values("tag"),
            Some(&["a".to_string(), "b".to_string()][..])
        );

        collection.set("Tag", "c");
        assert_eq!(collection.get("tag").as_deref(), Some("c"));
    }

    #[test]
    fn test_name_value_unkeyed_entries() {
        let mut collection = NameValueCollection::new();
        collection.add_entry(None, "x");
        collection.add_entry(None, "y");
        collection.add("k", "v");
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.unkeyed().as_deref(), Some("x,y"));
        assert_eq!(collection.keys().collect::<Vec<_>>(), vec![None, Some("k")]);
    }

    #[test]
    fn test_name_value_remove() {
        let mut collection: NameValueCollection = [("a", "1"), ("b", "2")].into_iter().collect();
        assert!(collection.remove("A"));
        assert!(!collection.remove("missing"));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_headers_preserve_case_and_match_insensitively() {
        let mut headers = HeaderCollection::new();
        assert!(headers.try_add_without_validation("X-Custom-Header", "one"));
        assert!(headers.try_add_without_validation("x-custom-header", "two"));

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.first("X-CUSTOM-HEADER"), Some("one"));
        let (name, values) = headers.iter().next().unwrap();
        assert_eq!(name, "X-Custom-Header");
        assert_eq!(values, &["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_headers_reject_invalid_names() {
        let mut headers = HeaderCollection::new();
        assert!(!headers.try_add_without_validation("", "value"));
        assert!(!headers.try_add_without_validation("bad header", "value"));
        assert!(!headers.insert("bad:header", "value"));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_headers_insert_replaces() {
        let mut headers = HeaderCollection::new();
        headers.try_add_without_validation("Authorization", "Basic a");
        headers.insert("authorization", "Bearer b");
        assert_eq!(headers.get("Authorization"), Some(&["Bearer b".to_string()][..]));
    }

    #[test]
    fn test_headers_remove() {
        let mut headers: HeaderCollection = [("A", "1")].into_iter().collect();
        assert_eq!(headers.remove("a"), Some(vec!["1".to_string()]));
        assert!(headers.remove("a").is_none());
    }
}
