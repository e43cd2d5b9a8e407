// Copyright 2023 The Streamctl Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Order-preserving JSON documents
//!
//! A [`StructuredDocument`] keeps object keys in the order the decoder first
//! saw them, at every nesting level, so that re-serializing a response shows
//! fields exactly as the server sent them.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Insertion-ordered mapping from keys to JSON values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredDocument(IndexMap<String, Value>);

impl StructuredDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a JSON object, failing for any other top-level value
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Insert a value; an existing key keeps its original position
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Indented JSON with a two space indent
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl FromIterator<(String, Value)> for StructuredDocument {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_key_order_is_preserved() {
        let doc = StructuredDocument::from_slice(br#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(doc.to_json().unwrap(), r#"{"zeta":1,"alpha":2,"mid":3}"#);
    }

    #[test]
    fn test_nested_key_order_is_preserved() {
        let doc = StructuredDocument::from_slice(br#"{"outer":{"b":1,"a":{"y":true,"x":false}}}"#).unwrap();
        assert_eq!(doc.to_json().unwrap(), r#"{"outer":{"b":1,"a":{"y":true,"x":false}}}"#);
    }

    #[test]
    fn test_reinsert_keeps_first_position() {
        let mut doc = StructuredDocument::new();
        doc.insert("first", json!(1));
        doc.insert("second", json!(2));
        let previous = doc.insert("first", json!(3));

        assert_eq!(previous, Some(json!(1)));
        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(doc.get("first"), Some(&json!(3)));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(StructuredDocument::from_slice(b"[1,2,3]").is_err());
        assert!(StructuredDocument::from_slice(b"not json").is_err());
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let doc = StructuredDocument::from_slice(br#"{"name":"my-kafka","nested":{"id":1}}"#).unwrap();
        let pretty = doc.to_json_pretty().unwrap();
        assert_eq!(
            pretty,
            "{\n  \"name\": \"my-kafka\",\n  \"nested\": {\n    \"id\": 1\n  }\n}"
        );
    }

    #[test]
    fn test_collect_from_pairs() {
        let doc: StructuredDocument = vec![("b".to_string(), json!(1)), ("a".to_string(), json!(2))]
            .into_iter()
            .collect();
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
