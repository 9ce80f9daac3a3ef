//! A small string-keyed option bag shared by Path and Group, populated either
//! one key at a time or by merging a JSON object from the command table.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options(BTreeMap<String, serde_json::Value>);

impl Options {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.0.remove(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    /// Merges every key of a JSON object into this bag, overwriting existing
    /// keys. Non-object values are ignored (there is nothing sensible to
    /// merge).
    pub fn merge_json(&mut self, value: &serde_json::Value) {
        if let Some(obj) = value.as_object() {
            for (k, v) in obj {
                self.0.insert(k.clone(), v.clone());
            }
        }
    }

    /// Renders every entry as an SVG attribute, in key order, skipping
    /// entries that aren't representable as a single attribute value
    /// (arrays/objects).
    pub fn iter_svg_attrs(&self) -> impl Iterator<Item = (&str, String)> {
        self.0.iter().filter_map(|(k, v)| {
            let s = match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((k.as_str(), s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_existing_keys() {
        let mut o = Options::new();
        o.set("fill", "#fff");
        o.merge_json(&serde_json::json!({"fill": "#000", "a2s:type": "storage"}));
        assert_eq!(o.get_str("fill"), Some("#000"));
        assert_eq!(o.get_str("a2s:type"), Some("storage"));
    }
}
