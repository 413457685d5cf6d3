use indexmap::IndexMap;

use super::id::IdRef;
use super::value::Value;

/// A single entry in a [`PMap`]: the value plus an optional comment that
/// was attached to the *value* (not the key) at parse time — e.g. the
/// `/* comment */` that can trail a literal or id.
#[derive(Debug, Clone)]
pub struct MapEntry {
    pub comment: Option<String>,
    pub value: Value,
}

/// Insertion-ordered string-keyed map, the backbone of the pbxproj value
/// model. Key order is preserved across any read-modify-write
/// cycle; values keep an optional comment recovered from parsing or set by
/// the writer's fallback comment derivation.
#[derive(Debug, Clone, Default)]
pub struct PMap {
    entries: IndexMap<String, MapEntry>,
}

impl PMap {
    pub fn new() -> Self {
        PMap { entries: IndexMap::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), &e.value))
    }

    pub fn iter_entries(&self) -> impl Iterator<Item = (&str, &MapEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Insert a fresh key, with an optional comment. Fails (panics) on a
    /// duplicate key — this is a schema violation, not a recoverable error.
    pub fn put(&mut self, key: impl Into<String>, comment: Option<String>, value: Value) {
        let key = key.into();
        if self.entries.contains_key(&key) {
            panic!("duplicate key insertion into PMap: {key}");
        }
        self.entries.insert(key, MapEntry { comment, value });
    }

    /// Update an existing key's value in place without altering order, or
    /// append it if absent.
    pub fn replace(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
        } else {
            self.entries.insert(key, MapEntry { comment: None, value });
        }
    }

    pub fn replace_with_comment(&mut self, key: impl Into<String>, comment: Option<String>, value: Value) {
        let key = key.into();
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.comment = comment;
        } else {
            self.entries.insert(key, MapEntry { comment, value });
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key).map(|e| e.value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key).map(|e| &mut e.value)
    }

    // ── typed accessors ──

    pub fn get_string(&self, key: &str, default: &str) -> Option<String> {
        match self.entries.get(key) {
            None => Some(default.to_string()),
            Some(e) => e.value.as_literal().map(|s| s.to_string()),
        }
    }

    /// `getInteger` is fatal on a type mismatch rather than silently
    /// falling back to the default.
    pub fn get_integer(&self, key: &str, default: i64) -> i64 {
        match self.entries.get(key) {
            None => default,
            Some(e) => match &e.value {
                Value::Literal(s) => s.parse::<i64>().unwrap_or_else(|_| {
                    panic!("getInteger: key {key} holds non-numeric literal {s:?}")
                }),
                other => panic!("getInteger: key {key} holds non-literal value {other:?}"),
            },
        }
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.entries.get(key) {
            None => default,
            Some(e) => match e.value.as_literal() {
                Some(s) => !(s == "NO" || s == "0"),
                None => default,
            },
        }
    }

    pub fn get_array(&self, key: &str) -> Option<&[Value]> {
        match self.entries.get(key)?.value {
            Value::Array(ref a) => Some(a),
            _ => None,
        }
    }

    pub fn get_map(&self, key: &str) -> Option<&PMap> {
        match self.entries.get(key)?.value {
            Value::Map(ref m) => Some(m),
            _ => None,
        }
    }

    pub fn get_id(&self, key: &str) -> Option<&IdRef> {
        match self.entries.get(key)?.value {
            Value::Id(ref id) => Some(id),
            _ => None,
        }
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.replace(key, Value::Literal(value.into()));
    }

    pub fn set_integer(&mut self, key: impl Into<String>, value: i64) {
        self.replace(key, Value::Literal(value.to_string()));
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.replace(key, Value::Literal(if value { "YES" } else { "NO" }.to_string()));
    }

    pub fn set_array(&mut self, key: impl Into<String>, value: Vec<Value>) {
        self.replace(key, Value::Array(value));
    }

    pub fn set_id(&mut self, key: impl Into<String>, id: IdRef) {
        self.replace(key, Value::Id(id));
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::with_capacity(self.entries.len());
        for (k, e) in &self.entries {
            obj.insert(k.clone(), e.value.to_json());
        }
        serde_json::Value::Object(obj)
    }
}

impl<'a> IntoIterator for &'a PMap {
    type Item = (&'a str, &'a Value);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Value)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
