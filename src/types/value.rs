use super::id::IdRef;
use super::map::PMap;
use crate::objects::PbxObject;

/// The generic pbxproj value: every literal, array, map, object or id
/// reference in a parsed (or built) document is one of these five shapes
///. `Object` is the reified form of `Map` produced when an `isa`
/// attribute is seen during parsing or construction.
#[derive(Debug, Clone)]
pub enum Value {
    /// A bare or quoted string token. Integers and booleans are literals
    /// too — `"46"`, `"YES"`, `"NO"` — distinguished only by accessor intent.
    Literal(String),
    /// A 96-bit object reference, optionally carrying a pretty-print comment.
    Id(IdRef),
    Array(Vec<Value>),
    Map(PMap),
    Object(PbxObject),
}

impl Value {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Value::Literal(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_id(&self) -> Option<&IdRef> {
        match self {
            Value::Id(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&PMap> {
        match self {
            Value::Map(m) => Some(m),
            Value::Object(o) => Some(o.map()),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut PMap> {
        match self {
            Value::Map(m) => Some(m),
            Value::Object(o) => Some(o.map_mut()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&PbxObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut PbxObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// `YES`/`1`/anything-but-`NO`-and-`0` is truthy, matching the Xcode
    /// boolean convention used throughout pbxproj build settings.
    pub fn as_bool(&self) -> Option<bool> {
        self.as_literal().map(|s| !(s == "NO" || s == "0"))
    }

    pub fn as_integer(&self) -> Option<i64> {
        self.as_literal().and_then(|s| s.parse::<i64>().ok())
    }

    pub fn string(s: impl Into<String>) -> Value {
        Value::Literal(s.into())
    }

    pub fn integer(n: i64) -> Value {
        Value::Literal(n.to_string())
    }

    pub fn boolean(b: bool) -> Value {
        Value::Literal(if b { "YES" } else { "NO" }.to_string())
    }

    /// Render as a JSON value for napi/wasm interop — literals and ids both
    /// become JSON strings, so round-tripping through JSON never needs the
    /// id-literal heuristic.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Literal(s) => serde_json::Value::String(s.clone()),
            Value::Id(id) => serde_json::Value::String(id.to_hex()),
            Value::Array(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Map(m) => m.to_json(),
            Value::Object(o) => o.map().to_json(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Literal(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Literal(s)
    }
}

impl From<IdRef> for Value {
    fn from(id: IdRef) -> Self {
        Value::Id(id)
    }
}

impl From<PMap> for Value {
    fn from(m: PMap) -> Self {
        Value::Map(m)
    }
}

impl From<PbxObject> for Value {
    fn from(o: PbxObject) -> Self {
        Value::Object(o)
    }
}
