use crate::objects::PbxObject;
use crate::types::id::IdRef;
use crate::types::map::PMap;
use crate::types::value::Value;

use super::lexer::{scan, ParseEvents};

pub use super::lexer::ParseError;

enum Frame {
    Obj {
        map: PMap,
        current_key: Option<String>,
        current_key_comment: Option<String>,
    },
    Arr {
        items: Vec<Value>,
    },
}

/// The sole production consumer of the pbxproj scanner's event stream:
/// accumulates a `Value` tree, performing the `isa`-triggered reification of
/// a just-closed `Map` into an `Object`.
#[derive(Default)]
struct DocumentBuilder {
    stack: Vec<Frame>,
    result: Option<Value>,
}

impl DocumentBuilder {
    fn new() -> Self {
        DocumentBuilder { stack: Vec::new(), result: None }
    }

    fn push_completed(&mut self, value: Value) {
        match self.stack.last_mut() {
            Some(Frame::Obj { map, current_key, current_key_comment }) => {
                let key = current_key.clone().unwrap_or_default();
                let comment = current_key_comment.take();
                map.put(key, comment, value);
            }
            Some(Frame::Arr { items }) => items.push(value),
            None => self.result = Some(value),
        }
    }

    fn literal_or_id(literal: &str, quoted: bool) -> Value {
        if !quoted {
            if let Some(bytes) = IdRef::parse_hex(literal) {
                return Value::Id(IdRef::from_bytes(bytes));
            }
        }
        Value::Literal(literal.to_string())
    }
}

impl ParseEvents for DocumentBuilder {
    fn begin_object(&mut self) {
        self.stack.push(Frame::Obj { map: PMap::new(), current_key: None, current_key_comment: None });
    }

    fn end_object(&mut self) {
        let map = match self.stack.pop() {
            Some(Frame::Obj { map, .. }) => map,
            _ => panic!("end_object without matching begin_object"),
        };
        let key_hint = match self.stack.last() {
            Some(Frame::Obj { current_key, .. }) => current_key.clone(),
            _ => None,
        };
        let value = if map.contains_key("isa") {
            let id = key_hint
                .as_deref()
                .and_then(IdRef::parse_hex)
                .map(IdRef::from_bytes)
                .unwrap_or_else(|| IdRef::from_bytes([0u8; 12]));
            Value::Object(PbxObject::from_map(id, map))
        } else {
            Value::Map(map)
        };
        self.push_completed(value);
    }

    fn object_attr(&mut self, name: &str) {
        if let Some(Frame::Obj { current_key, current_key_comment, .. }) = self.stack.last_mut() {
            *current_key = Some(name.to_string());
            *current_key_comment = None;
        }
    }

    fn object_attr_comment(&mut self, comment: &str) {
        if let Some(Frame::Obj { current_key_comment, .. }) = self.stack.last_mut() {
            *current_key_comment = Some(comment.to_string());
        }
    }

    fn object_value_literal(&mut self, literal: &str, quoted: bool) {
        let value = Self::literal_or_id(literal, quoted);
        self.push_completed(value);
    }

    fn object_value_comment(&mut self, comment: &str) {
        if let Some(Frame::Obj { map, current_key: Some(key), .. }) = self.stack.last_mut() {
            if let Some(Value::Id(id)) = map.get_mut(key) {
                id.comment = Some(comment.to_string());
            }
        }
    }

    fn begin_array(&mut self) {
        self.stack.push(Frame::Arr { items: Vec::new() });
    }

    fn end_array(&mut self) {
        let items = match self.stack.pop() {
            Some(Frame::Arr { items }) => items,
            _ => panic!("end_array without matching begin_array"),
        };
        self.push_completed(Value::Array(items));
    }

    fn array_value_literal(&mut self, literal: &str, quoted: bool) {
        let value = Self::literal_or_id(literal, quoted);
        self.push_completed(value);
    }

    fn array_value_comment(&mut self, comment: &str) {
        if let Some(Frame::Arr { items }) = self.stack.last_mut() {
            if let Some(Value::Id(id)) = items.last_mut() {
                id.comment = Some(comment.to_string());
            }
        }
    }
}

/// Parse a complete `.pbxproj` document into a [`Value`] (normally
/// `Value::Object` once an `isa`-bearing top-level map is seen, or
/// `Value::Map` for a bare property list without any reifiable object).
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut builder = DocumentBuilder::new();
    scan(text, &mut builder)?;
    Ok(builder.result.unwrap_or(Value::Map(PMap::new())))
}
