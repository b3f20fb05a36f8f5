//! Interop with `serde_json::Value`.
//!
//! Hosts that already traffic in `Value` can move trees across the boundary
//! in either direction. `serde_json` is built with `preserve_order`, so
//! object insertion order survives the conversion both ways.

use crate::error::{JotError, Result};
use crate::node::Node;
use serde_json::{Map, Value};

impl Node {
    /// Build an owning tree from a `serde_json::Value`.
    pub fn from_value(value: &Value) -> Node {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(*b),
            Value::Number(n) => Node::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => Node::String(s.clone()),
            Value::Array(items) => Node::Array(items.iter().map(Node::from_value).collect()),
            Value::Object(map) => Node::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Node::from_value(v)))
                    .collect(),
            ),
        }
    }

    /// Convert this tree to a `serde_json::Value`.
    ///
    /// Reference wrappers are resolved into their payload. `Raw` text is
    /// re-parsed through serde_json (the one place raw content is
    /// validated); non-finite numbers map to `Value::Null`, which has no
    /// other representation there.
    pub fn to_value(&self) -> Result<Value> {
        match self.resolve() {
            Node::Null => Ok(Value::Null),
            Node::Bool(b) => Ok(Value::Bool(*b)),
            Node::Number(n) => Ok(serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null)),
            Node::String(s) => Ok(Value::String(s.clone())),
            Node::Raw(s) => serde_json::from_str(s)
                .map_err(|e| JotError::parse(e.column().saturating_sub(1), e.to_string())),
            Node::Array(items) => Ok(Value::Array(
                items
                    .iter()
                    .map(|item| item.to_value())
                    .collect::<Result<Vec<_>>>()?,
            )),
            Node::Object(pairs) => {
                let mut map = Map::new();
                for (key, value) in pairs {
                    map.insert(key.clone(), value.to_value()?);
                }
                Ok(Value::Object(map))
            }
            Node::Ref(_) => unreachable!("resolve() never returns Ref"),
        }
    }
}
