//! Closed JSON value for payload fields without a fixed schema
//!
//! Used for `DataTransfer` data and for vendor-defined `CustomData`
//! properties. Object keys are ordered so equality and hashing do not depend
//! on insertion order.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Any value the protocol's JSON Schema allows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnyValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<AnyValue>),
    Object(BTreeMap<String, AnyValue>),
}

impl AnyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AnyValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AnyValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&AnyValue> {
        match self {
            AnyValue::Object(map) => map.get(key),
            _ => None,
        }
    }
}

impl Hash for AnyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            AnyValue::Null => {}
            AnyValue::Bool(b) => b.hash(state),
            AnyValue::Number(n) => hash_number(n, state),
            AnyValue::String(s) => s.hash(state),
            AnyValue::Array(items) => items.hash(state),
            AnyValue::Object(map) => map.hash(state),
        }
    }
}

/// Hash in the same terms `Number` compares in: integers by value, floats by
/// bits with both zeros folded together
fn hash_number<H: Hasher>(n: &Number, state: &mut H) {
    if let Some(u) = n.as_u64() {
        0u8.hash(state);
        u.hash(state);
    } else if let Some(i) = n.as_i64() {
        1u8.hash(state);
        i.hash(state);
    } else if let Some(f) = n.as_f64() {
        2u8.hash(state);
        let f = if f == 0.0 { 0.0 } else { f };
        f.to_bits().hash(state);
    }
}

impl From<Value> for AnyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => AnyValue::Null,
            Value::Bool(b) => AnyValue::Bool(b),
            Value::Number(n) => AnyValue::Number(n),
            Value::String(s) => AnyValue::String(s),
            Value::Array(items) => AnyValue::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                AnyValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<AnyValue> for Value {
    fn from(value: AnyValue) -> Self {
        match value {
            AnyValue::Null => Value::Null,
            AnyValue::Bool(b) => Value::Bool(b),
            AnyValue::Number(n) => Value::Number(n),
            AnyValue::String(s) => Value::String(s),
            AnyValue::Array(items) => Value::Array(items.into_iter().map(Into::into).collect()),
            AnyValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&str> for AnyValue {
    fn from(s: &str) -> Self {
        AnyValue::String(s.to_string())
    }
}

impl From<String> for AnyValue {
    fn from(s: String) -> Self {
        AnyValue::String(s)
    }
}

impl From<bool> for AnyValue {
    fn from(b: bool) -> Self {
        AnyValue::Bool(b)
    }
}

impl From<i64> for AnyValue {
    fn from(n: i64) -> Self {
        AnyValue::Number(n.into())
    }
}

/// Compact JSON text
impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: Value = self.clone().into();
        write!(f, "{}", value)
    }
}
