use smol_str::SmolStr;
use std::collections::BTreeMap;

pub type ObjectMap = BTreeMap<SmolStr, Value>;

// ─── Number ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::I64(i) => write!(f, "{}", i),
            Number::U64(u) => write!(f, "{}", u),
            Number::F64(v) => write!(f, "{}", v),
        }
    }
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::I64(i) => i as f64,
            Number::U64(u) => u as f64,
            Number::F64(f) => f,
        }
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::I64(i) => Some(i),
            Number::U64(u) => i64::try_from(u).ok(),
            Number::F64(f) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Numeric equality across representations.
    pub fn numeric_eq(self, other: Number) -> bool {
        match (self, other) {
            (Number::F64(_), _) | (_, Number::F64(_)) => self.as_f64() == other.as_f64(),
            (Number::U64(a), Number::U64(b)) => a == b,
            // a U64 beyond i64::MAX never equals an I64
            _ => matches!((self.as_i64(), other.as_i64()), (Some(a), Some(b)) if a == b),
        }
    }

    fn is_zero(self) -> bool {
        self.as_f64() == 0.0
    }
}

// ─── Value ──────────────────────────────────────────────────────────────────

/// A dynamically typed collection item.
///
/// `Null` is never stored through the keyed setters: setting a key to `Null`
/// removes it instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Str(SmolStr),
    Array(Vec<Value>),
    Object(ObjectMap),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Boolean interpretation of the value.
    ///
    /// `Null`, `false`, zero, `""`, `"0"` and empty arrays/objects are falsy.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !n.is_zero(),
            Value::Str(s) => !(s.is_empty() || s == "0"),
            Value::Array(arr) => !arr.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }

    /// Type-juggling comparison used by non-strict searches.
    ///
    /// Numbers compare numerically across representations, numeric strings
    /// compare numerically with numbers, and booleans compare against the
    /// other side's truthiness.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(b), v) | (v, Value::Bool(b)) => *b == v.truthy(),
            (Value::Null, Value::Str(s)) | (Value::Str(s), Value::Null) => s.is_empty(),
            (Value::Null, v) | (v, Value::Null) => !v.truthy(),
            (Value::Number(a), Value::Number(b)) => a.numeric_eq(*b),
            (Value::Number(n), Value::Str(s)) | (Value::Str(s), Value::Number(n)) => {
                match parse_numeric(s) {
                    Some(parsed) => n.numeric_eq(parsed),
                    None => n.to_string() == s.as_str(),
                }
            }
            (Value::Str(a), Value::Str(b)) => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => x.numeric_eq(y),
                _ => a == b,
            },
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, x)| b.get(k).is_some_and(|y| x.loose_eq(y)))
            }
            _ => false,
        }
    }
}

/// Parse a string that looks like a number, allowing surrounding whitespace.
fn parse_numeric(s: &str) -> Option<Number> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Number::I64(i));
    }
    if let Ok(u) = trimmed.parse::<u64>() {
        return Some(Number::U64(u));
    }
    match trimmed.parse::<f64>() {
        // "inf"/"nan" parse as f64 but are not numeric strings
        Ok(f) if f.is_finite() => Some(Number::F64(f)),
        _ => None,
    }
}

// ─── From impls ─────────────────────────────────────────────────────────────

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::F64(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::I64(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::I64(i64::from(n)))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(SmolStr::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(SmolStr::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

// ─── From serde_json::Value ─────────────────────────────────────────────────

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Number(Number::U64(u))
                } else {
                    Value::Number(Number::F64(n.as_f64().unwrap_or(0.0)))
                }
            }
            serde_json::Value::String(s) => Value::Str(SmolStr::from(s)),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (SmolStr::from(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
