//! Core types for ufind-core.
//!
//! This module defines the record model shared by the loader, the filter
//! engine, and the shell: the [`UserRecord`] and its [`Age`] field.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// One user entry as loaded from the JSON document.
///
/// The three fields the filters look at are lifted out of the JSON object
/// into typed, optional slots. The complete object is kept in `raw` so a
/// record prints with every key it was loaded with, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// `name` key. Absent or `null` is `None`; other scalars keep their text form.
    pub name: Option<String>,
    /// `age` key. Absent or `null` is `None`.
    pub age: Option<Age>,
    /// `email` key. Same leniency as `name`.
    pub email: Option<String>,
    /// The JSON object exactly as loaded.
    pub raw: Map<String, Value>,
}

impl UserRecord {
    /// Build a record from one JSON object of the input document.
    ///
    /// Never fails: the dataset schema is not validated, so unexpected value
    /// types degrade to `None` or [`Age::Other`] instead of erroring.
    pub fn from_object(raw: Map<String, Value>) -> Self {
        let name = raw.get("name").and_then(lenient_string);
        let email = raw.get("email").and_then(lenient_string);
        let age = raw.get("age").and_then(Age::from_value);
        Self {
            name,
            age,
            email,
            raw,
        }
    }

    /// The integer age, if the record has one. Floats and strings are not integers.
    pub fn age_int(&self) -> Option<i128> {
        match self.age {
            Some(Age::Int(n)) => Some(n),
            _ => None,
        }
    }
}

impl Serialize for UserRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl std::fmt::Display for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::Object(self.raw.clone()))
    }
}

/// The `age` field of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Age {
    /// A JSON integer literal. Literals beyond the `i128` range saturate,
    /// which keeps every comparison against a `u64` bound correct.
    Int(i128),
    /// Anything else: floats, strings, booleans, arrays, objects.
    Other(Value),
}

impl Age {
    /// `None` for `null`, [`Age::Int`] for JSON integers, [`Age::Other`] otherwise.
    ///
    /// Integer-ness is read from the number's literal text (no `.`, `e` or
    /// `E`), not from whether it fits in 64 bits.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => Some(
                int_literal(&n.to_string())
                    .map(Age::Int)
                    .unwrap_or_else(|| Age::Other(value.clone())),
            ),
            other => Some(Age::Other(other.clone())),
        }
    }

    /// Raw equality against an integer: numbers compare exactly by value
    /// (`30.0` equals `30`), every other JSON type is unequal.
    pub fn equals(&self, n: u64) -> bool {
        match self {
            Age::Int(v) => *v == i128::from(n),
            Age::Other(Value::Number(num)) => num
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 1e38)
                .is_some_and(|f| f as i128 == i128::from(n)),
            Age::Other(_) => false,
        }
    }
}

fn int_literal(text: &str) -> Option<i128> {
    if text.contains(['.', 'e', 'E']) {
        return None;
    }
    Some(text.parse::<i128>().unwrap_or(if text.starts_with('-') {
        i128::MIN
    } else {
        i128::MAX
    }))
}

fn lenient_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
