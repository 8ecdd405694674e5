// Author: Dustin Pilgrim
// License: MIT

use crate::error::CfgError;
use crate::value::{Value, ValueKind};
use crate::Document;

/// Conversions report a mismatch without knowing which key they came from.
/// The accessors in `access.rs` fill the key in afterwards.
fn mismatch(expected: ValueKind, value: &Value) -> CfgError {
    CfgError::TypeMismatch {
        key: String::new(),
        expected,
        found: value.kind(),
    }
}

impl TryFrom<Value> for String {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch(ValueKind::String, &other)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(n),
            other => Err(mismatch(ValueKind::Int, &other)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            other => Err(mismatch(ValueKind::Float, &other)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n as f32),
            other => Err(mismatch(ValueKind::Float, &other)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch(ValueKind::Bool, &other)),
        }
    }
}

// Narrow integers go through i64 and are range-checked.
macro_rules! narrow_int {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = CfgError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| CfgError::OutOfRange {
                        value: n,
                        target: stringify!($ty),
                    })
                }
            }
        )*
    };
}

narrow_int!(i32, u8, u16, u32, u64, usize);

impl TryFrom<Value> for Vec<String> {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::StringList(v) => Ok(v),
            other => Err(mismatch(ValueKind::StringList, &other)),
        }
    }
}

impl TryFrom<Value> for Vec<i64> {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::IntList(v) => Ok(v),
            // `[]` decodes as an empty string list
            Value::StringList(v) if v.is_empty() => Ok(Vec::new()),
            other => Err(mismatch(ValueKind::IntList, &other)),
        }
    }
}

impl TryFrom<Value> for Vec<f64> {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::FloatList(v) => Ok(v),
            Value::StringList(v) if v.is_empty() => Ok(Vec::new()),
            other => Err(mismatch(ValueKind::FloatList, &other)),
        }
    }
}

impl TryFrom<Value> for Vec<bool> {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::BoolList(v) => Ok(v),
            Value::StringList(v) if v.is_empty() => Ok(Vec::new()),
            other => Err(mismatch(ValueKind::BoolList, &other)),
        }
    }
}

impl TryFrom<Value> for Document {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Table(doc) => Ok(doc),
            other => Err(mismatch(ValueKind::Table, &other)),
        }
    }
}
