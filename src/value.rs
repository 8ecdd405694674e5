// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::document::Document;

/// A single configuration value.
///
/// Lists are homogeneous; a nested `Table` is how namespaces are represented.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    StringList(Vec<String>),
    IntList(Vec<i64>),
    FloatList(Vec<f64>),
    BoolList(Vec<bool>),
    Table(Document),
}

/// Type tag of a [`Value`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int,
    Float,
    Bool,
    StringList,
    IntList,
    FloatList,
    BoolList,
    Table,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::StringList(_) => ValueKind::StringList,
            Value::IntList(_) => ValueKind::IntList,
            Value::FloatList(_) => ValueKind::FloatList,
            Value::BoolList(_) => ValueKind::BoolList,
            Value::Table(_) => ValueKind::Table,
        }
    }

    /// Strings, integers, floats and booleans. Only these accept overrides.
    pub fn is_scalar(&self) -> bool {
        self.kind().is_scalar()
    }

    pub fn as_table(&self) -> Option<&Document> {
        if let Value::Table(doc) = self {
            Some(doc)
        } else {
            None
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Document> {
        if let Value::Table(doc) = self {
            Some(doc)
        } else {
            None
        }
    }
}

impl ValueKind {
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            ValueKind::String | ValueKind::Int | ValueKind::Float | ValueKind::Bool
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "boolean",
            ValueKind::StringList => "string list",
            ValueKind::IntList => "integer list",
            ValueKind::FloatList => "float list",
            ValueKind::BoolList => "boolean list",
            ValueKind::Table => "table",
        };
        f.write_str(name)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::StringList(v)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Value::IntList(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::FloatList(v)
    }
}

impl From<Vec<bool>> for Value {
    fn from(v: Vec<bool>) -> Self {
        Value::BoolList(v)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Table(doc)
    }
}
