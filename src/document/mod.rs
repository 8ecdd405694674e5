// Author: Dustin Pilgrim
// License: MIT

use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::{CfgError, Result};
use crate::value::Value;

mod access;
mod conversion;

/// A decoded configuration table.
///
/// Keys keep the order they had in the source text. Nested tables are
/// stored as [`Value::Table`] and act as namespaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: IndexMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode raw TOML bytes into a document.
    ///
    /// # Example
    /// ```
    /// # use tomlay::Document;
    /// let doc = Document::decode(b"[mysql]\nhost = \"127.0.0.1\"\n")?;
    /// assert_eq!(doc.len(), 1);
    /// # Ok::<(), tomlay::CfgError>(())
    /// ```
    ///
    /// # Errors
    /// [`CfgError::InvalidUtf8`] or [`CfgError::Decode`] for malformed input,
    /// [`CfgError::UnsupportedValue`] for datetimes, mixed arrays and arrays of tables.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        let table: toml::Table = toml::from_str(text).map_err(CfgError::Decode)?;
        let doc = from_toml_table(table, "")?;
        tracing::debug!(entries = doc.len(), "decoded config document");
        Ok(doc)
    }

    /// Number of top-level entries.
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
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Raw value at a top-level key.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub(crate) fn value_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Insert or replace an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a dotted path through nested tables, e.g. `server.tls.port`.
    pub fn value_at_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.entries.get(first)?;
        for seg in segments {
            current = current.as_table()?.entries.get(seg)?;
        }
        Some(current)
    }
}

impl FromStr for Document {
    type Err = CfgError;

    fn from_str(s: &str) -> Result<Self> {
        Document::decode(s.as_bytes())
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn join_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

pub(crate) fn from_toml_table(table: toml::Table, parent: &str) -> Result<Document> {
    let mut entries = IndexMap::with_capacity(table.len());
    for (key, value) in table {
        let full_key = join_key(parent, &key);
        let value = from_toml_value(value, &full_key)?;
        entries.insert(key, value);
    }
    Ok(Document { entries })
}

fn from_toml_value(value: toml::Value, key: &str) -> Result<Value> {
    match value {
        toml::Value::String(s) => Ok(Value::String(s)),
        toml::Value::Integer(n) => Ok(Value::Int(n)),
        toml::Value::Float(n) => Ok(Value::Float(n)),
        toml::Value::Boolean(b) => Ok(Value::Bool(b)),
        toml::Value::Table(t) => Ok(Value::Table(from_toml_table(t, key)?)),
        toml::Value::Array(items) => from_toml_array(items, key),
        toml::Value::Datetime(_) => Err(unsupported(key, "datetime")),
    }
}

fn unsupported(key: &str, kind: &str) -> CfgError {
    CfgError::UnsupportedValue {
        key: key.to_string(),
        kind: kind.to_string(),
    }
}

/// Arrays must be homogeneous. An empty array becomes an empty string list;
/// integers mixed with floats are widened to a float list.
fn from_toml_array(items: Vec<toml::Value>, key: &str) -> Result<Value> {
    let Some(first) = items.first() else {
        return Ok(Value::StringList(Vec::new()));
    };

    match first {
        toml::Value::String(_) => items
            .into_iter()
            .map(|v| match v {
                toml::Value::String(s) => Ok(s),
                _ => Err(unsupported(key, "mixed array")),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::StringList),
        toml::Value::Boolean(_) => items
            .into_iter()
            .map(|v| match v {
                toml::Value::Boolean(b) => Ok(b),
                _ => Err(unsupported(key, "mixed array")),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::BoolList),
        toml::Value::Integer(_) | toml::Value::Float(_) => {
            let has_float = items.iter().any(|v| matches!(v, toml::Value::Float(_)));
            if has_float {
                items
                    .into_iter()
                    .map(|v| match v {
                        toml::Value::Float(n) => Ok(n),
                        toml::Value::Integer(n) => Ok(n as f64),
                        _ => Err(unsupported(key, "mixed array")),
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(Value::FloatList)
            } else {
                items
                    .into_iter()
                    .map(|v| match v {
                        toml::Value::Integer(n) => Ok(n),
                        _ => Err(unsupported(key, "mixed array")),
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(Value::IntList)
            }
        }
        toml::Value::Table(_) => Err(unsupported(key, "array of tables")),
        toml::Value::Array(_) => Err(unsupported(key, "nested array")),
        toml::Value::Datetime(_) => Err(unsupported(key, "datetime array")),
    }
}

#[cfg(test)]
mod tests;
