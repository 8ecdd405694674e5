// Author: Dustin Pilgrim
// License: MIT

//! Namespace resolution and environment overrides.
//!
//! Resolving a namespace hands back an owned copy of the table, so overlaying
//! it never touches the parent document. Use
//! [`Document::overlay_namespace_in_place`] when the parent itself should
//! carry the overridden values.

use crate::error::{CfgError, NamespaceReason, Result};
use crate::value::{Value, ValueKind};
use crate::Document;

mod env;

pub use env::{EnvSource, OsEnv, qualified_key};

const TRUTHY: [&str; 5] = ["y", "yes", "1", "t", "true"];
const FALSY: [&str; 5] = ["n", "no", "0", "f", "false"];

/// Parse a boolean override token, ignoring ASCII case.
///
/// Accepts `y, yes, 1, t, true` and `n, no, 0, f, false`; anything else is `None`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    if TRUTHY.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSY.iter().any(|f| raw.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}

impl Document {
    /// Copy of the table stored under `namespace`.
    ///
    /// A top-level key matching `namespace` exactly is preferred; otherwise a
    /// dotted namespace such as `db.primary` is walked through nested tables.
    ///
    /// # Errors
    /// [`CfgError::Namespace`] with [`NamespaceReason::NotExist`] if nothing is
    /// there, or [`NamespaceReason::NotTable`] if the value is not a table.
    pub fn resolve_namespace(&self, namespace: &str) -> Result<Document> {
        let found = match self.value(namespace) {
            Some(v) => Some(v),
            None if namespace.contains('.') => self.value_at_path(namespace),
            None => None,
        };

        match found {
            Some(Value::Table(doc)) => {
                tracing::debug!(namespace, entries = doc.len(), "resolved config namespace");
                Ok(doc.clone())
            }
            Some(_) => Err(namespace_error(namespace, NamespaceReason::NotTable)),
            None => Err(namespace_error(namespace, NamespaceReason::NotExist)),
        }
    }

    /// Replace scalar entries with values from `env`.
    ///
    /// Each entry is looked up as `(namespace, key)`. A non-empty result is
    /// coerced to the entry's current type. Either every override is applied
    /// or, on the first failure in document order, none are.
    ///
    /// # Errors
    /// [`CfgError::OverrideType`] when a value can't be coerced and
    /// [`CfgError::UnsupportedOverride`] when a list or table entry has an
    /// override set.
    pub fn apply_overrides<E>(&mut self, namespace: &str, env: &E) -> Result<()>
    where
        E: EnvSource + ?Sized,
    {
        let mut staged = Vec::new();
        for (key, current) in self.iter() {
            let Some(raw) = env.lookup(namespace, key).filter(|raw| !raw.is_empty()) else {
                continue;
            };
            let value = coerce(&qualified_key(namespace, key, "."), current, raw)?;
            staged.push((key.to_string(), value));
        }

        for (key, value) in staged {
            tracing::trace!(namespace, key = key.as_str(), "applied environment override");
            if let Some(slot) = self.value_mut(&key) {
                *slot = value;
            }
        }
        Ok(())
    }

    /// Resolve `namespace` and apply overrides to the copy.
    ///
    /// # Example
    /// ```
    /// # use tomlay::Document;
    /// let doc: Document = "[mysql]\nhost = \"127.0.0.1\"\nport = \"3306\"".parse()?;
    /// let env = |ns: &str, key: &str| (ns == "mysql" && key == "host").then(|| "localhost".to_string());
    /// let mysql = doc.resolve_and_overlay("mysql", &env)?;
    /// assert_eq!(mysql.get_str("host")?, "localhost");
    /// assert_eq!(mysql.get_str("port")?, "3306");
    /// # Ok::<(), tomlay::CfgError>(())
    /// ```
    pub fn resolve_and_overlay<E>(&self, namespace: &str, env: &E) -> Result<Document>
    where
        E: EnvSource + ?Sized,
    {
        let mut sub = self.resolve_namespace(namespace)?;
        sub.apply_overrides(namespace, env)?;
        Ok(sub)
    }

    /// Apply overrides to the namespace's table inside this document.
    pub fn overlay_namespace_in_place<E>(&mut self, namespace: &str, env: &E) -> Result<()>
    where
        E: EnvSource + ?Sized,
    {
        let table = self.namespace_mut(namespace)?;
        table.apply_overrides(namespace, env)
    }

    fn namespace_mut(&mut self, namespace: &str) -> Result<&mut Document> {
        let use_path = !self.contains_key(namespace) && namespace.contains('.');
        let found = if use_path {
            let mut segments = namespace.split('.');
            let first = segments.next().unwrap_or(namespace);
            let mut current = self.value_mut(first);
            for seg in segments {
                current = current
                    .and_then(Value::as_table_mut)
                    .and_then(|doc| doc.value_mut(seg));
            }
            current
        } else {
            self.value_mut(namespace)
        };

        match found {
            Some(Value::Table(doc)) => Ok(doc),
            Some(_) => Err(namespace_error(namespace, NamespaceReason::NotTable)),
            None => Err(namespace_error(namespace, NamespaceReason::NotExist)),
        }
    }
}

fn namespace_error(namespace: &str, reason: NamespaceReason) -> CfgError {
    CfgError::Namespace {
        namespace: namespace.to_string(),
        reason,
    }
}

/// Coerce a raw override into the type of `current`.
fn coerce(key: &str, current: &Value, raw: String) -> Result<Value> {
    let type_error = |expected: ValueKind, detail: String, raw: &str| CfgError::OverrideType {
        key: key.to_string(),
        raw: raw.to_string(),
        expected,
        detail,
    };

    match current {
        Value::String(_) => Ok(Value::String(raw)),
        Value::Int(_) => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| type_error(ValueKind::Int, e.to_string(), &raw)),
        Value::Float(_) => raw
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| type_error(ValueKind::Float, e.to_string(), &raw)),
        Value::Bool(_) => parse_bool(&raw)
            .map(Value::Bool)
            .ok_or_else(|| type_error(ValueKind::Bool, "unrecognized token".into(), &raw)),
        other => Err(CfgError::UnsupportedOverride {
            key: key.to_string(),
            kind: other.kind(),
        }),
    }
}
