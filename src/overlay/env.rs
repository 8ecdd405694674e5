// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;
use std::env;

/// Source of override values, asked once per scalar entry when a namespace
/// is overlaid.
///
/// `None` and `Some("")` both mean "not set": the file value is kept.
pub trait EnvSource {
    fn lookup(&self, namespace: &str, key: &str) -> Option<String>;
}

impl<F> EnvSource for F
where
    F: Fn(&str, &str) -> Option<String>,
{
    fn lookup(&self, namespace: &str, key: &str) -> Option<String> {
        self(namespace, key)
    }
}

/// Keyed by the dotted name, e.g. `mysql.host`.
impl EnvSource for HashMap<String, String> {
    fn lookup(&self, namespace: &str, key: &str) -> Option<String> {
        self.get(&qualified_key(namespace, key, ".")).cloned()
    }
}

/// `namespace` + `separator` + `key`, or the bare key when there's no namespace.
pub fn qualified_key(namespace: &str, key: &str, separator: &str) -> String {
    if namespace.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", namespace, separator, key)
    }
}

/// Reads overrides from the process environment.
///
/// By default `mysql` / `host` is looked up as `mysql.host`. Most shells can't
/// export dotted names, so the separator and casing can be changed:
///
/// ```
/// # use tomlay::OsEnv;
/// let env = OsEnv::new().with_separator("__").uppercase();
/// assert_eq!(env.variable_name("mysql", "host"), "MYSQL__HOST");
/// ```
#[derive(Debug, Clone)]
pub struct OsEnv {
    separator: String,
    uppercase: bool,
}

impl Default for OsEnv {
    fn default() -> Self {
        Self {
            separator: ".".to_string(),
            uppercase: false,
        }
    }
}

impl OsEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Upper-case the whole variable name before lookup.
    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub fn variable_name(&self, namespace: &str, key: &str) -> String {
        let name = qualified_key(namespace, key, &self.separator);
        if self.uppercase {
            name.to_uppercase()
        } else {
            name
        }
    }
}

impl EnvSource for OsEnv {
    fn lookup(&self, namespace: &str, key: &str) -> Option<String> {
        // Unset and non-unicode values are both treated as absent
        env::var(self.variable_name(namespace, key)).ok()
    }
}
