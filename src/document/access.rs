// Author: Dustin Pilgrim
// License: MIT

use super::*;

impl Document {
    /// Get a typed value at a top-level key.
    ///
    /// # Examples
    /// ```
    /// # use tomlay::Document;
    /// let doc: Document = "port = 3306\nhost = \"localhost\"".parse()?;
    /// let port: u16 = doc.get("port")?;
    /// let host: String = doc.get("host")?;
    /// assert_eq!((port, host.as_str()), (3306, "localhost"));
    /// # Ok::<(), tomlay::CfgError>(())
    /// ```
    ///
    /// # Errors
    /// [`CfgError::MissingKey`] if the key is absent, [`CfgError::TypeMismatch`]
    /// or [`CfgError::OutOfRange`] if the value can't be converted to `T`.
    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = CfgError>,
    {
        let value = self.value(key).cloned().ok_or_else(|| CfgError::MissingKey {
            key: key.to_string(),
        })?;
        T::try_from(value).map_err(|e| attach_key(e, key))
    }

    /// Like [`Document::get`], but a missing key is `Ok(None)`.
    pub fn get_optional<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: TryFrom<Value, Error = CfgError>,
    {
        match self.get(key) {
            Ok(v) => Ok(Some(v)),
            Err(CfgError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value, falling back to `default` on any error.
    pub fn get_or<T>(&self, key: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = CfgError>,
    {
        self.get(key).unwrap_or(default)
    }

    /// Get a typed value by dotted path, e.g. `mysql.port`.
    pub fn get_path<T>(&self, path: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = CfgError>,
    {
        let value = self
            .value_at_path(path)
            .cloned()
            .ok_or_else(|| CfgError::MissingKey {
                key: path.to_string(),
            })?;
        T::try_from(value).map_err(|e| attach_key(e, path))
    }

    pub fn get_str(&self, key: &str) -> Result<String> {
        self.get(key)
    }

    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.get(key)
    }

    pub fn get_float(&self, key: &str) -> Result<f64> {
        self.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get(key)
    }

    pub fn get_str_list(&self, key: &str) -> Result<Vec<String>> {
        self.get(key)
    }

    pub fn get_int_list(&self, key: &str) -> Result<Vec<i64>> {
        self.get(key)
    }

    pub fn get_float_list(&self, key: &str) -> Result<Vec<f64>> {
        self.get(key)
    }

    pub fn get_bool_list(&self, key: &str) -> Result<Vec<bool>> {
        self.get(key)
    }

    /// Nested table at `key`, without applying any overrides.
    pub fn get_table(&self, key: &str) -> Result<Document> {
        self.get(key)
    }
}

fn attach_key(e: CfgError, key: &str) -> CfgError {
    match e {
        CfgError::TypeMismatch {
            expected, found, ..
        } => CfgError::TypeMismatch {
            key: key.to_string(),
            expected,
            found,
        },
        other => other,
    }
}
