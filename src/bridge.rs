// Author: Dustin Pilgrim
// License: MIT

//! Round trip between a [`Document`] and caller-defined structs.
//!
//! A document is encoded back to TOML text and that text is deserialized into
//! the target type, so field renames, defaults and type checks all follow the
//! target's own `serde` attributes.

use serde::de::DeserializeOwned;
use serde::ser::{Serialize, Serializer};

use crate::error::{CfgError, Result};
use crate::overlay::EnvSource;
use crate::value::Value;
use crate::Document;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::StringList(v) => serializer.collect_seq(v),
            Value::IntList(v) => serializer.collect_seq(v),
            Value::FloatList(v) => serializer.collect_seq(v),
            Value::BoolList(v) => serializer.collect_seq(v),
            Value::Table(doc) => doc.serialize(serializer),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl Document {
    /// Encode the document as TOML text.
    pub fn encode(&self) -> Result<String> {
        toml::to_string(self).map_err(CfgError::Serialize)
    }

    /// Deserialize the document into `T`.
    ///
    /// # Example
    /// ```
    /// # use tomlay::Document;
    /// #[derive(serde::Deserialize)]
    /// struct Server {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// let doc: Document = "host = \"0.0.0.0\"\nport = 8080".parse()?;
    /// let server: Server = doc.retype()?;
    /// assert_eq!(server.port, 8080);
    /// # Ok::<(), tomlay::CfgError>(())
    /// ```
    ///
    /// # Errors
    /// [`CfgError::Serialize`] if encoding fails, [`CfgError::Deserialize`] if
    /// the text doesn't fit `T`.
    pub fn retype<T: DeserializeOwned>(&self) -> Result<T> {
        let text = self.encode()?;
        let typed = toml::from_str(&text).map_err(CfgError::Deserialize)?;
        tracing::debug!(target_type = std::any::type_name::<T>(), "retyped config document");
        Ok(typed)
    }

    /// Resolve `namespace`, overlay it from `env`, and deserialize it into `T`.
    pub fn retype_namespace<T, E>(&self, namespace: &str, env: &E) -> Result<T>
    where
        T: DeserializeOwned,
        E: EnvSource + ?Sized,
    {
        self.resolve_and_overlay(namespace, env)?.retype()
    }

    /// Build a document from any value that serializes to a TOML table.
    pub fn from_typed<T: Serialize + ?Sized>(value: &T) -> Result<Document> {
        let text = toml::to_string(value).map_err(CfgError::Serialize)?;
        Document::decode(text.as_bytes())
    }
}
