// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use thiserror::Error;

use crate::value::ValueKind;

pub type Result<T> = std::result::Result<T, CfgError>;

/// Why a namespace could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceReason {
    NotExist,
    NotTable,
}

impl fmt::Display for NamespaceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamespaceReason::NotExist => f.write_str("not exist"),
            NamespaceReason::NotTable => f.write_str("only supports key=value entries"),
        }
    }
}

/// The error type for decoding, overlaying and retyping configuration.
#[derive(Debug, Error)]
pub enum CfgError {
    #[error("[TOMLAY] Decode Error: {0}")]
    Decode(#[source] toml::de::Error),

    #[error("[TOMLAY] Decode Error: input is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The document holds a TOML value outside the supported lattice
    /// (datetimes, mixed arrays, arrays of tables).
    #[error("[TOMLAY] Unsupported value for `{key}`: {kind}")]
    UnsupportedValue { key: String, kind: String },

    #[error("config namespace [{namespace}]: {reason}")]
    Namespace {
        namespace: String,
        reason: NamespaceReason,
    },

    /// An override is set but cannot be coerced to the entry's type.
    /// `raw` is kept for the caller but left out of the message.
    #[error("environment override for [{key}]: need {expected} ({detail})")]
    OverrideType {
        key: String,
        raw: String,
        expected: ValueKind,
        detail: String,
    },

    #[error("environment override for [{key}]: unsupported override type {kind}, only string, integer, float or boolean")]
    UnsupportedOverride { key: String, kind: ValueKind },

    #[error("[TOMLAY] Serialize Error: {0}")]
    Serialize(#[source] toml::ser::Error),

    #[error("[TOMLAY] Deserialize Error: {0}")]
    Deserialize(#[source] toml::de::Error),

    #[error("[TOMLAY] Key `{key}` not found")]
    MissingKey { key: String },

    #[error("[TOMLAY] Type Error at `{key}`: expected {expected}, got {found}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("[TOMLAY] Number {value} out of range for {target}")]
    OutOfRange { value: i64, target: &'static str },

    #[error("[TOMLAY] Export Error: {0}")]
    Export(#[from] serde_json::Error),
}

impl CfgError {
    /// Stable numeric code, grouped by stage: 1xx decode, 2xx namespace and
    /// override, 3xx retyping, 4xx access, 5xx export.
    pub fn code(&self) -> u32 {
        match self {
            CfgError::Decode(_) => 100,
            CfgError::InvalidUtf8(_) => 101,
            CfgError::UnsupportedValue { .. } => 102,
            CfgError::Namespace {
                reason: NamespaceReason::NotExist,
                ..
            } => 200,
            CfgError::Namespace {
                reason: NamespaceReason::NotTable,
                ..
            } => 201,
            CfgError::OverrideType { .. } => 210,
            CfgError::UnsupportedOverride { .. } => 211,
            CfgError::Serialize(_) => 300,
            CfgError::Deserialize(_) => 301,
            CfgError::MissingKey { .. } => 400,
            CfgError::TypeMismatch { .. } => 401,
            CfgError::OutOfRange { .. } => 402,
            CfgError::Export(_) => 500,
        }
    }

    /// A short suggestion for the operator, when there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            CfgError::Namespace {
                reason: NamespaceReason::NotExist,
                namespace,
            } => Some(format!("Add a [{}] table to your config", namespace)),
            CfgError::Namespace {
                reason: NamespaceReason::NotTable,
                namespace,
            } => Some(format!("`{}` is a plain value, not a table", namespace)),
            CfgError::OverrideType {
                expected: ValueKind::Bool,
                ..
            } => Some("Use one of y, yes, 1, t, true, n, no, 0, f, false".into()),
            CfgError::OverrideType { key, expected, .. } => {
                Some(format!("Set the variable for `{}` to a valid {}", key, expected))
            }
            CfgError::UnsupportedOverride { key, .. } => {
                Some(format!("Unset the environment variable for `{}`", key))
            }
            CfgError::UnsupportedValue { .. } => {
                Some("Use strings, numbers, booleans, homogeneous arrays or tables".into())
            }
            CfgError::Deserialize(_) => {
                Some("Check that your struct's field types match the config".into())
            }
            _ => None,
        }
    }
}
