//! Decode a TOML config once, overlay environment values onto a namespace,
//! and retype it into your own structs.
//!
//! ```
//! use tomlay::Document;
//!
//! #[derive(serde::Deserialize)]
//! struct Mysql {
//!     host: String,
//!     port: String,
//! }
//!
//! let doc = Document::decode(b"[mysql]\nhost = \"127.0.0.1\"\nport = \"3306\"\n")?;
//! let env = |ns: &str, key: &str| (ns == "mysql" && key == "host").then(|| "localhost".to_string());
//!
//! let mysql: Mysql = doc.retype_namespace("mysql", &env)?;
//! assert_eq!(mysql.host, "localhost");
//! assert_eq!(mysql.port, "3306");
//! # Ok::<(), tomlay::CfgError>(())
//! ```
//!
//! In production pass [`OsEnv`], which reads `mysql.host` from the process
//! environment.

pub mod bridge;
pub mod document;
pub mod error;
pub mod export;
pub mod overlay;
pub mod value;

pub use document::Document;
pub use error::{CfgError, NamespaceReason, Result};
pub use overlay::{EnvSource, OsEnv, parse_bool};
pub use value::{Value, ValueKind};
