// Author: Dustin Pilgrim
// License: MIT

use crate::Document;
use crate::error::Result;

/// Export a document to pretty-printed JSON.
///
/// Scalars map directly, lists become arrays and tables become objects.
/// Key order follows the document.
///
/// # Examples
/// ```
/// use tomlay::{Document, export};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let doc: Document = "[mysql]\nport = 3306".parse()?;
/// let json = export::export_document_to_json(&doc)?;
/// assert!(json.contains("\"port\": 3306"));
/// # Ok(())
/// # }
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}
