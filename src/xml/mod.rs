//! XML text for document trees (feature `xml`).
//!
//! The core builds [`Node`] trees without knowing how they are written; this
//! module is the serializer that turns them into pain.001 XML and back.
//!
//! # Example
//!
//! ```
//! use sepa_ct::{Transaction, build_transaction, xml};
//!
//! let mut tx = Transaction::new();
//! tx.set_instruction_id("I1").set_iban("GB82WEST12345698765432")?;
//!
//! let text = xml::to_xml(&build_transaction(&tx))?;
//! assert!(text.contains("<Cd>CUST</Cd>"));
//! assert_eq!(xml::from_xml(&text)?, build_transaction(&tx));
//! # Ok::<(), sepa_ct::SepaError>(())
//! ```

mod reader;
mod writer;

use crate::core::{Node, SepaError};

/// Output settings for [`to_xml_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlOptions {
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` first.
    pub declaration: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }
}

impl XmlOptions {
    /// No declaration and no indentation, for embedding in a larger document.
    pub fn fragment() -> Self {
        Self {
            indent: None,
            declaration: false,
        }
    }
}

/// Write a tree as an indented XML document with declaration.
pub fn to_xml(node: &Node) -> Result<String, SepaError> {
    to_xml_with(node, &XmlOptions::default())
}

pub fn to_xml_with(node: &Node, options: &XmlOptions) -> Result<String, SepaError> {
    let mut w = writer::XmlWriter::new(options)?;
    w.node(node)?;
    w.into_string()
}

/// Read an XML document back into a tree.
///
/// Whitespace-only text between child elements is dropped, leaf text is kept
/// verbatim and empty elements have no children, so reading the output of
/// [`to_xml`] gives back the tree that was written.
/// Malformed input is an error, never a panic.
pub fn from_xml(xml: &str) -> Result<Node, SepaError> {
    reader::read_document(xml)
}
