use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Defines errors that may occur while loading a catalog.
///
/// Any of these rejects the whole document; a partially loaded table would
/// mix languages within one UI surface.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Error when the catalog file cannot be read
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    /// Error when the XML itself is malformed
    #[error("Malformed catalog XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Error when an attribute cannot be decoded
    #[error("Malformed attribute: {0}")]
    Attr(#[from] AttrError),
    /// Error when the document is not rooted at a `TS` element
    #[error("Expected 'TS' root element, found '{0}'")]
    UnexpectedRoot(String),
    /// Error when an element appears where the format does not allow it
    #[error("Unexpected element '{element}' inside '{parent}'")]
    UnexpectedElement {
        /// Offending element name (`#text` for stray character data)
        element: String,
        /// Enclosing element name
        parent: String,
    },
    /// Error when the document ends before an element is closed
    #[error("Document ended before '{0}' was closed")]
    UnexpectedEof(String),
    /// Error when a context block carries no name
    #[error("Context is missing its name")]
    MissingContextName,
    /// Error when a message carries no source text
    #[error("Message in context '{0}' is missing its source text")]
    MissingSource(String),
    /// Error when a translation carries an unknown `type` attribute
    #[error("Unknown translation status '{0}'")]
    UnknownStatus(String),
    /// Error when a location line number is not a number
    #[error("Invalid line number '{0}' in location")]
    InvalidLine(String),
}
