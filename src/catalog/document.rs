//! 翻訳カタログのデータモデル

use std::path::Path;

use crate::types::{
    SourceReference,
    TranslationStatus,
};

use super::error::LoadError;
use super::table::{
    DuplicatePolicy,
    TranslationTable,
};
use super::{
    parser,
    writer,
};

/// A parsed translation catalog.
///
/// Mirrors the TS document tree: a `TS` root with attributes and an ordered
/// list of contexts. Fixed at authoring time; the running application never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    /// `version` attribute of the `TS` root (e.g. "2.0").
    pub version: Option<String>,
    /// `language` attribute, the target language of the translations.
    pub language: Option<String>,
    /// `sourcelanguage` attribute, when recorded.
    pub source_language: Option<String>,
    /// Context blocks in document order.
    pub contexts: Vec<Context>,
}

/// One named grouping of messages, corresponding to a UI surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Name, unique within the catalog (e.g. a dialog class name).
    pub name: String,
    /// Messages in document order.
    pub messages: Vec<Message>,
}

/// One translatable unit within a context.
///
/// Invariant kept by the parser: `status` is `Finished` only when
/// `translation` holds non-empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Original-language text; the lookup key within its context.
    pub source: String,
    /// Translated text. `None` when the element is absent entirely.
    pub translation: Option<String>,
    /// Tri-state translation status.
    pub status: TranslationStatus,
    /// Source-location references for translator tooling.
    pub locations: Vec<SourceReference>,
}

impl Message {
    /// Text to display for this message: the translation when finished,
    /// the source text otherwise (identity fallback).
    #[must_use]
    pub fn display_text(&self) -> &str {
        match (&self.translation, self.status) {
            (Some(translation), TranslationStatus::Finished) => translation,
            _ => &self.source,
        }
    }
}

impl Catalog {
    /// Parse a catalog from TS XML text.
    ///
    /// # Errors
    /// Returns [`LoadError`] when the document is not a well-formed TS
    /// catalog. The whole document is rejected; there is no per-entry
    /// degradation.
    pub fn from_xml(content: &str) -> Result<Self, LoadError> {
        parser::parse(content)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    /// Returns [`LoadError`] on read or parse failure.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        tracing::debug!(path = %path.display(), "Loading translation catalog");
        let content = std::fs::read_to_string(path)?;
        Self::from_xml(&content)
    }

    /// Serialize the catalog back to TS XML.
    ///
    /// Obsolete messages and location metadata are written out as well;
    /// they only disappear from the lookup table, not from the document.
    ///
    /// # Errors
    /// Returns an error when the XML writer fails.
    pub fn to_xml(&self) -> Result<String, std::io::Error> {
        writer::to_xml(self)
    }

    /// Build the immutable lookup table for this catalog.
    #[must_use]
    pub fn to_table(&self, policy: DuplicatePolicy) -> TranslationTable {
        TranslationTable::from_catalog(self, policy)
    }

    /// Find a context block by name.
    #[must_use]
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|context| context.name == name)
    }
}
