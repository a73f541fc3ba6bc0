//! Core types used throughout the project.

/// Translation state of a single message.
///
/// The state is fixed at authoring time; the runtime only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationStatus {
    /// Translation is complete and safe to display.
    Finished,
    /// No translation supplied yet; the source text is shown instead.
    Unfinished,
    /// Source string no longer used by the live application. Kept for
    /// translator reference, excluded from lookup.
    Obsolete,
}

impl TranslationStatus {
    /// Whether a message in this state may be returned by a lookup.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Attribute value as written in the TS file, if any.
    ///
    /// `Finished` has no attribute representation; Qt Linguist omits the
    /// `type` attribute for finished translations.
    #[must_use]
    pub const fn as_attr(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Obsolete => Some("obsolete"),
        }
    }
}

/// Reference into the application source a message originates from.
///
/// Advisory metadata for translator tooling only; lookup never consults it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceReference {
    /// Path as recorded by the extraction tool (relative to the catalog).
    pub filename: String,
    /// 1-indexed line number, when recorded.
    pub line: Option<u32>,
}
