//! Immutable lookup table built from a parsed catalog.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{
    Deserialize,
    Serialize,
};

use super::document::Catalog;

/// Resolution policy for two active messages sharing one source text
/// within a context.
///
/// The TS format does not declare precedence; which entry the original Qt
/// tooling honors is ambiguous, so the choice is explicit here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicatePolicy {
    /// The entry defined later in the document wins.
    #[default]
    LastWins,
    /// The entry defined first in the document wins.
    FirstWins,
}

/// Process-wide read-only translation table.
///
/// Built once from a [`Catalog`], never mutated afterwards; it holds no
/// interior mutability and may be shared across threads freely. Only
/// finished messages are stored, so obsolete entries can never shadow
/// active ones and unfinished entries fall through to the source text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationTable {
    contexts: HashMap<String, HashMap<String, String>>,
}

impl TranslationTable {
    /// An identity table: every lookup returns the source text unchanged.
    ///
    /// The degraded mode for hosts that hit a
    /// [`LoadError`](super::LoadError); localization failure must never
    /// block the application itself.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the table from a parsed catalog.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, policy: DuplicatePolicy) -> Self {
        let mut contexts: HashMap<String, HashMap<String, String>> = HashMap::new();

        for context in &catalog.contexts {
            let entries = contexts.entry(context.name.clone()).or_default();
            for message in &context.messages {
                if !message.status.is_active() {
                    continue;
                }
                let Some(translation) = &message.translation else {
                    continue;
                };
                match entries.entry(message.source.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(translation.clone());
                    }
                    Entry::Occupied(mut slot) => {
                        tracing::warn!(
                            context = %context.name,
                            source = %message.source,
                            ?policy,
                            "Duplicate active entry in catalog"
                        );
                        if policy == DuplicatePolicy::LastWins {
                            slot.insert(translation.clone());
                        }
                    }
                }
            }
        }

        Self { contexts }
    }

    /// Resolve the display text for a source string.
    ///
    /// Returns the finished translation when one exists, the source text
    /// unchanged otherwise (identity fallback). Never allocates.
    #[must_use]
    pub fn lookup<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.contexts
            .get(context)
            .and_then(|entries| entries.get(source))
            .map_or(source, String::as_str)
    }

    /// Number of finished entries across all contexts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contexts.values().map(HashMap::len).sum()
    }

    /// Whether the table holds no finished entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contexts.values().all(HashMap::is_empty)
    }
}
