//! カタログファイルの探索
//!
//! gpg4usb 形式の配布物は `<app>_<lang>.ts` をロケールごとに 1 つ持つ。
//! ここではワークスペースを走査してカタログを列挙し、要求されたロケールの
//! カタログを選択する。テーブルをどの言語で読むかの決定は利用側の責務。

use std::collections::HashSet;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::LazyLock;

use globset::{
    Glob,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use thiserror::Error;

use crate::config::CatalogSettings;

/// ISO 639-1 base codes accepted as a catalog language suffix.
///
/// A shape check alone would claim stems like `app` or `doc`; restricting
/// the base code keeps detection honest while `ru_RU` style regions stay a
/// shape check.
static LANGUAGE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "ar", "be", "bg", "ca", "cs", "da", "de", "el", "en", "eo", "es", "et", "fa", "fi", "fr",
        "gl", "he", "hi", "hr", "hu", "hy", "id", "is", "it", "ja", "ka", "kk", "ko", "lt", "lv",
        "mk", "ms", "nb", "nl", "pl", "pt", "ro", "ru", "sk", "sl", "sq", "sr", "sv", "th", "tr",
        "uk", "ur", "uz", "vi", "zh",
    ]
    .into_iter()
    .collect()
});

/// Defines errors that may occur while scanning for catalogs
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Error when the configured catalog pattern cannot be compiled
    #[error("Invalid catalog pattern '{pattern}': {message}")]
    Pattern {
        /// Offending glob pattern
        pattern: String,
        /// Underlying globset message
        message: String,
    },
}

/// One catalog file found in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredCatalog {
    /// Absolute path of the catalog file.
    pub path: PathBuf,
    /// Language detected from the file name, when recognizable.
    pub language: Option<String>,
}

/// Scan a workspace for catalog files matching the configured pattern.
///
/// Walks the tree gitignore-aware, matches relative paths against the
/// settings glob and sorts the result by path for deterministic output.
///
/// # Errors
/// Returns [`DiscoveryError`] when the configured pattern is invalid.
pub fn find_catalog_files(
    workspace_root: &Path,
    settings: &CatalogSettings,
) -> Result<Vec<DiscoveredCatalog>, DiscoveryError> {
    tracing::debug!(workspace_root = %workspace_root.display(), "Scanning for catalogs");

    let pattern = &settings.catalog_files.file_pattern;
    let glob = Glob::new(pattern).map_err(|e| DiscoveryError::Pattern {
        pattern: pattern.clone(),
        message: e.to_string(),
    })?;
    let mut builder = GlobSetBuilder::new();
    builder.add(glob);
    let include_set = builder.build().map_err(|e| DiscoveryError::Pattern {
        pattern: pattern.clone(),
        message: e.to_string(),
    })?;

    let mut found = Vec::new();
    for result in WalkBuilder::new(workspace_root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();

        let Ok(relative_path) = path.strip_prefix(workspace_root) else {
            continue;
        };
        if !include_set.is_match(relative_path) {
            continue;
        }

        found.push(DiscoveredCatalog {
            path: path.to_path_buf(),
            language: detect_language_from_path(path),
        });
    }

    found.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(found)
}

/// Detect the catalog language from its file name.
///
/// # Examples
/// - `gpg4usb_ru.ts` → `ru`
/// - `app_de_DE.ts` → `de_DE`
/// - `release/ts/ru.ts` → `ru`
/// - `readme.ts` → `None`
#[must_use]
pub fn detect_language_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let parts: Vec<&str> = stem.split('_').collect();

    match parts.as_slice() {
        [.., base, region] if is_base_code(base) && is_region_code(region) => {
            Some(format!("{base}_{region}"))
        }
        [.., base] if is_base_code(base) => Some((*base).to_string()),
        _ => None,
    }
}

/// Select the catalog for a requested language.
///
/// Exact matches win; otherwise the base language is compared, so a
/// request for `ru_RU` still finds a plain `ru` catalog.
#[must_use]
pub fn select_for_language<'a>(
    catalogs: &'a [DiscoveredCatalog],
    language: &str,
) -> Option<&'a DiscoveredCatalog> {
    let requested = normalize_language(language);

    let exact = catalogs.iter().find(|catalog| {
        catalog.language.as_deref().is_some_and(|detected| normalize_language(detected) == requested)
    });
    if exact.is_some() {
        return exact;
    }

    let base = requested.split('_').next()?;
    catalogs.iter().find(|catalog| {
        catalog
            .language
            .as_deref()
            .map(normalize_language)
            .is_some_and(|detected| detected.split('_').next() == Some(base))
    })
}

/// Normalize a language code (lowercase and replace - with _)
fn normalize_language(code: &str) -> String {
    code.to_lowercase().replace('-', "_")
}

fn is_base_code(part: &str) -> bool {
    LANGUAGE_CODES.contains(part)
}

fn is_region_code(part: &str) -> bool {
    (2..=3).contains(&part.len())
        && part.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
