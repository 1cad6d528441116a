//! Catalog sources.
//!
//! The engine never reads message files itself; it asks an injected
//! [`CatalogLoader`]. Production code uses [`FsCatalogLoader`] over a
//! next-intl style `messages/` directory, tests and embedders use
//! [`MemoryCatalogLoader`].

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::catalog::Catalog;
use super::error::CatalogLoadError;

/// Produces the full message tree for one locale.
///
/// Implementations must be all-or-nothing: either a complete catalog or an
/// error, never a partial tree.
pub trait CatalogLoader: Send + Sync {
    fn load(&self, locale: &str) -> Result<Catalog, CatalogLoadError>;
}

/// Reads `<messages_root>/<locale>.json`.
#[derive(Debug, Clone)]
pub struct FsCatalogLoader {
    messages_root: PathBuf,
}

impl FsCatalogLoader {
    pub fn new(messages_root: impl Into<PathBuf>) -> Self {
        Self {
            messages_root: messages_root.into(),
        }
    }

    pub fn messages_root(&self) -> &Path {
        &self.messages_root
    }

    /// Path of the message file for `locale`.
    pub fn path_for(&self, locale: &str) -> PathBuf {
        self.messages_root.join(format!("{}.json", locale))
    }

    /// Locales with a message file present, sorted.
    ///
    /// Only `*.json` files directly inside the messages root count.
    pub fn discover_locales(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.messages_root) else {
            return Vec::new();
        };

        let mut locales: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
            .filter_map(|path| extract_locale(&path))
            .collect();
        locales.sort();
        locales
    }
}

impl CatalogLoader for FsCatalogLoader {
    fn load(&self, locale: &str) -> Result<Catalog, CatalogLoadError> {
        let path = self.path_for(locale);
        let content =
            fs::read_to_string(&path).map_err(|e| CatalogLoadError::from_io(locale, path.clone(), &e))?;
        Catalog::from_json_str(locale, path.to_string_lossy(), &content)
    }
}

/// Extracts locale from a message file name.
///
/// - "en.json" -> Some("en")
/// - "/path/to/messages/zh-CN.json" -> Some("zh-CN")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Serves catalogs from JSON documents held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogLoader {
    documents: HashMap<String, Value>,
}

impl MemoryCatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the document for `locale`.
    pub fn with_locale(mut self, locale: impl Into<String>, document: Value) -> Self {
        self.documents.insert(locale.into(), document);
        self
    }
}

impl CatalogLoader for MemoryCatalogLoader {
    fn load(&self, locale: &str) -> Result<Catalog, CatalogLoadError> {
        let document = self
            .documents
            .get(locale)
            .ok_or_else(|| CatalogLoadError::Missing {
                locale: locale.to_string(),
                path: PathBuf::from(format!("memory:{}", locale)),
            })?;
        Catalog::from_json(locale, format!("memory:{}", locale), document)
    }
}
