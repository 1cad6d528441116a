//! Error types raised by the resolution core.
//!
//! Only configuration mistakes and unknown page requests escape to callers.
//! Catalog load failures are recovered inside the resolver (default-locale
//! fallback) and missing keys are not errors at all.

use std::{io, path::PathBuf};

use thiserror::Error;

/// A message catalog for a locale could not be produced.
///
/// Cloneable so a memoized failure can be handed to every caller that asks
/// for the same locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogLoadError {
    /// The backing resource for the locale does not exist.
    #[error("no message catalog for locale '{locale}' at {}", path.display())]
    Missing { locale: String, path: PathBuf },

    /// The resource exists but is not a valid message tree.
    #[error("message catalog for locale '{locale}' is malformed: {reason}")]
    Malformed { locale: String, reason: String },

    /// Any other read failure.
    #[error("failed to read message catalog for locale '{locale}': {reason}")]
    Io { locale: String, reason: String },

    /// The locale is not in the supported set; nothing was loaded.
    #[error("locale '{locale}' is not supported")]
    Unsupported { locale: String },
}

impl CatalogLoadError {
    pub fn locale(&self) -> &str {
        match self {
            CatalogLoadError::Missing { locale, .. }
            | CatalogLoadError::Malformed { locale, .. }
            | CatalogLoadError::Io { locale, .. }
            | CatalogLoadError::Unsupported { locale } => locale,
        }
    }

    /// Map an I/O error from reading `path` into the matching variant.
    pub fn from_io(locale: impl Into<String>, path: PathBuf, err: &io::Error) -> Self {
        let locale = locale.into();
        if err.kind() == io::ErrorKind::NotFound {
            CatalogLoadError::Missing { locale, path }
        } else {
            CatalogLoadError::Io {
                locale,
                reason: format!("{}: {}", path.display(), err),
            }
        }
    }
}

/// Structured content was requested for a page id nobody registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page '{page_id}' (registered pages: {})", registered.join(", "))]
pub struct UnknownPageError {
    pub page_id: String,
    pub registered: Vec<String>,
}

/// A page schema was rejected at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("page id must not be empty")]
    EmptyPageId,

    #[error("page '{0}' is already registered")]
    DuplicatePage(String),

    #[error("page '{page_id}' declares an invalid key path '{key_path}'")]
    InvalidKeyPath { page_id: String, key_path: String },

    #[error("page '{page_id}' declares key path '{key_path}' more than once")]
    DuplicateKeyPath { page_id: String, key_path: String },
}

/// The supported-locale configuration is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleStoreError {
    #[error("at least one supported locale is required")]
    Empty,

    #[error("locale '{0}' is listed more than once")]
    Duplicate(String),

    #[error("default locale '{0}' is not in the supported locale list")]
    DefaultNotSupported(String),
}
