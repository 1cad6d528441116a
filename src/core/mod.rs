//! Content resolution engine.
//!
//! Leaf first:
//!
//! - `locale`: supported locales and normalization
//! - `catalog`: immutable per-locale message trees
//! - `loader`: injectable catalog sources (filesystem, in-memory)
//! - `cache`: single-flight per-locale memoization
//! - `resolver`: flat key lookups with catalog-level fallback
//! - `pages`: typed page shapes and their registry
//! - `engine`: the façade page components call
//! - `check`: page schema completeness against catalogs

pub mod cache;
pub mod catalog;
pub mod check;
pub mod engine;
pub mod error;
pub mod loader;
pub mod locale;
pub mod pages;
pub mod resolver;

pub use cache::CatalogCache;
pub use catalog::{Catalog, CatalogNode};
pub use check::{CheckReport, check_pages};
pub use engine::ContentEngine;
pub use error::{CatalogLoadError, LocaleStoreError, RegistryError, UnknownPageError};
pub use loader::{CatalogLoader, FsCatalogLoader, MemoryCatalogLoader};
pub use locale::{Locale, LocaleStore};
pub use pages::{PageContent, PageRegistry, PageShape, ResolverFactory};
pub use resolver::FlatLookup;
