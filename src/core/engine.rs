//! The single entry point page components use to obtain content.

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};

use super::cache::{CatalogCache, LoadOutcome};
use super::catalog::Catalog;
use super::error::{CatalogLoadError, UnknownPageError};
use super::loader::{CatalogLoader, FsCatalogLoader};
use super::locale::LocaleStore;
use super::pages::{PageContent, PageRegistry, ResolverFactory};
use super::resolver::{FlatLookup, catalog_with_fallback, make_resolver};
use crate::config::Config;

/// Combines locale normalization, catalog caching, flat lookups and the page
/// registry behind two calls: [`ContentEngine::resolve_simple`] and
/// [`ContentEngine::resolve_structured`].
///
/// `Send + Sync`; share one engine across requests.
#[derive(Debug)]
pub struct ContentEngine {
    locales: LocaleStore,
    cache: CatalogCache,
    registry: PageRegistry,
}

impl ContentEngine {
    pub fn new(
        locales: LocaleStore,
        loader: impl CatalogLoader + 'static,
        registry: PageRegistry,
    ) -> Self {
        Self {
            locales,
            cache: CatalogCache::new(loader),
            registry,
        }
    }

    /// Engine with every page the site ships registered.
    pub fn with_site_pages(
        locales: LocaleStore,
        loader: impl CatalogLoader + 'static,
    ) -> Result<Self> {
        let registry = PageRegistry::site().context("Failed to register site pages")?;
        Ok(Self::new(locales, loader, registry))
    }

    /// Engine reading `<project_root>/<messagesRoot>/<locale>.json`.
    pub fn from_config(config: &Config, project_root: &Path) -> Result<Self> {
        let locales = config.locale_store()?;
        let loader = FsCatalogLoader::new(config.messages_root_in(project_root));
        Self::with_site_pages(locales, loader)
    }

    pub fn locales(&self) -> &LocaleStore {
        &self.locales
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn page_ids(&self) -> Vec<&str> {
        self.registry.page_ids()
    }

    /// Flat lookup for `locale` (normalized) scoped to `namespace`.
    pub fn resolve_simple(&self, locale: &str, namespace: &str) -> FlatLookup {
        make_resolver(&self.locales, &self.cache, locale, namespace)
    }

    /// Structured content for `page_id` in `locale` (normalized).
    ///
    /// Fails only when `page_id` is not registered; missing translations
    /// produce empty fields.
    pub fn resolve_structured(
        &self,
        locale: &str,
        page_id: &str,
    ) -> Result<PageContent, UnknownPageError> {
        if !self.registry.contains(page_id) {
            return Err(UnknownPageError {
                page_id: page_id.to_string(),
                registered: self.page_ids().into_iter().map(String::from).collect(),
            });
        }

        let locale = self.locales.normalize(locale);
        let catalog = catalog_with_fallback(&self.locales, &self.cache, &locale);
        let factory = ResolverFactory::new(locale, catalog);
        self.registry.build(page_id, &factory)
    }

    /// The raw cached load result for `locale`, without fallback.
    ///
    /// Unsupported locales are rejected before they reach the cache or the
    /// loader.
    pub fn catalog(&self, locale: &str) -> LoadOutcome {
        if !self.locales.is_supported(locale) {
            return Err(CatalogLoadError::Unsupported {
                locale: locale.to_string(),
            });
        }
        self.cache.get(locale)
    }

    /// Catalog answering lookups for `locale` after normalization and fallback.
    pub fn effective_catalog(&self, locale: &str) -> Option<Arc<Catalog>> {
        let locale = self.locales.normalize(locale);
        catalog_with_fallback(&self.locales, &self.cache, &locale)
    }

    /// Forget the cached catalog for `locale`; the next resolution reloads it.
    pub fn reload(&self, locale: &str) -> bool {
        self.cache.invalidate(locale)
    }

    /// Forget every cached catalog.
    pub fn reload_all(&self) {
        self.cache.clear();
    }
}
