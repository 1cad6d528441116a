//! Flat key lookups with locale fallback.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unsupported locale | Locale not in the store | Default locale used |
//! | Catalog load error | File missing or malformed | Default locale catalog used |
//! | Default catalog load error | Same, for the default | Every lookup returns `""` |
//! | Missing key | Path absent or ends on a branch | Returns `""` |
//! | Empty segment | `""`, `"a."`, `"a..b"` | Returns `""` |
//!
//! Fallback happens per catalog, never per key: a key missing from a
//! successfully loaded `de` catalog is not looked up in `en`.

use std::sync::Arc;

use super::cache::CatalogCache;
use super::catalog::{Catalog, join_key_path};
use super::locale::{Locale, LocaleStore};

/// A lookup bound to one locale's catalog and one namespace.
///
/// Cheap to clone; the catalog is shared.
#[derive(Debug, Clone)]
pub struct FlatLookup {
    locale: Locale,
    namespace: String,
    catalog: Option<Arc<Catalog>>,
}

impl FlatLookup {
    pub fn new(
        locale: impl Into<String>,
        namespace: impl Into<String>,
        catalog: Option<Arc<Catalog>>,
    ) -> Self {
        Self {
            locale: locale.into(),
            namespace: namespace.into(),
            catalog,
        }
    }

    /// The (normalized) locale this lookup was requested for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The locale whose catalog actually answers lookups.
    ///
    /// Differs from [`FlatLookup::locale`] after a catalog-level fallback and
    /// is `None` when no catalog could be loaded at all.
    pub fn served_locale(&self) -> Option<&str> {
        self.catalog.as_deref().map(Catalog::locale)
    }

    /// True when lookups are not served by the requested locale's catalog.
    pub fn is_degraded(&self) -> bool {
        self.served_locale() != Some(self.locale.as_str())
    }

    pub fn catalog(&self) -> Option<&Arc<Catalog>> {
        self.catalog.as_ref()
    }

    /// The full key path `key` resolves to.
    pub fn full_key(&self, key: &str) -> String {
        join_key_path(&self.namespace, key)
    }

    /// Look up `key`, distinguishing an absent key (`None`) from an empty
    /// translation (`Some("")`).
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let catalog = self.catalog.as_deref()?;
        catalog.lookup(&self.full_key(key))
    }

    /// Look up `key`, returning `""` when it cannot be resolved.
    pub fn get(&self, key: &str) -> &str {
        match self.lookup(key) {
            Some(text) => text,
            None => {
                tracing::debug!(
                    locale = %self.locale,
                    key = %self.full_key(key),
                    "missing message key"
                );
                ""
            }
        }
    }

    /// Owned variant of [`FlatLookup::get`].
    pub fn text(&self, key: &str) -> String {
        self.get(key).to_string()
    }

    /// A lookup narrowed to the `sub` subtree of this namespace.
    pub fn scope(&self, sub: &str) -> FlatLookup {
        Self {
            locale: self.locale.clone(),
            namespace: join_key_path(&self.namespace, sub),
            catalog: self.catalog.clone(),
        }
    }

    /// A lookup narrowed to element `index` of the list at `list`.
    pub fn item(&self, list: &str, index: usize) -> FlatLookup {
        self.scope(list).scope(&index.to_string())
    }

    /// Consume the lookup into a plain `key -> text` function.
    pub fn into_fn(self) -> impl Fn(&str) -> String {
        move |key: &str| self.text(key)
    }
}

/// Catalog for `locale`, falling back to the default locale's catalog.
///
/// `locale` must already be normalized. When it is the default locale a load
/// failure is final: the fallback would be the same catalog.
pub fn catalog_with_fallback(
    store: &LocaleStore,
    cache: &CatalogCache,
    locale: &str,
) -> Option<Arc<Catalog>> {
    let err = match cache.get(locale) {
        Ok(catalog) => return Some(catalog),
        Err(err) => err,
    };

    let default = store.default_locale();
    if locale == default {
        tracing::debug!(locale, error = %err, "default catalog unavailable, lookups resolve to empty text");
        return None;
    }

    tracing::debug!(locale, fallback = default, error = %err, "using default locale catalog");
    match cache.get(default) {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            tracing::debug!(locale = default, error = %err, "default catalog unavailable, lookups resolve to empty text");
            None
        }
    }
}

/// Build a lookup for `locale` scoped to `namespace`.
pub fn make_resolver(
    store: &LocaleStore,
    cache: &CatalogCache,
    locale: &str,
    namespace: &str,
) -> FlatLookup {
    let normalized = store.normalize(locale);
    if normalized != locale {
        tracing::debug!(requested = locale, locale = %normalized, "unsupported locale, using default");
    }
    let catalog = catalog_with_fallback(store, cache, &normalized);
    FlatLookup::new(normalized, namespace, catalog)
}
