//! Process-wide, per-locale catalog memoization.
//!
//! # Invariants
//!
//! 1. **Single flight**: concurrent first requests for a locale run the
//!    loader once; every caller receives the same `Arc<Catalog>`.
//! 2. **Failures are memoized too**: a locale whose load failed keeps
//!    returning the same error until it is invalidated.
//! 3. **Read-only after population**: cached catalogs are never mutated;
//!    invalidation swaps in a fresh slot and leaves outstanding `Arc`s intact.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use super::catalog::Catalog;
use super::error::CatalogLoadError;
use super::loader::CatalogLoader;
use super::locale::Locale;

pub type LoadOutcome = Result<Arc<Catalog>, CatalogLoadError>;

type Slot = Arc<OnceLock<LoadOutcome>>;

pub struct CatalogCache {
    loader: Box<dyn CatalogLoader>,
    slots: Mutex<HashMap<Locale, Slot>>,
}

impl fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogCache")
            .field("cached_locales", &self.cached_locales())
            .finish_non_exhaustive()
    }
}

impl CatalogCache {
    pub fn new(loader: impl CatalogLoader + 'static) -> Self {
        Self::from_boxed(Box::new(loader))
    }

    pub fn from_boxed(loader: Box<dyn CatalogLoader>) -> Self {
        Self {
            loader,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Return the catalog for `locale`, loading it on first use.
    ///
    /// The slot lock is released before loading, so loads for different
    /// locales proceed independently while callers for the same locale wait
    /// on that locale's `OnceLock`.
    pub fn get(&self, locale: &str) -> LoadOutcome {
        let slot = self.slot(locale);
        slot.get_or_init(|| {
            let outcome = self.loader.load(locale).map(Arc::new);
            match &outcome {
                Ok(catalog) => tracing::info!(
                    locale,
                    source = catalog.source(),
                    keys = catalog.leaf_count(),
                    "loaded message catalog"
                ),
                Err(err) => tracing::warn!(locale, error = %err, "message catalog unavailable"),
            }
            outcome
        })
        .clone()
    }

    /// True when a load for `locale` has completed (successfully or not).
    pub fn is_cached(&self, locale: &str) -> bool {
        self.lock()
            .get(locale)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Locales with a completed load, sorted.
    pub fn cached_locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self
            .lock()
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(locale, _)| locale.clone())
            .collect();
        locales.sort();
        locales
    }

    /// Drop the memoized result for `locale`. The next `get` reloads.
    ///
    /// Returns true if something was cached.
    pub fn invalidate(&self, locale: &str) -> bool {
        let removed = self.lock().remove(locale);
        if removed.is_some() {
            tracing::debug!(locale, "invalidated message catalog");
        }
        removed.is_some_and(|slot| slot.get().is_some())
    }

    /// Drop every memoized result.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn slot(&self, locale: &str) -> Slot {
        self.lock().entry(locale.to_string()).or_default().clone()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Locale, Slot>> {
        // The map only holds slot handles; a panic elsewhere cannot leave it torn.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
