use super::error::LocaleStoreError;

/// Locale code (e.g., "en", "zh-CN").
pub type Locale = String;

/// The closed set of locales the site ships, plus the default.
///
/// Every other component passes caller-supplied locales through
/// [`LocaleStore::normalize`] before touching a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStore {
    supported: Vec<Locale>,
    default: Locale,
}

impl LocaleStore {
    /// Create a store. Order of `supported` is preserved for listing.
    pub fn new(
        supported: impl IntoIterator<Item = impl Into<String>>,
        default: impl Into<String>,
    ) -> Result<Self, LocaleStoreError> {
        let default = default.into();
        let mut locales: Vec<Locale> = Vec::new();
        for locale in supported {
            let locale = locale.into();
            if locales.contains(&locale) {
                return Err(LocaleStoreError::Duplicate(locale));
            }
            locales.push(locale);
        }

        if locales.is_empty() {
            return Err(LocaleStoreError::Empty);
        }
        if !locales.contains(&default) {
            return Err(LocaleStoreError::DefaultNotSupported(default));
        }

        Ok(Self {
            supported: locales,
            default,
        })
    }

    /// A store with a single locale that is also the default.
    pub fn single(locale: impl Into<String>) -> Self {
        let locale = locale.into();
        Self {
            supported: vec![locale.clone()],
            default: locale,
        }
    }

    pub fn list_supported(&self) -> &[Locale] {
        &self.supported
    }

    pub fn default_locale(&self) -> &str {
        &self.default
    }

    pub fn is_supported(&self, candidate: &str) -> bool {
        self.supported.iter().any(|l| l == candidate)
    }

    /// Return `candidate` when supported, the default locale otherwise.
    pub fn normalize(&self, candidate: &str) -> Locale {
        if self.is_supported(candidate) {
            candidate.to_string()
        } else {
            self.default.clone()
        }
    }
}
