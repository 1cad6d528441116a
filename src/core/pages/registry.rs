use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::{AboutPage, HomePage, PageContent, PageShape, ResolverFactory};
use crate::core::catalog::is_valid_key_path;
use crate::core::error::{RegistryError, UnknownPageError};

/// Page-specific assembly logic.
pub type PageBuilder = Box<dyn Fn(&ResolverFactory) -> PageContent + Send + Sync>;

struct RegisteredPage {
    schema: Vec<String>,
    build: PageBuilder,
}

/// Maps page identifiers to their builders and declared schemas.
///
/// Schemas are validated once, when a page is registered.
#[derive(Default)]
pub struct PageRegistry {
    pages: BTreeMap<String, RegisteredPage>,
}

impl fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageRegistry")
            .field("pages", &self.page_ids())
            .finish()
    }
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every page the site ships.
    pub fn site() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register_page::<HomePage>()?;
        registry.register_page::<AboutPage>()?;
        Ok(registry)
    }

    /// Register `build` under `page_id`, reading the keys in `schema`.
    pub fn register(
        &mut self,
        page_id: impl Into<String>,
        schema: Vec<String>,
        build: PageBuilder,
    ) -> Result<(), RegistryError> {
        let page_id = page_id.into();
        if page_id.is_empty() {
            return Err(RegistryError::EmptyPageId);
        }
        if self.pages.contains_key(&page_id) {
            return Err(RegistryError::DuplicatePage(page_id));
        }

        validate_schema(&page_id, &schema)?;

        self.pages.insert(page_id, RegisteredPage { schema, build });
        Ok(())
    }

    /// Register a page record type under its own id and schema.
    pub fn register_page<P: PageShape + 'static>(&mut self) -> Result<(), RegistryError> {
        self.register(
            P::PAGE_ID,
            P::schema(),
            Box::new(|factory: &ResolverFactory| P::build(factory).into_content()),
        )
    }

    pub fn contains(&self, page_id: &str) -> bool {
        self.pages.contains_key(page_id)
    }

    /// Registered page ids, sorted.
    pub fn page_ids(&self) -> Vec<&str> {
        self.pages.keys().map(String::as_str).collect()
    }

    pub fn schema(&self, page_id: &str) -> Option<&[String]> {
        self.pages.get(page_id).map(|page| page.schema.as_slice())
    }

    /// Run the builder registered for `page_id`.
    pub fn build(
        &self,
        page_id: &str,
        factory: &ResolverFactory,
    ) -> Result<PageContent, UnknownPageError> {
        let page = self.pages.get(page_id).ok_or_else(|| UnknownPageError {
            page_id: page_id.to_string(),
            registered: self.page_ids().into_iter().map(String::from).collect(),
        })?;
        Ok((page.build)(factory))
    }
}

fn validate_schema(page_id: &str, schema: &[String]) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for key_path in schema {
        if !is_valid_key_path(key_path) {
            return Err(RegistryError::InvalidKeyPath {
                page_id: page_id.to_string(),
                key_path: key_path.clone(),
            });
        }
        if !seen.insert(key_path.as_str()) {
            return Err(RegistryError::DuplicateKeyPath {
                page_id: page_id.to_string(),
                key_path: key_path.clone(),
            });
        }
    }
    Ok(())
}
