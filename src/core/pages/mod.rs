//! Structured page content.
//!
//! Each page with structured content has a concrete record type implementing
//! [`PageShape`]. The record's field set, including the length of every list,
//! is fixed by the type; builders only fill in values. [`PageContent`] is the
//! tagged union handed back to callers.

mod about;
mod home;
mod registry;

use std::sync::Arc;

use serde::Serialize;

use super::catalog::Catalog;
use super::locale::Locale;
use super::resolver::FlatLookup;

pub use about::{ABOUT_PAGE_ID, AboutPage, MemberSocials, TEAM_MEMBER_SLUGS, TeamBlock, TeamMember};
pub use home::{
    FeatureItem, FeaturesBlock, HOME_FEATURE_COUNT, HOME_PAGE_ID, HeroBlock, HomePage, SocialBlock,
};
pub use registry::{PageBuilder, PageRegistry};

/// Resolved structured content for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageContent {
    Home(HomePage),
    About(AboutPage),
}

impl PageContent {
    pub fn page_id(&self) -> &'static str {
        match self {
            PageContent::Home(_) => HomePage::PAGE_ID,
            PageContent::About(_) => AboutPage::PAGE_ID,
        }
    }

    pub fn as_home(&self) -> Option<&HomePage> {
        match self {
            PageContent::Home(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_about(&self) -> Option<&AboutPage> {
        match self {
            PageContent::About(page) => Some(page),
            _ => None,
        }
    }
}

/// A page record with a statically declared shape.
pub trait PageShape: Sized {
    /// Identifier the page is registered under.
    const PAGE_ID: &'static str;

    /// Every full key path the builder reads, in declaration order.
    fn schema() -> Vec<String>;

    /// Assemble the record. Never fails; unresolved leaves are empty.
    fn build(factory: &ResolverFactory) -> Self;

    fn into_content(self) -> PageContent;
}

/// Hands out flat lookups for one locale to page builders.
///
/// The catalog (after any default-locale fallback) is resolved once per
/// build, so every lookup of a page sees the same catalog.
#[derive(Debug, Clone)]
pub struct ResolverFactory {
    locale: Locale,
    catalog: Option<Arc<Catalog>>,
}

impl ResolverFactory {
    pub fn new(locale: impl Into<String>, catalog: Option<Arc<Catalog>>) -> Self {
        Self {
            locale: locale.into(),
            catalog,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn resolver(&self, namespace: &str) -> FlatLookup {
        FlatLookup::new(self.locale.clone(), namespace, self.catalog.clone())
    }
}
