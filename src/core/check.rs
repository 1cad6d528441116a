//! Page completeness check.
//!
//! Walks every registered page schema against every requested locale's own
//! catalog (no fallback) and reports keys that would render blank.

use std::collections::HashSet;

use rayon::prelude::*;

use super::catalog::CatalogNode;
use super::engine::ContentEngine;
use crate::issues::{
    CatalogLoadIssue, EmptyValueIssue, Issue, MissingKeyIssue, Severity, TypeMismatchIssue,
};

/// Outcome of a completeness check.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Issues sorted by locale, page and key.
    pub issues: Vec<Issue>,
    pub locales_checked: usize,
    pub pages_checked: usize,
    /// Schema keys looked up, summed over locales with a loadable catalog.
    pub keys_checked: usize,
}

impl CheckReport {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == severity)
            .count()
    }
}

/// Check `locales` (all supported locales when empty).
///
/// Repeated locales are checked once, in first-seen order. Unsupported
/// locales are reported as catalog-load errors. Locales are checked in
/// parallel; the result does not depend on scheduling.
pub fn check_pages(engine: &ContentEngine, locales: &[String]) -> CheckReport {
    let locales: Vec<String> = if locales.is_empty() {
        engine.locales().list_supported().to_vec()
    } else {
        let mut seen = HashSet::new();
        locales
            .iter()
            .filter(|locale| seen.insert(locale.as_str()))
            .cloned()
            .collect()
    };

    let per_locale: Vec<(Vec<Issue>, usize)> = locales
        .par_iter()
        .map(|locale| check_locale(engine, locale))
        .collect();

    let mut issues = Vec::new();
    let mut keys_checked = 0;
    for (locale_issues, checked) in per_locale {
        issues.extend(locale_issues);
        keys_checked += checked;
    }
    issues.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    CheckReport {
        issues,
        locales_checked: locales.len(),
        pages_checked: engine.page_ids().len(),
        keys_checked,
    }
}

fn check_locale(engine: &ContentEngine, locale: &str) -> (Vec<Issue>, usize) {
    let catalog = match engine.catalog(locale) {
        Ok(catalog) => catalog,
        Err(err) => {
            let issue = CatalogLoadIssue {
                locale: locale.to_string(),
                error: err.to_string(),
            };
            return (vec![issue.into()], 0);
        }
    };

    let mut issues = Vec::new();
    let mut checked = 0;
    let registry = engine.registry();
    for page_id in registry.page_ids() {
        for key in registry.schema(page_id).unwrap_or_default() {
            checked += 1;
            let issue: Option<Issue> = match catalog.node(key) {
                None => Some(
                    MissingKeyIssue {
                        locale: locale.to_string(),
                        page_id: page_id.to_string(),
                        key: key.clone(),
                        source: catalog.source().to_string(),
                    }
                    .into(),
                ),
                Some(CatalogNode::Branch(_)) => Some(
                    TypeMismatchIssue {
                        locale: locale.to_string(),
                        page_id: page_id.to_string(),
                        key: key.clone(),
                        source: catalog.source().to_string(),
                    }
                    .into(),
                ),
                Some(CatalogNode::Leaf(text)) if text.is_empty() => Some(
                    EmptyValueIssue {
                        locale: locale.to_string(),
                        page_id: page_id.to_string(),
                        key: key.clone(),
                        source: catalog.source().to_string(),
                    }
                    .into(),
                ),
                Some(CatalogNode::Leaf(_)) => None,
            };
            issues.extend(issue);
        }
    }
    (issues, checked)
}
