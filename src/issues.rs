//! Issue types produced by the page completeness check.
//!
//! Each issue is self-contained with everything the CLI reporter and the MCP
//! server need to display it.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    CatalogLoad,
    MissingKey,
    TypeMismatch,
    EmptyValue,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::CatalogLoad => write!(f, "catalog-load"),
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::TypeMismatch => write!(f, "type-mismatch"),
            Rule::EmptyValue => write!(f, "empty-value"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A locale's catalog could not be loaded; its pages render with the
/// default locale's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogLoadIssue {
    pub locale: String,
    pub error: String,
}

impl CatalogLoadIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::CatalogLoad
    }
}

/// A key a page reads is absent from a locale's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingKeyIssue {
    pub locale: String,
    pub page_id: String,
    pub key: String,
    /// Catalog source (file path).
    pub source: String,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// A key a page reads as text is a nested group in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMismatchIssue {
    pub locale: String,
    pub page_id: String,
    pub key: String,
    pub source: String,
}

impl TypeMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::TypeMismatch
    }
}

/// A key a page reads is present but empty. Often intentional (a disabled
/// social link), so only a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyValueIssue {
    pub locale: String,
    pub page_id: String,
    pub key: String,
    pub source: String,
}

impl EmptyValueIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EmptyValue
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while checking page schemas against catalogs.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Issue {
    CatalogLoad(CatalogLoadIssue),
    MissingKey(MissingKeyIssue),
    TypeMismatch(TypeMismatchIssue),
    EmptyValue(EmptyValueIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    /// Ordering used for stable output: locale, then page, then key.
    pub fn sort_key(&self) -> (&str, &str, &str, Rule) {
        (
            self.locale(),
            self.page_id().unwrap_or(""),
            self.key().unwrap_or(""),
            self.rule(),
        )
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI or MCP clients.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn locale(&self) -> &str;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    fn page_id(&self) -> Option<&str> {
        None
    }

    fn key(&self) -> Option<&str> {
        None
    }

    /// Where the offending catalog came from.
    fn source(&self) -> Option<&str> {
        None
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }
}

impl Report for CatalogLoadIssue {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some(format!(
            "pages requested in '{}' render with the default locale's content",
            self.locale
        ))
    }
}

impl Report for MissingKeyIssue {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn page_id(&self) -> Option<&str> {
        Some(&self.page_id)
    }

    fn key(&self) -> Option<&str> {
        Some(&self.key)
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }

    fn hint(&self) -> Option<String> {
        Some(format!("add \"{}\" to the {} messages", self.key, self.locale))
    }
}

impl Report for TypeMismatchIssue {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn page_id(&self) -> Option<&str> {
        Some(&self.page_id)
    }

    fn key(&self) -> Option<&str> {
        Some(&self.key)
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }

    fn hint(&self) -> Option<String> {
        Some("expected a string, found a nested object".to_string())
    }
}

impl Report for EmptyValueIssue {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn page_id(&self) -> Option<&str> {
        Some(&self.page_id)
    }

    fn key(&self) -> Option<&str> {
        Some(&self.key)
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }
}
