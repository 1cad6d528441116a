use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::issues::{Issue, Report};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root (where .pagetextrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLocalesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveKeysParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Requested locale; defaults to the configured default locale
    pub locale: Option<String>,
    /// Catalog subtree the keys are relative to, e.g. "home" (empty for root)
    pub namespace: String,
    /// Keys relative to the namespace, e.g. ["hero.headline"]
    pub keys: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvePageParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Requested locale; defaults to the configured default locale
    pub locale: Option<String>,
    /// Registered page id, e.g. "home" or "about"
    pub page_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckPagesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Locales to check; all supported locales when omitted
    pub locales: Option<Vec<String>>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub messages_root: String,
    pub locales: Vec<String>,
    pub default_locale: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            messages_root: c.messages_root,
            locales: c.locales,
            default_locale: c.default_locale,
        }
    }
}

// ============================================================
// Locales Types (get_locales)
// ============================================================

/// Result of get_locales operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub messages_root: String,
    pub default_locale: String,
    pub locales: Vec<LocaleInfo>,
    /// Message files present on disk for locales not in the config
    pub unconfigured: Vec<String>,
}

/// Information about a single supported locale
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub locale: String,
    pub is_default: bool,
    pub file_path: String,
    pub key_count: usize,
    /// Set when the catalog cannot be loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================
// Resolution Types (resolve_keys, resolve_page)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveKeysResult {
    /// Locale after normalization
    pub locale: String,
    /// Locale whose catalog answered; differs from `locale` after fallback
    pub served_locale: Option<String>,
    pub namespace: String,
    pub values: Vec<ResolvedKey>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedKey {
    pub key: String,
    pub full_key: String,
    /// Resolved text; empty when not found
    pub value: String,
    pub found: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvePageResult {
    pub page_id: String,
    pub locale: String,
    pub served_locale: Option<String>,
    /// The page's structured content
    pub content: serde_json::Value,
}

// ============================================================
// Check Types (check_pages)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckPagesResult {
    pub error_count: usize,
    pub warning_count: usize,
    pub locales_checked: usize,
    pub pages_checked: usize,
    pub keys_checked: usize,
    pub issues: Vec<IssueItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub severity: String,
    pub rule: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        Self {
            severity: issue.severity().to_string(),
            rule: issue.rule().to_string(),
            locale: issue.locale().to_string(),
            page_id: issue.page_id().map(String::from),
            key: issue.key().map(String::from),
            source: issue.source().map(String::from),
            message: issue.message(),
            hint: issue.hint(),
        }
    }
}
