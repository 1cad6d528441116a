use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::{ConfigLoadResult, load_config},
    core::{ContentEngine, FsCatalogLoader, check_pages},
};

use super::types::{
    CheckPagesParams, CheckPagesResult, ConfigDto, ConfigValues, GetConfigParams,
    GetLocalesParams, IssueItem, LocaleInfo, LocalesResult, ResolveKeysParams, ResolveKeysResult,
    ResolvePageParams, ResolvePageResult, ResolvedKey,
};

#[derive(Clone)]
pub struct PagetextMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for PagetextMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PagetextMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get project configuration
    #[tool(
        description = "Get pagetext configuration (messages root, supported locales, default locale) for a project."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = load_project_config(&params.0.project_root_path)?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }

    /// List supported locales with catalog status
    #[tool(
        description = "List supported locales with their message file, key count and load error if any. Also lists message files for locales missing from the config."
    )]
    pub async fn get_locales(
        &self,
        params: Parameters<GetLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let (config, engine) = open_project(&params.0.project_root_path)?;
        let messages_root = config.config.messages_root_in(&config.project_root);
        let loader = FsCatalogLoader::new(&messages_root);
        let store = engine.locales();

        let locales: Vec<LocaleInfo> = store
            .list_supported()
            .iter()
            .map(|locale| {
                let file_path = loader.path_for(locale).to_string_lossy().to_string();
                let (key_count, error) = match engine.catalog(locale) {
                    Ok(catalog) => (catalog.leaf_count(), None),
                    Err(err) => (0, Some(err.to_string())),
                };
                LocaleInfo {
                    locale: locale.clone(),
                    is_default: locale == store.default_locale(),
                    file_path,
                    key_count,
                    error,
                }
            })
            .collect();

        let unconfigured: Vec<String> = loader
            .discover_locales()
            .into_iter()
            .filter(|locale| !store.is_supported(locale))
            .collect();

        let result = LocalesResult {
            messages_root: messages_root.to_string_lossy().to_string(),
            default_locale: store.default_locale().to_string(),
            locales,
            unconfigured,
        };

        json_result(&result)
    }

    /// Resolve flat keys in a namespace
    #[tool(
        description = "Resolve message keys inside a namespace for a locale. Unsupported locales resolve as the default locale; a locale without a usable catalog is served from the default locale's catalog. Missing keys resolve to an empty value with found=false."
    )]
    pub async fn resolve_keys(
        &self,
        params: Parameters<ResolveKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (_, engine) = open_project(&params.project_root_path)?;
        let locale = params
            .locale
            .as_deref()
            .unwrap_or(engine.locales().default_locale());

        let lookup = engine.resolve_simple(locale, &params.namespace);
        let values = params
            .keys
            .iter()
            .map(|key| {
                let found = lookup.lookup(key);
                ResolvedKey {
                    key: key.clone(),
                    full_key: lookup.full_key(key),
                    value: found.unwrap_or_default().to_string(),
                    found: found.is_some(),
                }
            })
            .collect();

        let result = ResolveKeysResult {
            locale: lookup.locale().to_string(),
            served_locale: lookup.served_locale().map(String::from),
            namespace: lookup.namespace().to_string(),
            values,
        };

        json_result(&result)
    }

    /// Resolve a page's structured content
    #[tool(
        description = "Resolve the full structured content of a registered page (e.g. home, about) for a locale. Missing translations appear as empty strings."
    )]
    pub async fn resolve_page(
        &self,
        params: Parameters<ResolvePageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (_, engine) = open_project(&params.project_root_path)?;
        let requested = params
            .locale
            .as_deref()
            .unwrap_or(engine.locales().default_locale());

        let content = engine
            .resolve_structured(requested, &params.page_id)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let content = serde_json::to_value(&content).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        let locale = engine.locales().normalize(requested);
        let served_locale = engine
            .effective_catalog(&locale)
            .map(|catalog| catalog.locale().to_string());

        let result = ResolvePageResult {
            page_id: params.page_id,
            locale,
            served_locale,
            content,
        };

        json_result(&result)
    }

    /// Check page schemas against catalogs
    #[tool(
        description = "Check every registered page's keys against each locale's own catalog (no fallback). Reports catalog-load, missing-key and type-mismatch errors plus empty-value warnings."
    )]
    pub async fn check_pages(
        &self,
        params: Parameters<CheckPagesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (_, engine) = open_project(&params.project_root_path)?;
        let locales = params.locales.unwrap_or_default();

        let store = engine.locales();
        if let Some(unknown) = locales.iter().find(|l| !store.is_supported(l)) {
            return Err(McpError::invalid_params(
                format!(
                    "locale '{}' is not supported (supported locales: {})",
                    unknown,
                    store.list_supported().join(", ")
                ),
                None,
            ));
        }

        let report = check_pages(&engine, &locales);
        let result = CheckPagesResult {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            locales_checked: report.locales_checked,
            pages_checked: report.pages_checked,
            keys_checked: report.keys_checked,
            issues: report.issues.iter().map(IssueItem::from).collect(),
        };

        json_result(&result)
    }
}

fn load_project_config(project_root_path: &str) -> Result<ConfigLoadResult, McpError> {
    load_config(Path::new(project_root_path))
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))
}

fn open_project(project_root_path: &str) -> Result<(ConfigLoadResult, ContentEngine), McpError> {
    let config = load_project_config(project_root_path)?;
    let engine = ContentEngine::from_config(&config.config, &config.project_root).map_err(|e| {
        McpError::internal_error(format!("Failed to open content engine: {:#}", e), None)
    })?;
    Ok((config, engine))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for PagetextMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "pagetext MCP resolves localized page content from per-locale JSON message catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_locales - Get supported locales, their message files and key counts\n\
                 3. resolve_keys - Resolve keys inside a namespace for a locale\n\
                 4. resolve_page - Resolve a page's structured content for a locale\n\
                 5. check_pages - Find keys pages read that a locale's catalog lacks\n\n\
                 Recommended Workflow:\n\
                 1. Use check_pages to see which locales render blank fields\n\
                 2. Add the missing keys to the reported message files\n\
                 3. Use resolve_page to confirm the rendered content"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = PagetextMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
