use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use super::super::report::{print_fallback_warning, print_warning};
use crate::config::{ConfigLoadResult, load_config, resolve_against};
use crate::core::{Catalog, ContentEngine, FsCatalogLoader};

/// An engine opened for the current directory, plus the directory used to
/// shorten reported paths.
pub struct Workspace {
    pub engine: ContentEngine,
    pub cwd: PathBuf,
}

/// Load `.pagetextrc.json`, apply command-line overrides and open the engine.
pub fn open_workspace(common: &CommonArgs) -> Result<Workspace> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let ConfigLoadResult {
        mut config,
        from_file,
        project_root,
    } = load_config(&cwd)?;

    if let Some(locale) = &common.default_locale {
        if !config.locales.contains(locale) {
            config.locales.push(locale.clone());
        }
        config.default_locale = locale.clone();
        config.validate()?;
    }

    let messages_root = match &common.messages_root {
        Some(path) => resolve_against(&cwd, path),
        None => config.messages_root_in(&project_root),
    };

    tracing::debug!(
        from_file,
        messages_root = %messages_root.display(),
        locales = ?config.locales,
        default_locale = %config.default_locale,
        "opening content engine"
    );

    let engine =
        ContentEngine::with_site_pages(config.locale_store()?, FsCatalogLoader::new(messages_root))?;
    Ok(Workspace { engine, cwd })
}

/// Warn on stderr when `requested` will not be answered by its own catalog.
pub fn warn_on_locale_fallback(engine: &ContentEngine, requested: &str) {
    let store = engine.locales();
    if !store.is_supported(requested) {
        print_warning(&format!(
            "locale '{}' is not supported; using '{}'",
            requested,
            store.default_locale()
        ));
    }

    let locale = store.normalize(requested);
    let served = engine.effective_catalog(&locale);
    let served_locale = served.as_deref().map(Catalog::locale);
    if served_locale != Some(locale.as_str()) {
        print_fallback_warning(&locale, served_locale);
    }
}
