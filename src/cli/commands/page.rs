use anyhow::{Context, Result};

use super::super::args::PageCommand;
use super::super::exit_status::ExitStatus;
use super::helper::{Workspace, open_workspace, warn_on_locale_fallback};

pub fn page(cmd: PageCommand) -> Result<ExitStatus> {
    let Workspace { engine, .. } = open_workspace(&cmd.common)?;
    let locale = cmd
        .locale
        .as_deref()
        .unwrap_or(engine.locales().default_locale());

    let content = engine.resolve_structured(locale, &cmd.page_id)?;
    warn_on_locale_fallback(&engine, locale);

    let json =
        serde_json::to_string_pretty(&content).context("Failed to serialize page content")?;
    println!("{}", json);

    Ok(ExitStatus::Success)
}
