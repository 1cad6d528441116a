use anyhow::Result;

use super::super::args::GetCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{ResolvedRow, print_resolved};
use super::helper::{Workspace, open_workspace, warn_on_locale_fallback};

pub fn get(cmd: GetCommand) -> Result<ExitStatus> {
    let Workspace { engine, .. } = open_workspace(&cmd.common)?;
    let locale = cmd
        .locale
        .as_deref()
        .unwrap_or(engine.locales().default_locale());

    warn_on_locale_fallback(&engine, locale);
    let lookup = engine.resolve_simple(locale, &cmd.namespace);

    let rows: Vec<ResolvedRow> = cmd
        .keys
        .iter()
        .map(|key| ResolvedRow {
            key: key.clone(),
            value: lookup.lookup(key).map(String::from),
        })
        .collect();
    print_resolved(&rows);

    // Missing keys render as empty text; report them as problems.
    if rows.iter().any(|row| row.value.is_none()) {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
