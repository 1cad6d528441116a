use anyhow::Result;

use super::super::args::LocalesCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{LocaleRow, print_locales};
use super::helper::{Workspace, open_workspace};

/// List every supported locale with its catalog status.
///
/// Fails when a catalog cannot be loaded, since that locale silently serves
/// default-locale content.
pub fn locales(cmd: LocalesCommand) -> Result<ExitStatus> {
    let Workspace { engine, cwd } = open_workspace(&cmd.common)?;
    let store = engine.locales();

    let rows: Vec<LocaleRow> = store
        .list_supported()
        .iter()
        .map(|locale| LocaleRow {
            locale: locale.clone(),
            is_default: locale == store.default_locale(),
            status: engine
                .catalog(locale)
                .map(|catalog| (catalog.source().to_string(), catalog.leaf_count()))
                .map_err(|err| err.to_string()),
        })
        .collect();

    print_locales(&rows, &cwd);

    if rows.iter().any(|row| row.status.is_err()) {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
