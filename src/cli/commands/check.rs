use anyhow::{Result, bail};

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::report_check;
use super::helper::{Workspace, open_workspace};
use crate::core::check_pages;

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let Workspace { engine, cwd } = open_workspace(&cmd.common)?;

    let store = engine.locales();
    if let Some(unknown) = cmd.locales.iter().find(|l| !store.is_supported(l)) {
        bail!(
            "locale '{}' is not supported (supported locales: {})",
            unknown,
            store.list_supported().join(", ")
        );
    }

    let report = check_pages(&engine, &cmd.locales);
    tracing::debug!(
        locales = report.locales_checked,
        pages = report.pages_checked,
        keys = report.keys_checked,
        issues = report.issues.len(),
        "check finished"
    );
    report_check(&report, &cwd);

    if report.error_count() > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
