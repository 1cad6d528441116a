//! Report formatting and printing utilities.
//!
//! Kept apart from the engine so pagetext can be used as a library. Every
//! printer has a `*_to` variant taking a writer for tests.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::CheckReport;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// One line of `pagetext locales` output.
#[derive(Debug, Clone)]
pub struct LocaleRow {
    pub locale: String,
    pub is_default: bool,
    /// Catalog path and leaf count, or the load error.
    pub status: Result<(String, usize), String>,
}

/// One line of `pagetext get` output.
#[derive(Debug, Clone)]
pub struct ResolvedRow {
    pub key: String,
    /// `None` when the key is absent from the serving catalog.
    pub value: Option<String>,
}

/// Print a check report in cargo-style format to stdout.
pub fn report_check(report: &CheckReport, base: &Path) {
    report_check_to(report, base, &mut io::stdout().lock());
}

/// Print a check report to a custom writer.
pub fn report_check_to<W: Write>(report: &CheckReport, base: &Path, writer: &mut W) {
    if report.issues.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} in {} {} ({} keys) - no issues found",
                report.pages_checked,
                plural(report.pages_checked, "page", "pages"),
                report.locales_checked,
                plural(report.locales_checked, "locale", "locales"),
                report.keys_checked
            )
            .green()
        );
        return;
    }

    for issue in &report.issues {
        print_issue(issue, base, writer);
    }
    print_summary(report, writer);
}

/// Print locale rows as an aligned table to stdout.
pub fn print_locales(rows: &[LocaleRow], base: &Path) {
    print_locales_to(rows, base, &mut io::stdout().lock());
}

pub fn print_locales_to<W: Write>(rows: &[LocaleRow], base: &Path, writer: &mut W) {
    let width = rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.locale.as_str()))
        .max()
        .unwrap_or(0);

    for row in rows {
        let padding = width - UnicodeWidthStr::width(row.locale.as_str());
        let default_tag = if row.is_default { " (default)" } else { "" };
        let line = match &row.status {
            Ok((source, key_count)) => format!(
                "{} {}{:padding$}  {}  {} {}{}",
                SUCCESS_MARK.green(),
                row.locale.bold(),
                "",
                display_path(source, base),
                key_count,
                plural(*key_count, "key", "keys"),
                default_tag.dimmed(),
                padding = padding
            ),
            Err(error) => format!(
                "{} {}{:padding$}  {}{}",
                FAILURE_MARK.red(),
                row.locale.bold(),
                "",
                error.red(),
                default_tag.dimmed(),
                padding = padding
            ),
        };
        let _ = writeln!(writer, "{}", line);
    }
}

/// Print `key  value` rows to stdout, aligning the value column.
pub fn print_resolved(rows: &[ResolvedRow]) {
    print_resolved_to(rows, &mut io::stdout().lock());
}

pub fn print_resolved_to<W: Write>(rows: &[ResolvedRow], writer: &mut W) {
    let width = rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.key.as_str()))
        .max()
        .unwrap_or(0);

    for row in rows {
        let padding = width - UnicodeWidthStr::width(row.key.as_str());
        let value = match &row.value {
            Some(value) => value.normal(),
            None => "(missing)".dimmed(),
        };
        let _ = writeln!(
            writer,
            "{}{:padding$}  {}",
            row.key.cyan(),
            "",
            value,
            padding = padding
        );
    }
}

/// Print a cargo-style `warning:` line to stderr.
pub fn print_warning(message: &str) {
    print_warning_to(message, &mut io::stderr().lock());
}

pub fn print_warning_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

/// Warn on stderr that `requested` is served from another locale's catalog.
pub fn print_fallback_warning(requested: &str, served: Option<&str>) {
    print_warning(&fallback_message(requested, served));
}

fn fallback_message(requested: &str, served: Option<&str>) -> String {
    match served {
        Some(served) => format!(
            "no usable catalog for locale '{}'; serving '{}' content instead",
            requested, served
        ),
        None => format!(
            "no usable catalog for locale '{}'; no catalog could be loaded, values are empty",
            requested
        ),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, base: &Path, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match (issue.source(), issue.page_id()) {
        (Some(source), Some(page_id)) => {
            let _ = writeln!(
                writer,
                "  {} {} (locale: {}, page: {})",
                "-->".blue(),
                display_path(source, base),
                issue.locale(),
                page_id
            );
        }
        _ => {
            let _ = writeln!(writer, "  {} locale: {}", "-->".blue(), issue.locale());
        }
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(report: &CheckReport, writer: &mut W) {
    let errors = report.error_count();
    let warnings = report.warning_count();
    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        errors + warnings,
        errors,
        plural(errors, "error", "errors").red(),
        warnings,
        plural(warnings, "warning", "warnings").yellow()
    );
}

/// `source` relative to `base` when it lives below it.
fn display_path(source: &str, base: &Path) -> String {
    Path::new(source)
        .strip_prefix(base)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| source.to_string())
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
