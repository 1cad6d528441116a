use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, full_site_messages};

#[test]
fn test_lists_every_supported_locale() -> Result<()> {
    let test = CliTest::with_site(
        &["en", "de", "zh-CN"],
        vec![
            ("en", json!({"home": {"hero": {"headline": "Hi", "subtitle": "There"}}})),
            ("de", json!({"home": {"hero": {"headline": "Hallo"}}})),
            ("zh-CN", json!({})),
        ],
    )?;

    let out = test.run(&["locales"])?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert_eq!(
        out.stdout,
        "\u{2713} en     messages/en.json  2 keys (default)\n\
         \u{2713} de     messages/de.json  1 key\n\
         \u{2713} zh-CN  messages/zh-CN.json  0 keys\n"
    );

    Ok(())
}

#[test]
fn test_missing_catalog_fails() -> Result<()> {
    let test = CliTest::with_site(&["en", "fr"], vec![("en", full_site_messages(""))])?;

    let out = test.run(&["locales"])?;
    assert_eq!(out.code, Some(1));
    let fr_line = out.stdout.lines().nth(1).unwrap_or_default();
    assert!(fr_line.starts_with("\u{2718} fr  no message catalog for locale 'fr'"));

    Ok(())
}

#[test]
fn test_malformed_catalog_is_reported() -> Result<()> {
    let test = CliTest::with_site(&["en"], vec![])?;
    test.write_file("messages/en.json", "[1, 2, 3]")?;

    let out = test.run(&["locales"])?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("is malformed"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".pagetextrc.json",
        r#"{ "locales": ["en"], "defaultLocale": "de" }"#,
    )?;

    let out = test.run(&["locales"])?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("default locale 'de'"));

    Ok(())
}
