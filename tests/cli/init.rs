use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["init"])?;
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "\u{2713} Created .pagetextrc.json\n");
    assert!(test.root().join(".pagetextrc.json").exists());

    let content = test.read_file(".pagetextrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["messagesRoot"], "./messages");
    assert_eq!(parsed["locales"], serde_json::json!(["en"]));
    assert_eq!(parsed["defaultLocale"], "en");
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".pagetextrc.json", "{}")?;

    let out = test.run(&["init"])?;
    assert_eq!(out.code, Some(1));
    assert_eq!(out.stdout, "");
    assert!(out.stderr.contains(".pagetextrc.json already exists"));
    assert_eq!(test.read_file(".pagetextrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;
    test.write_file("messages/en.json", "{}")?;

    let out = test.run(&["locales"])?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert_eq!(out.stdout, "\u{2713} en  messages/en.json  0 keys (default)\n");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&[])?;
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Usage: pagetext"));
    assert!(out.stdout.contains("check"));

    Ok(())
}
