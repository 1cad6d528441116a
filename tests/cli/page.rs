use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, full_site_messages};

fn site() -> Result<CliTest> {
    CliTest::with_site(
        &["en", "de", "fr"],
        vec![
            ("en", full_site_messages("")),
            ("de", full_site_messages(" (de)")),
        ],
    )
}

fn page_json(test: &CliTest, args: &[&str]) -> Result<Value> {
    let out = test.run(args)?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    Ok(serde_json::from_str(&out.stdout)?)
}

#[test]
fn test_home_page() -> Result<()> {
    let test = site()?;

    let home = page_json(&test, &["page", "home"])?;
    assert_eq!(home["hero"]["headline"], "Build faster");
    assert_eq!(home["hero"]["ctaHref"], "/contact");
    assert_eq!(home["features"]["items"].as_array().map(Vec::len), Some(3));
    assert_eq!(home["features"]["items"][1]["description"], "No bloat");
    assert_eq!(home["social"]["title"], "Follow us");

    Ok(())
}

#[test]
fn test_about_page_in_locale() -> Result<()> {
    let test = site()?;

    let about = page_json(&test, &["page", "about", "--locale", "de"])?;
    assert_eq!(about["title"], "About (de)");
    let members = about["team"]["members"].as_array().cloned().unwrap_or_default();
    let slugs: Vec<&str> = members.iter().filter_map(|m| m["slug"].as_str()).collect();
    assert_eq!(slugs, vec!["founder", "engineering", "design"]);
    assert_eq!(members[2]["name"], "Grace (de)");
    assert_eq!(members[0]["socials"]["linkedin"], "");

    Ok(())
}

#[test]
fn test_fallback_locale_matches_default() -> Result<()> {
    let test = site()?;

    let en = page_json(&test, &["page", "about"])?;
    let fr = page_json(&test, &["page", "about", "-l", "fr"])?;
    let unsupported = page_json(&test, &["page", "about", "-l", "pt-BR"])?;
    assert_eq!(fr, en);
    assert_eq!(unsupported, en);

    Ok(())
}

#[test]
fn test_missing_keys_are_empty() -> Result<()> {
    let test = CliTest::with_site(
        &["en"],
        vec![("en", json!({"home": {"hero": {"headline": "Only this"}}}))],
    )?;

    let home = page_json(&test, &["page", "home"])?;
    assert_eq!(home["hero"]["headline"], "Only this");
    assert_eq!(home["hero"]["subtitle"], "");
    assert_eq!(home["features"]["items"][2]["title"], "");

    Ok(())
}

#[test]
fn test_unknown_page_is_an_error() -> Result<()> {
    let test = site()?;

    let out = test.run(&["page", "pricing"])?;
    assert_eq!(out.code, Some(2));
    assert_eq!(out.stdout, "");
    assert!(
        out.stderr
            .contains("unknown page 'pricing' (registered pages: about, home)")
    );

    Ok(())
}
