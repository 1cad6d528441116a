use insta::assert_json_snapshot;
use pagetext::mcp::{
    PagetextMcpServer,
    types::{ResolveKeysParams, ResolvePageParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_multi_locale};

fn keys_params(
    fixture: &McpTestFixture,
    locale: Option<&str>,
    namespace: &str,
    keys: &[&str],
) -> Parameters<ResolveKeysParams> {
    Parameters(ResolveKeysParams {
        project_root_path: fixture.root(),
        locale: locale.map(String::from),
        namespace: namespace.to_string(),
        keys: keys.iter().map(|k| k.to_string()).collect(),
    })
}

fn page_params(
    fixture: &McpTestFixture,
    locale: Option<&str>,
    page_id: &str,
) -> Parameters<ResolvePageParams> {
    Parameters(ResolvePageParams {
        project_root_path: fixture.root(),
        locale: locale.map(String::from),
        page_id: page_id.to_string(),
    })
}

// ============================================================================
// resolve_keys tests
// ============================================================================

#[tokio::test]
async fn test_resolve_keys_default_locale() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PagetextMcpServer::new();

    let result = server
        .resolve_keys(keys_params(&fixture, None, "home", &["hero.headline", "nope"]))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locale"], "en");
    assert_eq!(json_result["servedLocale"], "en");
    assert_eq!(json_result["namespace"], "home");

    let values = json_result["values"].as_array().unwrap();
    assert_eq!(values[0]["fullKey"], "home.hero.headline");
    assert_eq!(values[0]["value"], "Build faster");
    assert_eq!(values[0]["found"], true);
    assert_eq!(values[1]["value"], "");
    assert_eq!(values[1]["found"], false);
}

#[tokio::test]
async fn test_resolve_keys_no_per_key_fallback() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PagetextMcpServer::new();

    let result = server
        .resolve_keys(keys_params(
            &fixture,
            Some("de"),
            "home.hero",
            &["headline", "ctaHref"],
        ))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["servedLocale"], "de");
    assert_eq!(json_result["values"][0]["value"], "Schneller bauen");
    // Present in English only; German does not borrow it.
    assert_eq!(json_result["values"][1]["value"], "");
    assert_eq!(json_result["values"][1]["found"], false);
}

#[tokio::test]
async fn test_resolve_keys_catalog_fallback() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PagetextMcpServer::new();

    let result = server
        .resolve_keys(keys_params(&fixture, Some("fr"), "home", &["hero.headline"]))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locale"], "fr");
    assert_eq!(json_result["servedLocale"], "en");
    assert_eq!(json_result["values"][0]["value"], "Build faster");
}

#[tokio::test]
async fn test_resolve_keys_unsupported_locale() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PagetextMcpServer::new();

    let result = server
        .resolve_keys(keys_params(&fixture, Some("xx"), "about", &["title"]))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locale"], "en");
    assert_eq!(json_result["values"][0]["value"], "About");
}

// ============================================================================
// resolve_page tests
// ============================================================================

#[tokio::test]
async fn test_resolve_page_home() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PagetextMcpServer::new();

    let result = server
        .resolve_page(page_params(&fixture, Some("en"), "home"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["pageId"], "home");
    assert_eq!(json_result["servedLocale"], "en");
    assert_json_snapshot!(json_result["content"], @r#"
    {
      "hero": {
        "headline": "Build faster",
        "subtitle": "",
        "ctaText": "",
        "ctaHref": "/contact"
      },
      "features": {
        "title": "",
        "items": [
          {
            "title": "Fast",
            "description": ""
          },
          {
            "title": "",
            "description": ""
          },
          {
            "title": "",
            "description": ""
          }
        ]
      },
      "social": {
        "title": "",
        "description": ""
      }
    }
    "#);
}

#[tokio::test]
async fn test_resolve_page_about_members_in_roster_order() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PagetextMcpServer::new();

    let result = server
        .resolve_page(page_params(&fixture, None, "about"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    let members = json_result["content"]["team"]["members"].as_array().unwrap();
    assert_eq!(members.len(), 3);
    assert_eq!(members[0]["slug"], "founder");
    assert_eq!(members[0]["name"], "Ada");
    assert_eq!(members[0]["socials"]["github"], "");
    assert_eq!(members[2]["slug"], "design");
    assert_eq!(members[2]["name"], "");
}

#[tokio::test]
async fn test_resolve_page_fallback_equals_default() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PagetextMcpServer::new();

    let en = server
        .resolve_page(page_params(&fixture, Some("en"), "about"))
        .await
        .unwrap();
    let fr = server
        .resolve_page(page_params(&fixture, Some("fr"), "about"))
        .await
        .unwrap();
    let en = extract_tool_result_json(&en);
    let fr = extract_tool_result_json(&fr);

    assert_eq!(fr["locale"], "fr");
    assert_eq!(fr["servedLocale"], "en");
    assert_eq!(fr["content"], en["content"]);
}

#[tokio::test]
async fn test_resolve_page_unknown_page() {
    let fixture = McpTestFixture::with_messages(vec![("en", json!({}))]).unwrap();
    let server = PagetextMcpServer::new();

    let err = server
        .resolve_page(page_params(&fixture, None, "pricing"))
        .await
        .unwrap_err();
    assert!(err.message.contains("unknown page 'pricing'"));
    assert!(err.message.contains("about, home"));
}
