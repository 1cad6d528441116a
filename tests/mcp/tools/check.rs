use pagetext::mcp::{PagetextMcpServer, types::CheckPagesParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};

use crate::{McpTestFixture, extract_tool_result_json, fixture_multi_locale};

fn params(fixture: &McpTestFixture, locales: Option<&[&str]>) -> Parameters<CheckPagesParams> {
    Parameters(CheckPagesParams {
        project_root_path: fixture.root(),
        locales: locales.map(|l| l.iter().map(|s| s.to_string()).collect()),
    })
}

fn issues_for<'a>(result: &'a Value, locale: &str) -> Vec<&'a Value> {
    result["issues"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|i| i["locale"] == locale)
        .collect()
}

#[tokio::test]
async fn test_check_pages_all_locales() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PagetextMcpServer::new();

    let result = server.check_pages(params(&fixture, None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["localesChecked"], 3);
    assert_eq!(json_result["pagesChecked"], 2);
    // fr has no catalog, so only en and de schemas are walked.
    assert_eq!(json_result["keysChecked"], 62);

    let fr = issues_for(&json_result, "fr");
    assert_eq!(fr.len(), 1);
    assert_eq!(fr[0]["rule"], "catalog-load");
    assert_eq!(fr[0]["severity"], "error");
    assert!(fr[0].get("key").is_none());

    let en = issues_for(&json_result, "en");
    let empty: Vec<&Value> = en
        .iter()
        .copied()
        .filter(|i| i["rule"] == "empty-value")
        .collect();
    assert_eq!(empty.len(), 1);
    assert_eq!(empty[0]["key"], "about.team.members.founder.socials.github");
    assert_eq!(empty[0]["severity"], "warning");
    assert_eq!(empty[0]["pageId"], "about");
}

#[tokio::test]
async fn test_check_pages_selected_locale() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PagetextMcpServer::new();

    let result = server
        .check_pages(params(&fixture, Some(&["de"])))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["localesChecked"], 1);
    assert_eq!(json_result["warningCount"], 0);
    // 31 schema keys, one present.
    assert_eq!(json_result["errorCount"], 30);
    let issues = json_result["issues"].as_array().unwrap();
    assert!(issues.iter().all(|i| i["rule"] == "missing-key"));
    assert!(
        issues
            .iter()
            .all(|i| i["source"].as_str().unwrap().ends_with("de.json"))
    );
}

#[tokio::test]
async fn test_check_pages_complete_catalog() {
    let mut document = json!({});
    for (key, value) in [
        ("home.hero.headline", "h"),
        ("home.hero.subtitle", "s"),
        ("home.hero.ctaText", "c"),
        ("home.hero.ctaHref", "/"),
        ("home.features.title", "f"),
        ("home.social.title", "t"),
        ("home.social.description", "d"),
        ("about.title", "a"),
        ("about.description", "d"),
        ("about.team.title", "t"),
    ] {
        set_path(&mut document, key, value);
    }
    let items: Vec<Value> = (0..3)
        .map(|i| json!({"title": format!("t{}", i), "description": format!("d{}", i)}))
        .collect();
    document["home"]["features"]["items"] = json!(items);
    for slug in ["founder", "engineering", "design"] {
        document["about"]["team"]["members"][slug] = json!({
            "name": slug,
            "role": slug,
            "socials": {"github": "g", "linkedin": "l", "discord": "d"}
        });
    }

    let fixture = McpTestFixture::with_messages(vec![("en", document)]).unwrap();
    let server = PagetextMcpServer::new();

    let result = server.check_pages(params(&fixture, None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["issues"], json!([]));
    assert_eq!(json_result["keysChecked"], 31);
}

#[tokio::test]
async fn test_check_pages_unsupported_locale() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PagetextMcpServer::new();

    let err = server
        .check_pages(params(&fixture, Some(&["es"])))
        .await
        .unwrap_err();
    assert!(err.message.contains("locale 'es' is not supported"));
}

fn set_path(root: &mut Value, key: &str, value: &str) {
    let mut node = root;
    for segment in key.split('.') {
        node = &mut node[segment];
    }
    *node = json!(value);
}
