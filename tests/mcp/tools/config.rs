use pagetext::mcp::{
    PagetextMcpServer,
    types::{GetConfigParams, GetLocalesParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_multi_locale};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::with_messages(vec![("en", json!({}))]).unwrap();
    let server = PagetextMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["messagesRoot"], "./messages");
    assert_eq!(json_result["config"]["locales"], json!(["en"]));
    assert_eq!(json_result["config"]["defaultLocale"], "en");
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "messagesRoot": "locales",
            "locales": ["de", "en"],
            "defaultLocale": "de"
        }))
        .unwrap();

    let server = PagetextMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["messagesRoot"], "locales");
    assert_eq!(json_result["config"]["locales"], json!(["de", "en"]));
    assert_eq!(json_result["config"]["defaultLocale"], "de");
    assert_eq!(json_result["fromFile"], true);
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "locales": ["en", "../etc"] }))
        .unwrap();

    let server = PagetextMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_config(params).await.unwrap_err();
    assert!(err.message.contains("Failed to load config"));
}

// ============================================================================
// get_locales tests
// ============================================================================

#[tokio::test]
async fn test_get_locales_reports_each_supported_locale() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PagetextMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result["messagesRoot"],
        fixture.root_path().join("messages").to_string_lossy().to_string()
    );
    assert_eq!(json_result["defaultLocale"], "en");

    let locales = json_result["locales"].as_array().unwrap();
    let names: Vec<&str> = locales.iter().filter_map(|l| l["locale"].as_str()).collect();
    assert_eq!(names, vec!["en", "de", "fr"]);

    assert_eq!(locales[0]["isDefault"], true);
    assert_eq!(locales[0]["keyCount"], 6);
    assert!(locales[0].get("error").is_none());
    assert_eq!(locales[1]["keyCount"], 1);

    assert_eq!(locales[2]["keyCount"], 0);
    assert!(
        locales[2]["error"]
            .as_str()
            .unwrap()
            .contains("no message catalog for locale 'fr'")
    );
    assert!(locales[2]["filePath"].as_str().unwrap().ends_with("fr.json"));
}

#[tokio::test]
async fn test_get_locales_lists_unconfigured_files() {
    let fixture = McpTestFixture::with_messages(vec![
        ("en", json!({"a": "b"})),
        ("ja", json!({"a": "b"})),
    ])
    .unwrap();
    let server = PagetextMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locales"].as_array().unwrap().len(), 1);
    assert_eq!(json_result["unconfigured"], json!(["ja"]));
}
