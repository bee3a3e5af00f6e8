//! In-process tests for the MCP tool handlers.

use advice_mind::{config::Config, server::AdviceMindServer};
use rmcp::model::CallToolRequestParam;
use serde_json::json;

fn test_server() -> AdviceMindServer {
    AdviceMindServer::new(&Config::default())
}

fn request(name: &'static str, args: serde_json::Value) -> CallToolRequestParam {
    CallToolRequestParam {
        name: name.into(),
        arguments: Some(args.as_object().unwrap().clone()),
    }
}

#[tokio::test]
async fn generate_advice_happy_path() {
    let server = test_server();
    let result = server
        .handle_generate_advice(request(
            "generate_advice",
            json!({
                "transcript": [
                    {"speaker": "Alice", "text": "We should invest more in research."}
                ]
            }),
        ))
        .await
        .unwrap();

    let report = result.structured_content.expect("structured report");
    assert_eq!(report["key_insights"].as_array().unwrap().len(), 1);
    assert_eq!(report["prioritized_advice"].as_array().unwrap().len(), 1);
    assert_eq!(report["prioritized_advice"][0]["rice_score"], 12.8);
    assert_eq!(report["prioritized_advice"][0]["priority"], "medium");
    assert_eq!(report["timeline"]["phases"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn generate_advice_requires_arguments() {
    let server = test_server();
    let result = server
        .handle_generate_advice(CallToolRequestParam {
            name: "generate_advice".into(),
            arguments: None,
        })
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn generate_advice_rejects_malformed_transcript() {
    let server = test_server();
    let result = server
        .handle_generate_advice(request(
            "generate_advice",
            json!({"transcript": "not a list"}),
        ))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn generate_advice_rejects_malformed_analysis_payload() {
    let server = test_server();
    let result = server
        .handle_generate_advice(request(
            "generate_advice",
            json!({
                "transcript": [{"speaker": "A", "text": "We should rest."}],
                "analysis_results": {"advantages": "not a list"}
            }),
        ))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn generate_advice_ignores_unknown_analysis_modules() {
    let server = test_server();
    let result = server
        .handle_generate_advice(request(
            "generate_advice",
            json!({
                "transcript": [{"speaker": "A", "text": "We should rest."}],
                "analysis_results": {"some_future_module": {"whatever": 1}}
            }),
        ))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn advantage_increment_happy_path() {
    let server = test_server();
    let result = server
        .handle_advantage_increment(request(
            "advantage_increment",
            json!({
                "transcript": [
                    {"speaker": "Alice", "text": "Cloud computing is where our team shines."},
                    {"speaker": "Bob", "text": "Cloud computing demand keeps growing."}
                ],
                "historical_data": {
                    "experience": [{"description": "Ran cloud migrations"}],
                    "skills": ["kubernetes"]
                }
            }),
        ))
        .await
        .unwrap();

    let report = result.structured_content.expect("structured report");
    assert!(!report["key_concepts"].as_array().unwrap().is_empty());
    assert!(report["increments"].is_array());
    assert!(report["visualization"].is_object());
}

#[tokio::test]
async fn record_progress_then_stats() {
    let server = test_server();

    let recorded = server
        .handle_record_progress(request(
            "record_progress",
            json!({"user_id": "sam", "transcriptions": 1}),
        ))
        .await
        .unwrap();
    let outcome = recorded.structured_content.expect("structured outcome");
    assert_eq!(outcome["progress"]["transcription_count"], 1);
    assert_eq!(
        outcome["new_achievements"][0]["id"],
        "first_transcription"
    );

    let stats = server
        .handle_record_progress(request(
            "record_progress",
            json!({"user_id": "sam", "action": "stats"}),
        ))
        .await
        .unwrap();
    let stats = stats.structured_content.expect("structured stats");
    assert_eq!(stats["progress"]["transcription_count"], 1);
    assert!(!stats["next_achievements"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn record_progress_rejects_unknown_action() {
    let server = test_server();
    let result = server
        .handle_record_progress(request(
            "record_progress",
            json!({"user_id": "sam", "action": "reset"}),
        ))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn detailed_help_full_and_compact() {
    let server = test_server();

    let full = server
        .handle_detailed_help(request("detailed_help", json!({"tool": "generate_advice"})))
        .await
        .unwrap();
    let full = full.structured_content.expect("structured help");
    assert_eq!(full["name"], "generate_advice");
    assert!(full["arguments"].is_object());

    let compact = server
        .handle_detailed_help(request(
            "detailed_help",
            json!({"tool": "generate_advice", "format": "compact"}),
        ))
        .await
        .unwrap();
    let compact = compact.structured_content.expect("structured help");
    assert_eq!(compact["tool"], "generate_advice");
    assert!(compact["summary"].is_string());
}

#[tokio::test]
async fn detailed_help_rejects_unknown_tool() {
    let server = test_server();
    let result = server
        .handle_detailed_help(request("detailed_help", json!({"tool": "nonexistent"})))
        .await;
    assert!(result.is_err());
}
