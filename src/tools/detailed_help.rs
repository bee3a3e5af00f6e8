//! detailed_help tool handler to provide structured help for tools

use crate::error::{AdviceMindError, Result};
use crate::server::AdviceMindServer;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde_json::json;

impl AdviceMindServer {
    /// Handle the detailed_help tool call
    pub async fn handle_detailed_help(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| AdviceMindError::Mcp {
            message: "Missing parameters".into(),
        })?;

        let tool = args.get("tool").and_then(|v| v.as_str()).ok_or_else(|| {
            AdviceMindError::Validation {
                message: "'tool' parameter is required".into(),
            }
        })?;
        let format = args
            .get("format")
            .and_then(|v| v.as_str())
            .unwrap_or("full");

        let help = match tool {
            "generate_advice" => json!({
                "name": "generate_advice",
                "description": "Turn a speaker-tagged transcript into insights, RICE-ranked advice, a phased timeline, learning resources, and chart data.",
                "arguments": {
                    "transcript": "array (required) — [{speaker, text}] utterances in order",
                    "analysis_results": "object|null — upstream analysis payload (advantages, increments, role_play, future_prediction, non_consensus)",
                    "user_goals": "string[]|null — explicit goals to fold in as goal-oriented advice"
                },
                "returns": {
                    "key_insights": "array",
                    "prioritized_advice": "array — ranked by RICE score",
                    "timeline": "object — short/medium/long term phases",
                    "resources": "array — per-skill suggestions",
                    "visualization": "object — pie, bar, and gantt chart data"
                },
                "examples": [{
                    "request": {"name": "generate_advice", "arguments": {"transcript": [{"speaker": "A", "text": "We should invest more in research."}]}},
                    "response": {"key_insights": ["..."], "prioritized_advice": ["..."], "timeline": {}, "resources": [], "visualization": {}}
                }]
            }),
            "advantage_increment" => json!({
                "name": "advantage_increment",
                "description": "Analyze a transcript for per-speaker advantages and scored growth increments, with a match matrix and chart data.",
                "arguments": {
                    "transcript": "array (required) — [{speaker, text}] utterances",
                    "historical_data": "object|null — {experience: [{description}], skills: string[]} to sharpen personal-fit scores"
                },
                "returns": {
                    "key_concepts": "array — frequency-ranked concepts",
                    "advantages": "array — per-speaker strengths",
                    "increments": "array — growth areas sorted by composite score",
                    "matrix": "object — advantage x increment match grid",
                    "visualization": "object — radar, bar, and heatmap data"
                }
            }),
            "record_progress" => json!({
                "name": "record_progress",
                "description": "Record usage activity for a user and report unlocked achievements, or fetch current stats.",
                "arguments": {
                    "user_id": "string (required)",
                    "action": "string — 'record' (default) or 'stats'",
                    "transcriptions": "integer — transcriptions completed this event",
                    "analyses": "integer — analyses completed this event",
                    "duration_minutes": "integer — audio minutes processed this event"
                },
                "returns": {"progress": "object", "new_achievements": "array"}
            }),
            "detailed_help" => json!({
                "name": "detailed_help",
                "description": "Get detailed help for a specific tool.",
                "arguments": {
                    "tool": "string (required) — tool name",
                    "format": "string — 'full' (default) or 'compact'"
                },
                "returns": "object — help document for the named tool"
            }),
            _ => {
                return Err(AdviceMindError::Validation {
                    message: format!("Unknown tool: {}", tool),
                });
            }
        };

        let output = if format == "compact" {
            // Provide a concise one-paragraph summary
            json!({
                "tool": tool,
                "summary": help.get("description").cloned().unwrap_or(json!("")),
                "arguments": help.get("arguments").cloned().unwrap_or(json!({}))
            })
        } else {
            help
        };

        Ok(CallToolResult::structured(output))
    }
}
