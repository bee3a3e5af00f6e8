//! record_progress tool handler

use crate::error::{AdviceMindError, Result};
use crate::feedback::ProgressDelta;
use crate::server::{AdviceMindServer, RecordProgressParams};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde_json::Value;
use tracing::info;

impl AdviceMindServer {
    /// Handle the record_progress tool call
    pub async fn handle_record_progress(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| AdviceMindError::Mcp {
            message: "Missing parameters".into(),
        })?;

        let params: RecordProgressParams =
            serde_json::from_value(Value::Object(args)).map_err(|e| {
                AdviceMindError::Validation {
                    message: format!("invalid record_progress parameters: {e}"),
                }
            })?;

        let action = params.action.as_deref().unwrap_or("record");
        info!(user_id = %params.user_id, action, "record_progress called");

        match action {
            "record" => {
                let delta = ProgressDelta {
                    transcriptions: params.transcriptions,
                    analyses: params.analyses,
                    duration_minutes: params.duration_minutes,
                };
                let outcome = self.progress.record(&params.user_id, &delta).await;
                Ok(CallToolResult::structured(serde_json::to_value(&outcome)?))
            }
            "stats" => {
                let stats = self.progress.stats(&params.user_id).await;
                Ok(CallToolResult::structured(serde_json::to_value(&stats)?))
            }
            other => Err(AdviceMindError::Validation {
                message: format!("unknown action '{other}', expected 'record' or 'stats'"),
            }),
        }
    }
}
