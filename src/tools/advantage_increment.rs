//! advantage_increment tool handler

use crate::error::{AdviceMindError, Result};
use crate::server::{AdvantageIncrementParams, AdviceMindServer};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde_json::Value;
use tracing::info;

impl AdviceMindServer {
    /// Handle the advantage_increment tool call
    pub async fn handle_advantage_increment(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| AdviceMindError::Mcp {
            message: "Missing parameters".into(),
        })?;

        let params: AdvantageIncrementParams =
            serde_json::from_value(Value::Object(args)).map_err(|e| {
                AdviceMindError::Validation {
                    message: format!("transcript must be a list of {{speaker, text}} pairs: {e}"),
                }
            })?;

        info!(
            utterances = params.transcript.len(),
            has_history = params.historical_data.is_some(),
            "advantage_increment called"
        );

        let report = self
            .advantage
            .analyze(&params.transcript, params.historical_data.as_ref())?;

        Ok(CallToolResult::structured(serde_json::to_value(&report)?))
    }
}
