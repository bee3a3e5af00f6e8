//! generate_advice tool handler: the pipeline's transport-facing entry point

use crate::error::{AdviceMindError, Result};
use crate::pipeline::auxiliary::AuxiliaryAnalysis;
use crate::server::{AdviceMindServer, GenerateAdviceParams};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde_json::Value;
use tracing::info;

impl AdviceMindServer {
    /// Handle the generate_advice tool call
    pub async fn handle_generate_advice(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| AdviceMindError::Mcp {
            message: "Missing parameters".into(),
        })?;

        // A transcript that is not a sequence of {speaker, text} pairs is a
        // client error
        let params: GenerateAdviceParams =
            serde_json::from_value(Value::Object(args)).map_err(|e| {
                AdviceMindError::Validation {
                    message: format!("transcript must be a list of {{speaker, text}} pairs: {e}"),
                }
            })?;

        // A present-but-malformed auxiliary payload is a server-side fault,
        // not a client error; its producer is another analysis module
        let auxiliary = match params.analysis_results {
            Some(value) if !value.is_null() => serde_json::from_value::<AuxiliaryAnalysis>(value)
                .map_err(|e| AdviceMindError::Internal {
                    message: format!("malformed auxiliary analysis payload: {e}"),
                })?,
            _ => AuxiliaryAnalysis::default(),
        };
        let goals = params.user_goals.unwrap_or_default();

        info!(
            utterances = params.transcript.len(),
            goals = goals.len(),
            "generate_advice called"
        );

        let report = self
            .pipeline
            .generate_advice(&params.transcript, &auxiliary, &goals)?;

        Ok(CallToolResult::structured(serde_json::to_value(&report)?))
    }
}
