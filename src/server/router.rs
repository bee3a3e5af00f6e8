use crate::server::AdviceMindServer;
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, InitializeRequestParam,
        InitializeResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo, Tool, ToolsCapability,
    },
    service::{RequestContext, RoleServer},
};
use tracing::info;

impl ServerHandler for AdviceMindServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "advice-mind".to_string(),
                title: Some("Advice Mind".to_string()),
                version: "0.1.0".to_string(),
                website_url: None,
                icons: None,
            },
            ..Default::default()
        }
    }

    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        let mut info = self.get_info();
        info.protocol_version = request.protocol_version.clone();
        Ok(info)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("tools/list requested");

        let generate_advice_schema = crate::schemas::generate_advice_schema();
        let generate_advice_output = crate::schemas::generate_advice_output_schema();
        let advantage_increment_schema = crate::schemas::advantage_increment_schema();
        let record_progress_schema = crate::schemas::record_progress_schema();
        let detailed_help_schema = crate::schemas::detailed_help_schema();

        let tools = vec![
            Tool {
                name: "generate_advice".into(),
                title: Some("Generate Advice".into()),
                description: Some(
                    "Turn a speaker-tagged transcript into a ranked, time-phased action plan"
                        .into(),
                ),
                input_schema: generate_advice_schema,
                icons: None,
                annotations: None,
                output_schema: Some(generate_advice_output),
                meta: None,
            },
            Tool {
                name: "advantage_increment".into(),
                title: Some("Advantage & Increment Analysis".into()),
                description: Some(
                    "Map per-speaker advantages and scored growth opportunities from a transcript"
                        .into(),
                ),
                input_schema: advantage_increment_schema,
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "record_progress".into(),
                title: Some("Record Progress".into()),
                description: Some(
                    "Record user activity and report achievement progress".into(),
                ),
                input_schema: record_progress_schema,
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "detailed_help".into(),
                title: Some("Detailed Help".into()),
                description: Some("Get detailed help for a specific tool".into()),
                input_schema: detailed_help_schema,
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
        ];

        Ok(ListToolsResult {
            tools,
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        // Route to appropriate tool handler
        match request.name.as_ref() {
            "generate_advice" => self
                .handle_generate_advice(request)
                .await
                .map_err(|e| e.into()),
            "advantage_increment" => self
                .handle_advantage_increment(request)
                .await
                .map_err(|e| e.into()),
            "record_progress" => self
                .handle_record_progress(request)
                .await
                .map_err(|e| e.into()),
            "detailed_help" => self
                .handle_detailed_help(request)
                .await
                .map_err(|e| e.into()),
            _ => Err(McpError {
                code: rmcp::model::ErrorCode::METHOD_NOT_FOUND,
                message: format!("Unknown tool: {}", request.name).into(),
                data: None,
            }),
        }
    }
}
