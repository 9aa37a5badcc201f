//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the diversity metrics over MCP on stdio. The server is a
//! presentation layer: each `#[tool]` method delegates to `lexdiv-core`.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use lexdiv_core::{Metric, syllabify};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the ratio tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to score.
    pub text: String,
}

/// Parameters for the `syllabify` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SyllabifyParams {
    /// Words to split. Each is lowercased first.
    pub words: Vec<String>,
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

/// MCP server exposing the diversity metrics to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Syllable-level type-token ratio.
    #[tool(
        description = "Syllabic type-token ratio of Portuguese text: distinct syllables over total syllables, words of 3+ letters only."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn syllabic_ttr(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        let report = Metric::Syllabic.report(&params.text);
        tracing::info!(tool = "syllabic_ttr", ratio = report.ratio, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&report)?)]))
    }

    /// Word-level type-token ratio.
    #[tool(description = "Lexical type-token ratio of text: distinct words over total words.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn lexical_ttr(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        let report = Metric::Lexical.report(&params.text);
        tracing::info!(tool = "lexical_ttr", ratio = report.ratio, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&report)?)]))
    }

    /// Split words into syllables.
    #[tool(description = "Split Portuguese words into syllables using the vowel/glide heuristic.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn syllabify(
        &self,
        Parameters(params): Parameters<SyllabifyParams>,
    ) -> Result<CallToolResult, McpError> {
        let splits: Vec<serde_json::Value> = params
            .words
            .iter()
            .map(|word| {
                let word = word.trim().to_lowercase();
                let syllables = syllabify(&word);
                serde_json::json!({ "word": word, "syllables": syllables })
            })
            .collect();
        Ok(CallToolResult::success(vec![Content::text(to_json(&splits)?)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use tools to score the lexical diversity of Portuguese text.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
