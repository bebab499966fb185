//! MCP `ServerHandler` implementation and capability declaration.

use std::sync::Arc;

use rmcp::{ServerHandler, handler::server::router::tool::ToolRouter, model::*, tool_handler};

use crate::api::FoxEssClient;

/// MCP server exposing the FoxESS Cloud OpenAPI as tools.
#[derive(Clone)]
pub struct FoxEssMcpServer {
    pub(crate) client: Arc<FoxEssClient>,
    tool_router: ToolRouter<FoxEssMcpServer>,
}

impl FoxEssMcpServer {
    pub fn new(client: Arc<FoxEssClient>) -> Self {
        Self {
            client,
            tool_router: Self::build_tool_router(),
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for FoxEssMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::new(
                "foxess-mcp",
                env!("CARGO_PKG_VERSION"),
            ))
            .with_instructions(
                "FoxESS Cloud bridge: query plants, devices, real-time and historical \
                 inverter data, and manage battery SoC and force-charge schedules. \
                 Requires FOXESS_API_KEY in the environment.",
            )
    }
}
