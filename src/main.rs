use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use log::{error, info};

use foxess_mcp::api::FoxEssClient;
use foxess_mcp::config::{self, Config};
use foxess_mcp::mcp::FoxEssMcpServer;

/// MCP server bridging the FoxESS Cloud OpenAPI.
///
/// Speaks MCP over stdio; all diagnostics go to LOG_FILE or stderr so stdout
/// stays clean for protocol framing.
#[derive(Parser)]
#[command(name = "foxess-mcp", version, about)]
struct Cli {}

fn setup_logging(config: &Config) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(path) = &config.log_file {
        let target = Box::new(
            config::open_log_file(path)
                .context(format!("Failed to open log file {}", path.display()))?,
        );
        builder.target(env_logger::Target::Pipe(target));
    }

    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();
    dotenv::dotenv().ok();

    let config = Config::from_env();
    setup_logging(&config)?;

    if config.api_key.is_none() {
        error!(
            "{} environment variable not set. The server may not function correctly.",
            config::API_KEY_ENV
        );
    }

    let client = FoxEssClient::new(config).context("Failed to build FoxESS client")?;
    let server = FoxEssMcpServer::new(Arc::new(client));

    info!("Starting the FoxESS MCP server on stdio");

    use rmcp::{
        service::serve_server,
        transport::{async_rw::AsyncRwTransport, io::stdio},
    };

    let (stdin, stdout) = stdio();
    let transport = AsyncRwTransport::new_server(stdin, stdout);

    let running = serve_server(server, transport)
        .await
        .context("Failed to start MCP stdio server")?;
    running
        .waiting()
        .await
        .context("MCP stdio server terminated abnormally")?;

    info!("FoxESS MCP server stopped");
    Ok(())
}
