use answer_dns_domain::CliOverrides;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "answer-dns")]
#[command(version)]
#[command(about = "Per-client authoritative DNS answers with upstream delegation")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Answers document path
    #[arg(short = 'a', long, value_name = "FILE")]
    answers: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// TTL for records that do not set one
    #[arg(long)]
    ttl: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        answers_path: cli.answers,
        default_ttl: cli.ttl,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting answer-dns v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config).await?;

    if config.answers.reload_on_sighup {
        server::spawn_reload_on_sighup(Arc::clone(&services.reload))?;
    }

    let dns_addr = config.server.listen_address();
    let handler = Arc::clone(&services.handler);
    let tcp_enabled = config.server.tcp_enabled;

    tokio::select! {
        result = server::start_dns_server(dns_addr, handler, tcp_enabled) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = server::shutdown_signal() => {}
    }

    info!("Server shutdown complete");
    Ok(())
}
