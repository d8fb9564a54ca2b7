use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use trackdown_domain::config::CliOverrides;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "trackdown")]
#[command(version)]
#[command(about = "Trackdown - DNS query log investigation service")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Trackdown v{}", env!("CARGO_PKG_VERSION"));

    if !config.whois.is_configured() {
        info!("No whois API key set; registration lookups disabled");
    }

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, config.database.max_connections).await?;

    let repos = di::Repositories::new(pool, &config)?;
    let use_cases = di::UseCases::new(&repos, &config);

    let state = trackdown_api::AppState {
        correlate: use_cases.correlate,
        lookup_whois: use_cases.lookup_whois,
        aggregate: use_cases.aggregate,
        whois_configured: config.whois.is_configured(),
    };

    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;
    server::start_web_server(bind_addr, state).await?;

    Ok(())
}
