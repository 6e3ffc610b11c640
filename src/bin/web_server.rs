use clap::Parser;
use sssp_engine::web::{start_server, ServerConfig};
use std::net::IpAddr;

#[derive(Parser, Debug)]
#[command(author, version, about = "HTTP API for shortest distance queries", long_about = None)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "SSSP_HOST")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3005, env = "SSSP_PORT")]
    port: u16,

    /// Disable the permissive CORS layer
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        enable_cors: !cli.no_cors,
    };

    log::info!("starting with {:?}", config);
    start_server(config).await?;

    Ok(())
}
