use clap::Parser;
use log::info;

use peg_solitaire::server::{self, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();
    info!("peg_solitaire {}", env!("CARGO_PKG_VERSION"));

    server::serve(config).await
}
