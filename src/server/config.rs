//! Server configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::game::DEFAULT_HISTORY_FILE;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Peg solitaire played through a single HTML page.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, long_about = None)]
pub struct ServerConfig {
    /// `host:port` to listen on
    #[arg(
        long = "addr",
        env = "SOLITAIRE_ADDR",
        default_value = DEFAULT_BIND_ADDR,
        value_parser = parse_bind_addr
    )]
    pub bind_addr: String,

    /// File written by `Save History` and read by `Load History`
    #[arg(long = "history", env = "SOLITAIRE_HISTORY", default_value = DEFAULT_HISTORY_FILE)]
    pub history_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }
}

fn parse_bind_addr(addr: &str) -> Result<String, String> {
    let addr = addr.trim();
    match addr.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => Ok(addr.to_string()),
        _ => Err(format!("expected host:port, got '{addr}'")),
    }
}
