use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

mod cli;
mod config;
mod error;
mod files;
mod paths;
mod payload;
mod plan;
mod runner;
mod server;
mod supermarket;
mod workspace;

use config::{ResolvedConfig, UploadTarget};
use paths::Paths;
use runner::SystemRunner;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    let payload = read_payload(args.payload.as_deref())?;
    let env: BTreeMap<String, String> = std::env::vars().collect();
    let config = config::resolve(&payload, &env)?;
    init_logging(config.debug);
    run(&config)
}

fn run(config: &ResolvedConfig) -> Result<()> {
    let paths = Paths::resolve(&config.workspace)?;
    files::write_keyfile(&paths, config)?;
    files::write_netrc(&paths, config)?;
    files::write_berks_config(&paths, config)?;

    let runner = SystemRunner;
    match config.target {
        UploadTarget::Server => {
            // The resolver guarantees org for server mode; this is a backstop.
            let org = config
                .org
                .as_deref()
                .ok_or_else(|| anyhow!("Missing 'org'"))?;
            files::write_server_knife_config(&paths, config, org)?;
            server::ChefServer::new(config, &paths, &runner).upload()
        }
        UploadTarget::Supermarket => {
            files::write_supermarket_knife_config(&paths, config)?;
            supermarket::Supermarket::new(config, &paths, &runner).upload()
        }
    }
}

fn read_payload(path: Option<&Path>) -> Result<payload::Payload> {
    let raw = match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read payload {}", path.display()))?
        }
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("read payload from stdin")?;
            raw
        }
    };
    payload::parse(&raw)
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
