// ABOUTME: Folio server binary: loads configuration, initializes logging, and serves HTTP
// ABOUTME: Supports a --check-config mode that validates settings and exits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Folio contributors

//! # Folio Server Binary

use anyhow::Result;
use clap::Parser;
use folio_server::{config::ServerConfig, logging, resources::ServerResources, server};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "folio-server")]
#[command(about = "Folio - portfolio site backend with a cookie-gated admin dashboard")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Validate configuration, print a summary, and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.network.http_port = http_port;
    }
    config.validate()?;
    config.warn_on_weak_settings();

    if args.check_config {
        println!("{}", config.summary());
        return Ok(());
    }

    info!("Starting Folio server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::in_memory(config));
    server::run(resources).await
}
