// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;

use kfc_features::config::Config;
use kfc_features::demo;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting kfc-features demo");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, pod={}, poll_interval={:?}, wait_timeout={:?}",
        config.namespace, config.pod_name, config.poll_interval, config.wait_timeout
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    demo::run(&client, &config).await?;

    info!("Demo finished");
    Ok(())
}
