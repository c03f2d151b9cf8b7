// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{demo, wait};
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Demo configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace created for (and deleted after) the demo
    pub namespace: String,
    pub pod_name: String,
    pub image: String,
    /// Replica count the deployment is scaled to
    pub replicas: i32,
    pub poll_interval: Duration,
    /// Upper bound for the pod to reach Running, unbounded when unset
    pub wait_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = lookup("KFC_NAMESPACE").unwrap_or_else(|| demo::NAMESPACE.to_string());
        let pod_name = lookup("KFC_POD_NAME").unwrap_or_else(|| demo::POD_NAME.to_string());
        let image = lookup("KFC_IMAGE").unwrap_or_else(|| demo::IMAGE.to_string());
        let replicas = parse_var(&lookup, "KFC_REPLICAS")?.unwrap_or(demo::REPLICAS);
        let poll_interval = parse_var(&lookup, "KFC_POLL_INTERVAL_SECS")?
            .unwrap_or(wait::POLL_INTERVAL_SECS);
        let wait_timeout: Option<u64> = parse_var(&lookup, "KFC_WAIT_TIMEOUT_SECS")?;

        anyhow::ensure!(
            replicas >= 0,
            "KFC_REPLICAS must not be negative, got {}",
            replicas
        );
        anyhow::ensure!(
            poll_interval > 0,
            "KFC_POLL_INTERVAL_SECS must be at least 1 second"
        );

        Ok(Config {
            namespace,
            pod_name,
            image,
            replicas,
            poll_interval: Duration::from_secs(poll_interval),
            wait_timeout: wait_timeout.map(Duration::from_secs),
        })
    }

    pub fn deployment_name(&self) -> String {
        format!("{}-deployment", self.pod_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            namespace: demo::NAMESPACE.to_string(),
            pod_name: demo::POD_NAME.to_string(),
            image: demo::IMAGE.to_string(),
            replicas: demo::REPLICAS,
            poll_interval: Duration::from_secs(wait::POLL_INTERVAL_SECS),
            wait_timeout: None,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("{} has an invalid value: {:?}", key, raw))
        })
        .transpose()
}
