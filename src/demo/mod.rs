// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Walkthrough of the fluent client against a live cluster.
//!
//! `start` creates a namespace, a pod and a deployment and exercises every client
//! operation on them; `end` removes the finalizer and the namespace again.

pub mod resources;

use crate::config::Config;
use crate::constants::demo::{FINALIZER, PROXY_PORT};
use crate::constants::wait::RUNNING_PHASE;
use crate::error::Result;
use crate::kubernetes::{ApplyOptions, FinalizeOp, K8s};
use crate::types::ResourceReference;
use crate::wait::ConditionWaiter;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::api::Patch;
use kube::{Client, ResourceExt};
use tracing::{error, info, instrument, warn};

/// Run `start`, then always `end`.
///
/// An error from `start` is logged and returned after cleanup; otherwise the cleanup
/// result is returned.
pub async fn run(client: &Client, config: &Config) -> Result<()> {
    let started = start(client, config).await;
    if let Err(e) = &started {
        error!("Error during demo: {}", e);
    }

    let cleaned = end(client, config).await;
    if let Err(e) = &cleaned {
        error!("Error during cleanup: {}", e);
    }

    started.and(cleaned)
}

#[instrument(skip(client, config), fields(namespace = %config.namespace))]
pub async fn start(client: &Client, config: &Config) -> Result<()> {
    let pod_name = config.pod_name.as_str();
    let deployment_name = config.deployment_name();

    info!("Creating namespace {}", config.namespace);
    K8s::<Namespace>::new(client.clone())
        .apply(&resources::namespace(config), ApplyOptions::default())
        .await?;

    info!(
        "Creating pod {} in namespace {} with image {}",
        pod_name, config.namespace, config.image
    );
    K8s::<Pod>::new(client.clone())
        .apply(&resources::pod(config), ApplyOptions { force: true })
        .await?;

    let pods = K8s::<Pod>::new(client.clone()).in_namespace(config.namespace.as_str());

    info!("Adding finalizer {} to pod {}", FINALIZER, pod_name);
    pods.finalize(FinalizeOp::Add, FINALIZER, pod_name).await?;
    let pod = pods.get(pod_name).await?;
    info!("Pod finalizers: {:?}", pod.finalizers());

    info!("Waiting for pod {} to be {}", pod_name, RUNNING_PHASE);
    let mut waiter = ConditionWaiter::new(client.clone()).interval(config.poll_interval);
    if let Some(timeout) = config.wait_timeout {
        waiter = waiter.timeout(timeout);
    }
    let _: Pod = waiter
        .wait_for_phase(&ResourceReference::from_resource(&pod), RUNNING_PHASE)
        .await?;

    info!("Proxying to port {} of pod {}", PROXY_PORT, pod_name);
    let home = pods.proxy(pod_name, PROXY_PORT).await?;
    info!("Port {} proxy results:\n{}", PROXY_PORT, home);

    let deployments =
        K8s::<Deployment>::new(client.clone()).in_namespace(config.namespace.as_str());

    info!(
        "Creating deployment {} in namespace {} with image {}",
        deployment_name, config.namespace, config.image
    );
    deployments
        .apply(&resources::deployment(config), ApplyOptions::default())
        .await?;

    info!(
        "Scaling deployment {} to {} replicas",
        deployment_name, config.replicas
    );
    deployments.scale(config.replicas, &deployment_name).await?;
    let deploy = deployments.get(&deployment_name).await?;
    info!(
        "Deployment now has {} replicas",
        deploy.spec.and_then(|s| s.replicas).unwrap_or_default()
    );

    let logs = pods.logs(pod_name).await?;
    info!("Pod logs:\n{}", logs);

    info!("Patching status of pod {}", pod_name);
    pods.patch_status(pod_name, &Patch::Strategic(resources::status_condition_patch()))
        .await?;

    info!("Evicting pod {}", pod_name);
    let status = pods.evict(pod_name).await?;
    info!("Eviction status: {:?}", status);

    Ok(())
}

#[instrument(skip(client, config), fields(namespace = %config.namespace))]
pub async fn end(client: &Client, config: &Config) -> Result<()> {
    let pods = K8s::<Pod>::new(client.clone()).in_namespace(config.namespace.as_str());

    info!(
        "Removing finalizer {} from pod {}",
        FINALIZER, config.pod_name
    );
    match pods
        .finalize(FinalizeOp::Remove, FINALIZER, &config.pod_name)
        .await
    {
        Ok(_) => {}
        Err(e) if e.is_not_found() => {
            warn!(
                "Pod {} not found, skipping finalizer removal",
                config.pod_name
            );
        }
        Err(e) => return Err(e),
    }

    info!("Deleting namespace {}", config.namespace);
    K8s::<Namespace>::new(client.clone())
        .delete(&config.namespace)
        .await
}
