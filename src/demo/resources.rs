// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifests applied by the demo

use crate::config::Config;
use crate::constants::demo::{CONTAINER_NAME, STATUS_CONDITION};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, Namespace, Pod, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub fn namespace(config: &Config) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(config.namespace.clone()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Single-container pod running the configured image
pub fn pod(config: &Config) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(config.pod_name.clone()),
            namespace: Some(config.namespace.clone()),
            ..Default::default()
        },
        spec: Some(pod_spec(config)),
        ..Default::default()
    }
}

/// Deployment with one replica whose pods carry `app=<pod name>`
pub fn deployment(config: &Config) -> Deployment {
    let labels = BTreeMap::from([("app".to_string(), config.pod_name.clone())]);

    Deployment {
        metadata: ObjectMeta {
            name: Some(config.deployment_name()),
            namespace: Some(config.namespace.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(1),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(pod_spec(config)),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Strategic merge patch adding the demo condition to a pod's status
pub fn status_condition_patch() -> Value {
    json!({
        "status": {
            "conditions": [{
                "type": STATUS_CONDITION,
                "status": "True",
                "reason": "StatusPatched",
                "message": "Condition added by the kfc-features demo"
            }]
        }
    })
}

fn pod_spec(config: &Config) -> PodSpec {
    PodSpec {
        containers: vec![Container {
            name: CONTAINER_NAME.to_string(),
            image: Some(config.image.clone()),
            ..Default::default()
        }],
        ..Default::default()
    }
}
