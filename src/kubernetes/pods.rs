// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod-only operations: logs, proxy and eviction

use crate::error::Result;
use crate::kubernetes::fluent::K8s;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{EvictParams, LogParams};
use kube::core::Status;
use tracing::{info, instrument};

impl K8s<Pod> {
    /// Read the logs of the pod's (only) container
    #[instrument(skip(self), fields(namespace = %self.namespace()))]
    pub async fn logs(&self, name: &str) -> Result<String> {
        info!("Reading logs of pod {}", name);
        Ok(self.api().logs(name, &LogParams::default()).await?)
    }

    /// GET the root path of `port` on the pod through the API server proxy
    #[instrument(skip(self), fields(namespace = %self.namespace()))]
    pub async fn proxy(&self, name: &str, port: &str) -> Result<String> {
        let url = proxy_url(self.api().resource_url(), name, port);
        info!("Proxying to {}", url);

        let request = http::Request::get(url).body(Vec::new())?;
        Ok(self.client().request_text(request).await?)
    }

    #[instrument(skip(self), fields(namespace = %self.namespace()))]
    pub async fn evict(&self, name: &str) -> Result<Status> {
        info!("Evicting pod {}", name);
        Ok(self.api().evict(name, &EvictParams::default()).await?)
    }
}

fn proxy_url(resource_url: &str, name: &str, port: &str) -> String {
    format!("{}/{}:{}/proxy/", resource_url, name, port)
}
