// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fluent, kind-typed wrapper over `kube::Api`

use crate::constants::FIELD_MANAGER;
use crate::error::{KfcError, Result};
use crate::kubernetes::scope::{api_for, ScopedApi};
use k8s_openapi::api::autoscaling::v1::Scale;
use kube::{
    api::{DeleteParams, ListParams, Patch, PatchParams},
    Api, Client, Resource, ResourceExt,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::fmt::Debug;
use std::marker::PhantomData;
use tracing::{debug, info, instrument};

/// Whether a finalizer is added to or removed from an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalizeOp {
    Add,
    Remove,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Take ownership of fields managed by someone else
    pub force: bool,
}

/// Entry point for operations on one resource kind, optionally scoped to a namespace.
///
/// ```no_run
/// # async fn demo(client: kube::Client) -> kfc_features::error::Result<()> {
/// use k8s_openapi::api::core::v1::Pod;
/// use kfc_features::kubernetes::K8s;
///
/// let pod = K8s::<Pod>::new(client).in_namespace("default").get("web").await?;
/// # Ok(())
/// # }
/// ```
pub struct K8s<K> {
    client: Client,
    namespace: String,
    kind: PhantomData<K>,
}

impl<K> Clone for K8s<K> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            namespace: self.namespace.clone(),
            kind: PhantomData,
        }
    }
}

impl<K> K8s<K>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Serialize + Debug,
    K::Scope: ScopedApi,
{
    pub fn new(client: Client) -> Self {
        Self {
            client,
            namespace: String::new(),
            kind: PhantomData,
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn api(&self) -> Api<K> {
        api_for(self.client.clone(), &self.namespace)
    }

    #[instrument(skip(self), fields(kind = %K::kind(&()), namespace = %self.namespace))]
    pub async fn get(&self, name: &str) -> Result<K> {
        debug!("Getting {}", name);
        Ok(self.api().get(name).await?)
    }

    #[instrument(skip(self), fields(kind = %K::kind(&()), namespace = %self.namespace))]
    pub async fn list(&self) -> Result<Vec<K>> {
        let list = self.api().list(&ListParams::default()).await?;
        debug!("Listed {} objects", list.items.len());
        Ok(list.items)
    }

    /// Create or update the object with server-side apply.
    ///
    /// The namespace in the object's metadata takes precedence over `in_namespace`.
    #[instrument(skip(self, object), fields(kind = %K::kind(&())))]
    pub async fn apply(&self, object: &K, options: ApplyOptions) -> Result<K> {
        let name = object
            .meta()
            .name
            .clone()
            .ok_or_else(|| KfcError::MissingName(K::kind(&()).to_string()))?;
        let namespace = object.namespace().unwrap_or_else(|| self.namespace.clone());
        let api: Api<K> = api_for(self.client.clone(), &namespace);

        let mut pp = PatchParams::apply(FIELD_MANAGER);
        if options.force {
            pp = pp.force();
        }

        info!("Applying {} {}", K::kind(&()), name);
        Ok(api.patch(&name, &pp, &Patch::Apply(object)).await?)
    }

    #[instrument(skip(self), fields(kind = %K::kind(&()), namespace = %self.namespace))]
    pub async fn delete(&self, name: &str) -> Result<()> {
        info!("Deleting {}", name);
        let response = self.api().delete(name, &DeleteParams::default()).await?;
        if response.is_left() {
            debug!("Deletion of {} in progress", name);
        } else {
            debug!("Deleted {}", name);
        }
        Ok(())
    }

    /// Add or remove a finalizer on an existing object
    #[instrument(skip(self), fields(kind = %K::kind(&()), namespace = %self.namespace))]
    pub async fn finalize(&self, op: FinalizeOp, finalizer: &str, name: &str) -> Result<K> {
        let api = self.api();
        let current = api.get(name).await?;
        let finalizers = updated_finalizers(current.finalizers(), op, finalizer);

        info!("{:?} finalizer {} on {}", op, finalizer, name);
        let patch = json!({ "metadata": { "finalizers": finalizers } });
        Ok(api
            .patch(name, &PatchParams::default(), &Patch::Merge(&patch))
            .await?)
    }

    #[instrument(skip(self, patch), fields(kind = %K::kind(&()), namespace = %self.namespace))]
    pub async fn patch_status<P>(&self, name: &str, patch: &Patch<P>) -> Result<K>
    where
        P: Serialize + Debug,
    {
        info!("Patching status of {}", name);
        Ok(self
            .api()
            .patch_status(name, &PatchParams::default(), patch)
            .await?)
    }

    /// Set the replica count through the scale subresource
    #[instrument(skip(self), fields(kind = %K::kind(&()), namespace = %self.namespace))]
    pub async fn scale(&self, replicas: i32, name: &str) -> Result<Scale> {
        info!("Scaling {} to {} replicas", name, replicas);
        let patch = json!({ "spec": { "replicas": replicas } });
        Ok(self
            .api()
            .patch_scale(name, &PatchParams::default(), &Patch::Merge(&patch))
            .await?)
    }
}

fn updated_finalizers(current: &[String], op: FinalizeOp, finalizer: &str) -> Vec<String> {
    match op {
        FinalizeOp::Add => {
            let mut finalizers = current.to_vec();
            if !finalizers.iter().any(|f| f == finalizer) {
                finalizers.push(finalizer.to_string());
            }
            finalizers
        }
        FinalizeOp::Remove => current
            .iter()
            .filter(|f| f.as_str() != finalizer)
            .cloned()
            .collect(),
    }
}
