// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fetching the current state of a referenced object

use crate::error::Result;
use crate::kubernetes::scope::{api_for, ScopedApi};
use crate::types::ResourceReference;
use async_trait::async_trait;
use kube::{Api, Client, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::debug;

/// Reads one object of kind `K` by reference.
///
/// Failures (not found, transport, auth) are returned as-is.
#[async_trait]
pub trait ObjectFetcher<K>: Send + Sync {
    async fn fetch(&self, reference: &ResourceReference) -> Result<K>;
}

#[async_trait]
impl<K> ObjectFetcher<K> for Client
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug + Send + Sync + 'static,
    K::Scope: ScopedApi,
{
    async fn fetch(&self, reference: &ResourceReference) -> Result<K> {
        debug!("Fetching {} {}", K::kind(&()), reference);
        let api: Api<K> = api_for(self.clone(), reference.namespace());
        Ok(api.get(reference.name()).await?)
    }
}
