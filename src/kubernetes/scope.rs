// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Scope-aware construction of `kube::Api` handles

use k8s_openapi::{ClusterResourceScope, NamespaceResourceScope};
use kube::{Api, Client, Resource};

/// Picks the right `Api` constructor for a resource scope.
///
/// An empty namespace on a namespaced kind addresses the object without a namespace
/// segment. Cluster-scoped kinds ignore the namespace.
pub trait ScopedApi: Sized {
    fn api<K>(client: Client, namespace: &str) -> Api<K>
    where
        K: Resource<Scope = Self, DynamicType = ()>;
}

impl ScopedApi for NamespaceResourceScope {
    fn api<K>(client: Client, namespace: &str) -> Api<K>
    where
        K: Resource<Scope = Self, DynamicType = ()>,
    {
        if namespace.is_empty() {
            Api::all(client)
        } else {
            Api::namespaced(client, namespace)
        }
    }
}

impl ScopedApi for ClusterResourceScope {
    fn api<K>(client: Client, _namespace: &str) -> Api<K>
    where
        K: Resource<Scope = Self, DynamicType = ()>,
    {
        Api::all(client)
    }
}

/// Build an `Api<K>` for the given namespace, whatever the scope of `K`
pub fn api_for<K>(client: Client, namespace: &str) -> Api<K>
where
    K: Resource<DynamicType = ()>,
    K::Scope: ScopedApi,
{
    <K::Scope as ScopedApi>::api::<K>(client, namespace)
}
