// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::{Resource, ResourceExt};
use std::fmt;

/// Identifies a single object by namespace and name.
///
/// An empty namespace addresses the object without a namespace segment, which is what
/// cluster-scoped kinds such as `Namespace` need.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceReference {
    namespace: String,
    name: String,
}

impl ResourceReference {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn cluster_scoped(name: impl Into<String>) -> Self {
        Self::new("", name)
    }

    /// Build a reference from an object's metadata, defaulting missing fields to ""
    pub fn from_resource<K: Resource>(object: &K) -> Self {
        Self::new(
            object.namespace().unwrap_or_default(),
            object.meta().name.clone().unwrap_or_default(),
        )
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}/{}", self.namespace, self.name)
        }
    }
}
