// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fluent Kubernetes client: kind-typed operations on top of `kube::Api`.

pub mod fluent;
pub mod pods;
pub mod scope;

pub use fluent::{ApplyOptions, FinalizeOp, K8s};
pub use scope::{api_for, ScopedApi};
