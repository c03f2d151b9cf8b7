// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The field manager used for server-side apply
pub const FIELD_MANAGER: &str = "kfc-features";

/// Status polling configuration
pub mod wait {
    /// Fixed delay between two fetches of the watched object
    pub const POLL_INTERVAL_SECS: u64 = 2;
    /// Phase reported by pods (and namespaces) once they are up
    pub const RUNNING_PHASE: &str = "Running";
}

/// Defaults for the demo run
pub mod demo {
    pub const NAMESPACE: &str = "kfc-features";
    pub const POD_NAME: &str = "kfc-features-pod";
    pub const IMAGE: &str = "nginx:latest";
    pub const CONTAINER_NAME: &str = "nginx";
    pub const FINALIZER: &str = "defenseunicorns.com/finalizer";
    pub const PROXY_PORT: &str = "80";
    pub const REPLICAS: i32 = 3;
    /// Condition type written by the status patch step
    pub const STATUS_CONDITION: &str = "kfc-features.io/Demo";
}
