// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::core::v1::{Namespace, PersistentVolume, PersistentVolumeClaim, Pod};
use kube::runtime::wait::Condition;

/// Kinds that report a lifecycle phase in `status.phase`
pub trait StatusPhase {
    fn status_phase(&self) -> Option<&str>;
}

impl StatusPhase for Pod {
    fn status_phase(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.phase.as_deref())
    }
}

impl StatusPhase for Namespace {
    fn status_phase(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.phase.as_deref())
    }
}

impl StatusPhase for PersistentVolume {
    fn status_phase(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.phase.as_deref())
    }
}

impl StatusPhase for PersistentVolumeClaim {
    fn status_phase(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.phase.as_deref())
    }
}

/// Condition that holds once the object's phase equals `phase`.
///
/// A missing object or a missing phase does not match.
pub fn has_status_phase<K: StatusPhase>(phase: impl Into<String>) -> impl Condition<K> {
    let phase = phase.into();
    move |obj: Option<&K>| obj.and_then(|o| o.status_phase()) == Some(phase.as_str())
}
