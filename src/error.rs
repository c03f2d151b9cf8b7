// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KfcError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to build request: {0}")]
    Http(#[from] http::Error),

    #[error("Object has no metadata.name: {0}")]
    MissingName(String),

    #[error("Timed out after {timeout:?} waiting for {reference}")]
    WaitTimeout { reference: String, timeout: Duration },

    #[error("Condition for {reference} not met after {attempts} attempts")]
    AttemptsExhausted { reference: String, attempts: u32 },
}

impl KfcError {
    /// True when the API server answered 404 for the requested object
    pub fn is_not_found(&self) -> bool {
        matches!(self, KfcError::Kube(kube::Error::Api(err)) if err.code == 404)
    }
}

pub type Result<T> = std::result::Result<T, KfcError>;
