// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixed-interval polling of an object until a condition holds

use crate::constants::wait::{POLL_INTERVAL_SECS, RUNNING_PHASE};
use crate::error::{KfcError, Result};
use crate::types::ResourceReference;
use crate::wait::fetch::ObjectFetcher;
use crate::wait::phase::{has_status_phase, StatusPhase};
use crate::wait::sleep::{Sleeper, TokioSleeper};
use kube::runtime::wait::Condition;
use kube::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Re-fetches an object until a condition over it holds.
///
/// Defaults: a fixed 2 second interval, no backoff, no attempt cap and no timeout, so a
/// condition that never holds keeps polling until the future is dropped. A failed
/// fetch ends the wait with that error; it is never retried.
pub struct ConditionWaiter<F, S = TokioSleeper> {
    fetcher: F,
    sleeper: S,
    interval: Duration,
    timeout: Option<Duration>,
    max_attempts: Option<u32>,
}

impl<F> ConditionWaiter<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            sleeper: TokioSleeper,
            interval: Duration::from_secs(POLL_INTERVAL_SECS),
            timeout: None,
            max_attempts: None,
        }
    }
}

impl<F, S> ConditionWaiter<F, S> {
    /// Replace the sleeper used between polls
    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> ConditionWaiter<F, S2> {
        ConditionWaiter {
            fetcher: self.fetcher,
            sleeper,
            interval: self.interval,
            timeout: self.timeout,
            max_attempts: self.max_attempts,
        }
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Fail with `WaitTimeout` if the condition does not hold within `timeout`.
    ///
    /// The budget is spent by the intervals handed to the sleeper, so an injected
    /// sleeper drives it too. A wall-clock deadline of the same length also bounds
    /// slow fetches.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fail with `AttemptsExhausted` after `attempts` unsatisfied fetches.
    ///
    /// At least one fetch always happens, so `0` is raised to `1`.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts.max(1));
        self
    }

    /// Poll until `condition` holds for the referenced object and return that object
    #[instrument(skip(self, reference, condition), fields(reference = %reference))]
    pub async fn wait_until<K, C>(&self, reference: &ResourceReference, condition: C) -> Result<K>
    where
        F: ObjectFetcher<K>,
        S: Sleeper,
        C: Condition<K>,
    {
        let polling = self.poll(reference, &condition);

        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, polling)
                .await
                .map_err(|_| KfcError::WaitTimeout {
                    reference: reference.to_string(),
                    timeout,
                })?,
            None => polling.await,
        }
    }

    /// Poll until the referenced object's `status.phase` equals `phase`
    pub async fn wait_for_phase<K>(&self, reference: &ResourceReference, phase: &str) -> Result<K>
    where
        F: ObjectFetcher<K>,
        S: Sleeper,
        K: StatusPhase,
    {
        self.wait_until(reference, has_status_phase::<K>(phase)).await
    }

    async fn poll<K, C>(&self, reference: &ResourceReference, condition: &C) -> Result<K>
    where
        F: ObjectFetcher<K>,
        S: Sleeper,
        C: Condition<K>,
    {
        let mut attempts: u32 = 0;
        let mut slept = Duration::ZERO;

        loop {
            attempts += 1;
            let object = self.fetcher.fetch(reference).await?;

            if condition.matches_object(Some(&object)) {
                info!("Condition met for {} after {} attempt(s)", reference, attempts);
                return Ok(object);
            }

            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(KfcError::AttemptsExhausted {
                    reference: reference.to_string(),
                    attempts,
                });
            }

            if let Some(timeout) = self.timeout {
                if slept + self.interval > timeout {
                    return Err(KfcError::WaitTimeout {
                        reference: reference.to_string(),
                        timeout,
                    });
                }
            }

            debug!(
                "Condition not yet met for {}, polling again in {:?}",
                reference, self.interval
            );
            self.sleeper.sleep(self.interval).await;
            slept += self.interval;
        }
    }
}

/// Wait, without a deadline, until the referenced object reports phase `Running`
pub async fn wait_for_running_status_phase<K>(
    client: &Client,
    reference: &ResourceReference,
) -> Result<K>
where
    Client: ObjectFetcher<K>,
    K: StatusPhase,
{
    ConditionWaiter::new(client.clone())
        .wait_for_phase(reference, RUNNING_PHASE)
        .await
}
