// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Polling until a fetched object satisfies a condition.

pub mod fetch;
pub mod phase;
pub mod sleep;
pub mod waiter;

pub use fetch::ObjectFetcher;
pub use phase::{has_status_phase, StatusPhase};
pub use sleep::{Sleeper, TokioSleeper};
pub use waiter::{wait_for_running_status_phase, ConditionWaiter};
