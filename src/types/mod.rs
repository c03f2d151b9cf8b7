// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Plain data types shared across modules.

pub mod reference;

pub use reference::ResourceReference;
