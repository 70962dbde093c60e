// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform abstraction for the one timing primitive the controller needs.
//!
//! The connect deadline is a plain `sleep` raced against the engine connect
//! future. On WASM it is backed by `gloo-timers`, on native targets by
//! `tokio::time`, so controller tests can run on the host (and fast-forward
//! time with tokio's `start_paused`).

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;
#[cfg(target_arch = "wasm32")]
pub use web::*;
