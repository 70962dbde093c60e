// SPDX-License-Identifier: MIT OR Apache-2.0

//! Browser timing primitive, backed by `setTimeout` via `gloo-timers`.

use std::time::Duration;

pub async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}
