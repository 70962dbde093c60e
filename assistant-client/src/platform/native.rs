// SPDX-License-Identifier: MIT OR Apache-2.0

//! Native timing primitive, backed by `tokio::time`.

use std::time::Duration;

pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
