// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;

/// Client-side ceiling for one engine connect attempt. If the engine has not
/// settled by then the attempt is failed with
/// [`SessionError::ConnectTimeout`](crate::SessionError::ConnectTimeout).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Capacity of the per-controller session event channel. The channel is
/// created in overflow mode, so a slow subscriber loses the oldest events
/// rather than blocking the controller.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;
