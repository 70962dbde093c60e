// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config_error;
pub mod media_error_overlay;
pub mod session;
pub mod session_controls;
pub mod transcript;
