// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error kinds surfaced by the session controller.
//!
//! Every failure of a connect attempt is caught at the `connect()` boundary,
//! converted to the display string below, and shown inline by the UI; cleanup
//! failures along the way are logged and swallowed so they never mask the
//! original error.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The token endpoint answered with a non-2xx status, or the request
    /// never reached it (`status == 0`).
    TokenFetch { status: u16, status_text: String },
    /// The media server address is missing from the runtime configuration.
    Configuration(String),
    /// The client-side connect deadline fired before the engine settled.
    ConnectTimeout,
    /// The engine rejected or failed the connect call itself.
    EngineConnect(String),
    /// Enabling the microphone failed, or the engine reported a
    /// camera/microphone access error.
    MediaDevice(String),
    /// A generic engine error after the session was established.
    EngineRuntime(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::TokenFetch { status: 0, status_text } => {
                write!(f, "Token request failed: {status_text}")
            }
            SessionError::TokenFetch { status, status_text } => {
                write!(f, "Token request failed with HTTP {status} {status_text}")
            }
            SessionError::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            SessionError::ConnectTimeout => {
                write!(f, "Timed out waiting for the media server")
            }
            SessionError::EngineConnect(msg) => {
                write!(f, "Could not connect to the media server: {msg}")
            }
            SessionError::MediaDevice(msg) => write!(f, "Media device error: {msg}"),
            SessionError::EngineRuntime(msg) => write!(f, "Session error: {msg}"),
        }
    }
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_fetch_message_carries_http_status() {
        let err = SessionError::TokenFetch {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"), "message should name the status: {msg}");
        assert!(msg.contains("Internal Server Error"));
    }

    #[test]
    fn network_level_token_failure_has_no_bogus_status() {
        let err = SessionError::TokenFetch {
            status: 0,
            status_text: "connection refused".to_string(),
        };
        let msg = err.to_string();
        assert!(!msg.contains("HTTP 0"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(
            SessionError::Configuration("media server URL is not configured".into()).to_string(),
            "Configuration error: media server URL is not configured"
        );
        assert!(SessionError::ConnectTimeout.to_string().contains("Timed out"));
    }
}
