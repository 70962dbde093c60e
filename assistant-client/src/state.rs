// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connection lifecycle states of a session handle.

use std::fmt;

/// Lifecycle phase of the single room connection owned by the controller.
///
/// The state is mutated only from engine events, never set optimistically by
/// the controller; the one exception is the separate `connecting` flag kept
/// by [`SessionController`](crate::SessionController), which flips true the
/// moment a user-initiated connect begins so the UI can disable its controls
/// before the engine confirms anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No live connection. Terminal state of every handle instance.
    #[default]
    Disconnected,
    /// A connect attempt is in flight.
    Connecting,
    /// The room is joined and media can flow.
    Connected,
    /// The engine lost the transport and is retrying on its own.
    Reconnecting,
    /// The connection dropped because of an engine-reported error.
    DisconnectedByError,
}

impl ConnectionState {
    /// True for both flavors of "not connected and not trying".
    pub fn is_disconnected(&self) -> bool {
        matches!(self, Self::Disconnected | Self::DisconnectedByError)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Reconnecting => "reconnecting",
            Self::DisconnectedByError => "disconnected (error)",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_disconnected() {
        assert_eq!(ConnectionState::default(), ConnectionState::Disconnected);
        assert!(ConnectionState::default().is_disconnected());
    }

    #[test]
    fn error_disconnect_counts_as_disconnected() {
        assert!(ConnectionState::DisconnectedByError.is_disconnected());
        assert!(!ConnectionState::Reconnecting.is_disconnected());
        assert!(!ConnectionState::Connecting.is_disconnected());
    }
}
