// SPDX-License-Identifier: MIT OR Apache-2.0

//! Framework-agnostic seam over the external real-time media engine.
//!
//! The engine (room join/leave, reconnection policy, track negotiation) is an
//! external collaborator; this trait is the only surface the controller talks
//! to, which keeps the controller state machine unit-testable on native
//! targets against a scripted fake.

use crate::state::ConnectionState;
use futures::future::LocalBoxFuture;
use std::rc::Rc;

/// Events emitted by the engine's event stream.
///
/// The controller forwards these 1:1 into UI-visible state, with two
/// exceptions: `Reconnecting` also forces the `connecting` flag true, and
/// `Connected`/`Disconnected` clear it.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    /// The engine's connection state changed.
    StateChanged(ConnectionState),

    /// The connection ended. `reason` is `Some` when the engine closed the
    /// session because of an error, `None` for a clean local disconnect.
    Disconnected { reason: Option<String> },

    /// The signalling channel came up (before media is negotiated).
    SignalConnected,

    /// Transport dropped, the engine is retrying with its own backoff.
    Reconnecting,

    /// A retry succeeded and the session is live again.
    Reconnected,

    /// The room's metadata string was replaced.
    RoomMetadataChanged(String),

    /// Connection quality report for one participant.
    ConnectionQualityChanged { participant: String, quality: String },

    /// Camera/microphone access failed after the session was established.
    MediaDevicesError(String),

    /// One transcription segment from the agent or the local participant.
    TranscriptionReceived {
        participant: String,
        text: String,
        is_final: bool,
    },

    /// Generic engine error not covered by the variants above.
    Error(String),
}

/// Identifies one registered event listener so it can be removed again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(pub usize);

pub type EngineEventHandler = Rc<dyn Fn(EngineEvent)>;

/// One real-time media session handle.
///
/// All methods are single-threaded async (browser task queue); futures are
/// not `Send`. Errors are plain strings, classified into
/// [`SessionError`](crate::SessionError) kinds by the controller.
pub trait SessionEngine {
    /// Join the room at `url` using the server-issued `token`.
    fn connect<'a>(&'a self, url: &'a str, token: &'a str)
        -> LocalBoxFuture<'a, Result<(), String>>;

    /// Tear the session down. Must be idempotent and must also cancel a
    /// still-pending connect attempt.
    fn disconnect(&self) -> LocalBoxFuture<'_, Result<(), String>>;

    /// Enable or disable the local microphone track.
    fn set_microphone_enabled(&self, enabled: bool) -> LocalBoxFuture<'_, Result<(), String>>;

    /// Current connection state as the engine reports it.
    fn state(&self) -> ConnectionState;

    /// Register an event listener; the returned id is the matching release
    /// token for [`remove_event_listener`](Self::remove_event_listener).
    fn add_event_listener(&self, handler: EngineEventHandler) -> ListenerId;

    /// Remove a previously registered listener. Unknown ids are ignored.
    fn remove_event_listener(&self, id: ListenerId);
}
