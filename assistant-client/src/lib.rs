// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session-lifecycle controller for the voice assistant web UI.
//!
//! This crate owns the thin connection-orchestration layer between the UI and
//! the external real-time media engine: fetch a join token from the backend,
//! ask the engine to connect within a deadline, enable the microphone, and
//! keep the UI-visible state (`connecting` flag, error string, connection
//! state) consistent with what the engine reports.
//!
//! # Outline of usage
//!
//! ```ignore
//! let controller = SessionController::new(SessionControllerOptions {
//!     engine,           // Rc<dyn SessionEngine>, e.g. LivekitEngine
//!     token_provider,   // Rc<dyn TokenProvider>, e.g. HttpTokenProvider
//!     media_server_url, // from runtime configuration
//!     connect_timeout,  // client-side connect deadline
//! });
//!
//! let mut events = controller.subscribe(); // async-broadcast receiver
//! controller.connect(&credential).await?;
//! controller.disconnect().await;
//! controller.dispose().await; // on view teardown
//! ```
//!
//! The engine itself (room join, reconnection policy, media negotiation) is
//! an external collaborator reached through the [`SessionEngine`] trait; the
//! production implementation is [`LivekitEngine`].

mod constants;
mod controller;
mod engine;
mod error;
mod livekit;
mod platform;
mod state;
mod token;

pub use constants::{DEFAULT_CONNECT_TIMEOUT, EVENT_CHANNEL_CAPACITY};
pub use controller::{
    SessionController, SessionControllerOptions, SessionEvent, SessionSnapshot,
};
pub use engine::{EngineEvent, EngineEventHandler, ListenerId, SessionEngine};
pub use error::SessionError;
pub use livekit::LivekitEngine;
pub use state::ConnectionState;
pub use token::{HttpTokenProvider, JoinCredential, TokenProvider, TokenResponse};
