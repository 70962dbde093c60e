// SPDX-License-Identifier: MIT OR Apache-2.0

//! The session controller: one connect attempt end-to-end, and UI state kept
//! consistent with what the engine actually reports.
//!
//! The controller owns exactly one engine handle for the lifetime of the page
//! view. Before a new connect attempt, any non-disconnected handle is torn
//! down first, so at most one live handle exists at a time. State changes are
//! republished to the UI over a per-controller `async-broadcast` channel;
//! subscribing is `new_receiver()`, unsubscribing is dropping the receiver.

use crate::engine::{EngineEvent, ListenerId, SessionEngine};
use crate::error::SessionError;
use crate::platform;
use crate::state::ConnectionState;
use crate::token::{JoinCredential, TokenProvider};
use async_broadcast::{broadcast, InactiveReceiver, Receiver, Sender};
use futures::future::{select, Either};
use futures::pin_mut;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Events republished to UI subscribers.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    StateChanged(ConnectionState),
    /// The optimistic "a connect/reconnect is in flight" flag changed.
    ConnectingChanged(bool),
    /// The inline error string changed; empty means cleared.
    ErrorChanged(String),
    /// A device failure that warrants a blocking notification rather than an
    /// inline message (it does not represent a failed connect call).
    MediaDeviceAlert(String),
    RoomMetadataChanged(String),
    ConnectionQualityChanged { participant: String, quality: String },
    TranscriptSegment {
        participant: String,
        text: String,
        is_final: bool,
    },
}

/// Point-in-time copy of the three pieces of UI-observable state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub state: ConnectionState,
    pub connecting: bool,
    pub error: String,
}

pub struct SessionControllerOptions {
    pub engine: Rc<dyn SessionEngine>,
    pub token_provider: Rc<dyn TokenProvider>,
    /// Media server address from runtime configuration; `None` fails every
    /// connect attempt with [`SessionError::Configuration`].
    pub media_server_url: Option<String>,
    pub connect_timeout: Duration,
}

#[derive(Default)]
struct Inner {
    state: ConnectionState,
    connecting: bool,
    error: String,
    listener: Option<ListenerId>,
    disposed: bool,
}

/// UI-bound state holder owning a single room-connection handle.
///
/// Cheap to clone; clones share the same state. Construct on view mount,
/// [`dispose`](Self::dispose) on unmount.
#[derive(Clone)]
pub struct SessionController {
    engine: Rc<dyn SessionEngine>,
    token_provider: Rc<dyn TokenProvider>,
    media_server_url: Option<String>,
    connect_timeout: Duration,
    inner: Rc<RefCell<Inner>>,
    events: Sender<SessionEvent>,
    // Keeps the channel open while no UI subscriber is attached.
    _keepalive: InactiveReceiver<SessionEvent>,
}

impl SessionController {
    pub fn new(options: SessionControllerOptions) -> Self {
        let (mut tx, rx) = broadcast(crate::constants::EVENT_CHANNEL_CAPACITY);
        tx.set_overflow(true);

        let controller = Self {
            engine: options.engine,
            token_provider: options.token_provider,
            media_server_url: options.media_server_url,
            connect_timeout: options.connect_timeout,
            inner: Rc::new(RefCell::new(Inner::default())),
            events: tx,
            _keepalive: rx.deactivate(),
        };

        let weak = Rc::downgrade(&controller.inner);
        let events = controller.events.clone();
        let id = controller
            .engine
            .add_event_listener(Rc::new(move |event| {
                on_engine_event(&weak, &events, event);
            }));
        controller.inner.borrow_mut().listener = Some(id);

        controller
    }

    /// Subscribe to session events; dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<SessionEvent> {
        self.events.new_receiver()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.borrow();
        SessionSnapshot {
            state: inner.state,
            connecting: inner.connecting,
            error: inner.error.clone(),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.inner.borrow().state
    }

    pub fn is_connecting(&self) -> bool {
        self.inner.borrow().connecting
    }

    /// Run one connect attempt end-to-end: token fetch, configuration check,
    /// engine connect under the deadline, then microphone enable.
    ///
    /// A call while another attempt is in flight is coalesced into a no-op.
    /// The returned error has already been surfaced through the event channel
    /// by the time this resolves.
    pub async fn connect(&self, credential: &JoinCredential) -> Result<(), SessionError> {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                log::warn!("connect() on a disposed controller ignored");
                return Ok(());
            }
            if inner.connecting {
                log::warn!("connect() while an attempt is in flight; coalescing");
                return Ok(());
            }
            inner.connecting = true;
            inner.error.clear();
        }
        self.emit(SessionEvent::ConnectingChanged(true));
        self.emit(SessionEvent::ErrorChanged(String::new()));
        log::info!(
            "Connecting as {} to room {}",
            credential.identity,
            credential.room_name
        );

        // At most one live handle: tear down anything still standing before
        // the new attempt. Teardown failures are logged, never propagated.
        if !self.engine.state().is_disconnected() {
            if let Err(e) = self.engine.disconnect().await {
                log::error!("Teardown of previous session failed: {e}");
            }
        }

        match self.try_connect(credential).await {
            Ok(()) => {
                let changed = {
                    let mut inner = self.inner.borrow_mut();
                    let changed = inner.connecting;
                    inner.connecting = false;
                    changed
                };
                if changed {
                    self.emit(SessionEvent::ConnectingChanged(false));
                }
                Ok(())
            }
            Err(err) => {
                let connecting_changed = {
                    let mut inner = self.inner.borrow_mut();
                    let changed = inner.connecting;
                    inner.connecting = false;
                    inner.error = err.to_string();
                    changed
                };
                if connecting_changed {
                    self.emit(SessionEvent::ConnectingChanged(false));
                }
                self.emit(SessionEvent::ErrorChanged(err.to_string()));

                // Cleanup must not fail the outer failure path.
                if !self.engine.state().is_disconnected() {
                    if let Err(e) = self.engine.disconnect().await {
                        log::error!("Cleanup disconnect failed: {e}");
                    }
                }
                Err(err)
            }
        }
    }

    async fn try_connect(&self, credential: &JoinCredential) -> Result<(), SessionError> {
        let token = self.token_provider.fetch_token(credential).await?;

        let url = self.media_server_url.clone().ok_or_else(|| {
            SessionError::Configuration("media server URL is not configured".to_string())
        })?;

        let attempt = self.engine.connect(&url, &token);
        let deadline = platform::sleep(self.connect_timeout);
        pin_mut!(attempt);
        pin_mut!(deadline);
        match select(attempt, deadline).await {
            Either::Left((Ok(()), _)) => {}
            Either::Left((Err(e), _)) => return Err(SessionError::EngineConnect(e)),
            Either::Right(((), _abandoned)) => {
                // First settlement wins. The engine call keeps running under
                // the hood; the cleanup disconnect issued by connect() cancels
                // it, and a late Connected event is discarded by the listener.
                return Err(SessionError::ConnectTimeout);
            }
        }

        // Best-effort: a microphone failure is surfaced but does not force a
        // disconnect of the session that just came up.
        if self.engine.state() == ConnectionState::Connected {
            if let Err(e) = self.engine.set_microphone_enabled(true).await {
                let err = SessionError::MediaDevice(e);
                log::error!("{err}");
                self.inner.borrow_mut().error = err.to_string();
                self.emit(SessionEvent::ErrorChanged(err.to_string()));
            }
        }
        Ok(())
    }

    /// Tear the session down. No-op when already disconnected; teardown
    /// failures are logged, never returned.
    pub async fn disconnect(&self) {
        if self.engine.state().is_disconnected() {
            return;
        }
        log::info!("Disconnecting session");
        if let Err(e) = self.engine.disconnect().await {
            // The handle is still live as far as the engine is concerned, so
            // the published state must not claim otherwise; a later engine
            // event settles it.
            log::error!("Disconnect failed: {e}");
            return;
        }
        let (state_changed, connecting_changed) = {
            let mut inner = self.inner.borrow_mut();
            let state_changed = inner.state != ConnectionState::Disconnected;
            inner.state = ConnectionState::Disconnected;
            let connecting_changed = inner.connecting;
            inner.connecting = false;
            (state_changed, connecting_changed)
        };
        if state_changed {
            self.emit(SessionEvent::StateChanged(ConnectionState::Disconnected));
        }
        if connecting_changed {
            self.emit(SessionEvent::ConnectingChanged(false));
        }
    }

    /// Release the controller on view teardown: remove the engine listener,
    /// disconnect, and close the event channel. Safe to call at any point in
    /// the lifecycle, including before a connect ever completed.
    pub async fn dispose(&self) {
        let listener = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            inner.listener.take()
        };
        if let Some(id) = listener {
            self.engine.remove_event_listener(id);
        }
        self.disconnect().await;
        self.events.close();
    }

    fn emit(&self, event: SessionEvent) {
        let _ = self.events.try_broadcast(event);
    }
}

/// Applies one engine event to the controller state and republishes it.
///
/// Runs from the engine's listener, so it only holds the `RefCell` borrow for
/// the state mutation itself and uses `try_borrow_mut` in case the engine
/// fires re-entrantly.
fn on_engine_event(inner: &Weak<RefCell<Inner>>, events: &Sender<SessionEvent>, event: EngineEvent) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    let emit = |event: SessionEvent| {
        let _ = events.try_broadcast(event);
    };

    let Ok(mut inner) = inner.try_borrow_mut() else {
        log::error!("Dropping engine event, controller state is borrowed: {event:?}");
        return;
    };
    if inner.disposed {
        return;
    }

    match event {
        EngineEvent::StateChanged(state) => {
            if state == ConnectionState::Connected
                && !inner.connecting
                && inner.state.is_disconnected()
            {
                // Late success of an attempt that already lost the deadline
                // race; the decision was made, discard it.
                log::warn!("Discarding engine connect result for an abandoned attempt");
                return;
            }
            if inner.state != state {
                inner.state = state;
                emit(SessionEvent::StateChanged(state));
            }
            let connecting = match state {
                ConnectionState::Reconnecting | ConnectionState::Connecting => true,
                ConnectionState::Connected
                | ConnectionState::Disconnected
                | ConnectionState::DisconnectedByError => false,
            };
            if inner.connecting != connecting {
                inner.connecting = connecting;
                emit(SessionEvent::ConnectingChanged(connecting));
            }
        }
        EngineEvent::Disconnected { reason } => {
            let state = match &reason {
                Some(_) => ConnectionState::DisconnectedByError,
                None => ConnectionState::Disconnected,
            };
            if inner.state != state {
                inner.state = state;
                emit(SessionEvent::StateChanged(state));
            }
            if inner.connecting {
                inner.connecting = false;
                emit(SessionEvent::ConnectingChanged(false));
            }
            if let Some(reason) = reason {
                let err = SessionError::EngineRuntime(reason);
                inner.error = err.to_string();
                emit(SessionEvent::ErrorChanged(err.to_string()));
            }
        }
        EngineEvent::SignalConnected => {
            log::debug!("Signal connection established");
        }
        EngineEvent::Reconnecting => {
            if inner.state != ConnectionState::Reconnecting {
                inner.state = ConnectionState::Reconnecting;
                emit(SessionEvent::StateChanged(ConnectionState::Reconnecting));
            }
            if !inner.connecting {
                inner.connecting = true;
                emit(SessionEvent::ConnectingChanged(true));
            }
        }
        EngineEvent::Reconnected => {
            if inner.state != ConnectionState::Connected {
                inner.state = ConnectionState::Connected;
                emit(SessionEvent::StateChanged(ConnectionState::Connected));
            }
            if inner.connecting {
                inner.connecting = false;
                emit(SessionEvent::ConnectingChanged(false));
            }
        }
        EngineEvent::RoomMetadataChanged(metadata) => {
            emit(SessionEvent::RoomMetadataChanged(metadata));
        }
        EngineEvent::ConnectionQualityChanged { participant, quality } => {
            emit(SessionEvent::ConnectionQualityChanged { participant, quality });
        }
        EngineEvent::MediaDevicesError(message) => {
            let err = SessionError::MediaDevice(message);
            emit(SessionEvent::MediaDeviceAlert(err.to_string()));
        }
        EngineEvent::TranscriptionReceived {
            participant,
            text,
            is_final,
        } => {
            emit(SessionEvent::TranscriptSegment {
                participant,
                text,
                is_final,
            });
        }
        EngineEvent::Error(message) => {
            let err = SessionError::EngineRuntime(message);
            log::error!("{err}");
            inner.error = err.to_string();
            emit(SessionEvent::ErrorChanged(err.to_string()));
        }
    }
}
