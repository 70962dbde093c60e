// SPDX-License-Identifier: MIT OR Apache-2.0

//! Production [`SessionEngine`] backed by the LiveKit browser SDK.
//!
//! The SDK is loaded as a UMD bundle exposing the `LivekitClient` global;
//! everything here goes through `wasm_bindgen` extern declarations, so none
//! of the engine itself (reconnection, track negotiation, codecs) is
//! reimplemented. Remote tracks are attached to a container element by DOM
//! id, which keeps the engine free of any UI-framework types.
//!
//! On non-wasm targets this module still compiles; the imported functions
//! panic if called, and the native test suite uses a fake engine instead.

use crate::engine::{EngineEvent, EngineEventHandler, ListenerId, SessionEngine};
use crate::state::ConnectionState;
use futures::future::LocalBoxFuture;
use js_sys::{Array, Object, Reflect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = LivekitClient)]
    type Room;

    #[wasm_bindgen(constructor, js_namespace = LivekitClient, js_class = "Room")]
    fn new(options: &JsValue) -> Room;

    #[wasm_bindgen(method)]
    fn connect(this: &Room, url: &str, token: &str, options: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    fn disconnect(this: &Room) -> js_sys::Promise;

    #[wasm_bindgen(method, getter)]
    fn state(this: &Room) -> String;

    #[wasm_bindgen(method, getter, js_name = localParticipant)]
    fn local_participant(this: &Room) -> LocalParticipant;

    #[wasm_bindgen(method)]
    fn on(this: &Room, event: &str, callback: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn off(this: &Room, event: &str, callback: &js_sys::Function);

    #[wasm_bindgen(js_namespace = LivekitClient)]
    type LocalParticipant;

    #[wasm_bindgen(method, js_name = setMicrophoneEnabled)]
    fn set_microphone_enabled(this: &LocalParticipant, enabled: bool) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = LivekitClient)]
    type RemoteTrack;

    #[wasm_bindgen(method)]
    fn attach(this: &RemoteTrack) -> web_sys::HtmlMediaElement;

    #[wasm_bindgen(method)]
    fn detach(this: &RemoteTrack) -> Array;
}

// RoomEvent string values of the LiveKit client.
const EV_CONNECTION_STATE_CHANGED: &str = "connectionStateChanged";
const EV_DISCONNECTED: &str = "disconnected";
const EV_SIGNAL_CONNECTED: &str = "signalConnected";
const EV_RECONNECTING: &str = "reconnecting";
const EV_RECONNECTED: &str = "reconnected";
const EV_ROOM_METADATA_CHANGED: &str = "roomMetadataChanged";
const EV_CONNECTION_QUALITY_CHANGED: &str = "connectionQualityChanged";
const EV_MEDIA_DEVICES_ERROR: &str = "mediaDevicesError";
const EV_TRANSCRIPTION_RECEIVED: &str = "transcriptionReceived";
const EV_TRACK_SUBSCRIBED: &str = "trackSubscribed";
const EV_TRACK_UNSUBSCRIBED: &str = "trackUnsubscribed";

/// DisconnectReason.CLIENT_INITIATED in the LiveKit protocol.
const REASON_CLIENT_INITIATED: f64 = 1.0;

type HandlerList = Rc<RefCell<Vec<(ListenerId, EngineEventHandler)>>>;

/// One LiveKit room, held for the lifetime of the page view.
///
/// The room is constructed with the SDK's default reconnect policy, which
/// retries a bounded number of times with growing delays; the controller only
/// observes those retries through `reconnecting`/`reconnected` events.
pub struct LivekitEngine {
    room: Room,
    handlers: HandlerList,
    next_listener_id: Cell<usize>,
    // Keeps the JS closures alive for the room's lifetime; every `on` gets
    // its matching `off` in Drop.
    bindings: Vec<(&'static str, Closure<dyn FnMut(JsValue, JsValue)>)>,
}

impl LivekitEngine {
    /// `remote_media_container_id` is the DOM id of the element remote audio
    /// and video elements get appended to as the agent's tracks arrive.
    pub fn new(remote_media_container_id: &str) -> Self {
        let room_options = Object::new();
        let _ = Reflect::set(&room_options, &"adaptiveStream".into(), &JsValue::TRUE);
        let _ = Reflect::set(&room_options, &"dynacast".into(), &JsValue::TRUE);

        let mut engine = Self {
            room: Room::new(&room_options.into()),
            handlers: Rc::new(RefCell::new(Vec::new())),
            next_listener_id: Cell::new(0),
            bindings: Vec::new(),
        };
        engine.wire_room_events(remote_media_container_id.to_string());
        engine
    }

    fn wire_room_events(&mut self, container_id: String) {
        let h = self.handlers.clone();
        self.hook(EV_CONNECTION_STATE_CHANGED, move |state, _| {
            let raw = state.as_string().unwrap_or_default();
            dispatch(&h, EngineEvent::StateChanged(parse_state(&raw)));
        });

        let h = self.handlers.clone();
        self.hook(EV_DISCONNECTED, move |reason, _| {
            dispatch(
                &h,
                EngineEvent::Disconnected {
                    reason: disconnect_error_reason(reason.as_f64()),
                },
            );
        });

        let h = self.handlers.clone();
        self.hook(EV_SIGNAL_CONNECTED, move |_, _| {
            dispatch(&h, EngineEvent::SignalConnected);
        });

        let h = self.handlers.clone();
        self.hook(EV_RECONNECTING, move |_, _| {
            dispatch(&h, EngineEvent::Reconnecting);
        });

        let h = self.handlers.clone();
        self.hook(EV_RECONNECTED, move |_, _| {
            dispatch(&h, EngineEvent::Reconnected);
        });

        let h = self.handlers.clone();
        self.hook(EV_ROOM_METADATA_CHANGED, move |metadata, _| {
            dispatch(
                &h,
                EngineEvent::RoomMetadataChanged(metadata.as_string().unwrap_or_default()),
            );
        });

        let h = self.handlers.clone();
        self.hook(EV_CONNECTION_QUALITY_CHANGED, move |quality, participant| {
            dispatch(
                &h,
                EngineEvent::ConnectionQualityChanged {
                    participant: participant_identity(&participant),
                    quality: quality.as_string().unwrap_or_default(),
                },
            );
        });

        let h = self.handlers.clone();
        self.hook(EV_MEDIA_DEVICES_ERROR, move |error, _| {
            dispatch(&h, EngineEvent::MediaDevicesError(js_error_message(&error)));
        });

        let h = self.handlers.clone();
        self.hook(EV_TRANSCRIPTION_RECEIVED, move |segments, participant| {
            let participant = participant_identity(&participant);
            for segment in Array::from(&segments).iter() {
                let text = Reflect::get(&segment, &"text".into())
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default();
                let is_final = Reflect::get(&segment, &"final".into())
                    .ok()
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false);
                dispatch(
                    &h,
                    EngineEvent::TranscriptionReceived {
                        participant: participant.clone(),
                        text,
                        is_final,
                    },
                );
            }
        });

        let container = container_id.clone();
        self.hook(EV_TRACK_SUBSCRIBED, move |track, _| {
            let track: RemoteTrack = track.unchecked_into();
            let element = track.attach();
            element.set_autoplay(true);
            match document_element(&container) {
                Some(parent) => {
                    let _ = parent.append_child(&element);
                }
                None => log::error!("Remote media container #{container} not found"),
            }
        });

        self.hook(EV_TRACK_UNSUBSCRIBED, move |track, _| {
            let track: RemoteTrack = track.unchecked_into();
            for element in track.detach().iter() {
                let element: web_sys::Element = element.unchecked_into();
                element.remove();
            }
        });
    }

    fn hook(&mut self, event: &'static str, f: impl FnMut(JsValue, JsValue) + 'static) {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(JsValue, JsValue)>);
        self.room.on(event, closure.as_ref().unchecked_ref());
        self.bindings.push((event, closure));
    }
}

impl SessionEngine for LivekitEngine {
    fn connect<'a>(
        &'a self,
        url: &'a str,
        token: &'a str,
    ) -> LocalBoxFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let options = Object::new();
            let _ = Reflect::set(&options, &"maxRetries".into(), &3.into());
            JsFuture::from(self.room.connect(url, token, &options.into()))
                .await
                .map(|_| ())
                .map_err(|e| js_error_message(&e))
        })
    }

    fn disconnect(&self) -> LocalBoxFuture<'_, Result<(), String>> {
        Box::pin(async move {
            JsFuture::from(self.room.disconnect())
                .await
                .map(|_| ())
                .map_err(|e| js_error_message(&e))
        })
    }

    fn set_microphone_enabled(&self, enabled: bool) -> LocalBoxFuture<'_, Result<(), String>> {
        Box::pin(async move {
            JsFuture::from(self.room.local_participant().set_microphone_enabled(enabled))
                .await
                .map(|_| ())
                .map_err(|e| js_error_message(&e))
        })
    }

    fn state(&self) -> ConnectionState {
        parse_state(&self.room.state())
    }

    fn add_event_listener(&self, handler: EngineEventHandler) -> ListenerId {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    fn remove_event_listener(&self, id: ListenerId) {
        self.handlers.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}

impl Drop for LivekitEngine {
    fn drop(&mut self) {
        for (event, closure) in &self.bindings {
            self.room.off(event, closure.as_ref().unchecked_ref());
        }
    }
}

fn dispatch(handlers: &HandlerList, event: EngineEvent) {
    // Clone out before calling so a handler may add or remove listeners.
    let current: Vec<EngineEventHandler> =
        handlers.borrow().iter().map(|(_, h)| h.clone()).collect();
    for handler in current {
        handler(event.clone());
    }
}

fn parse_state(raw: &str) -> ConnectionState {
    match raw {
        "connecting" => ConnectionState::Connecting,
        "connected" => ConnectionState::Connected,
        "reconnecting" | "signalReconnecting" => ConnectionState::Reconnecting,
        _ => ConnectionState::Disconnected,
    }
}

/// A numeric DisconnectReason other than CLIENT_INITIATED counts as an error
/// teardown; a clean local disconnect maps to `None`.
fn disconnect_error_reason(reason: Option<f64>) -> Option<String> {
    let code = reason?;
    if code == REASON_CLIENT_INITIATED {
        return None;
    }
    Some(match code as u32 {
        2 => "another participant joined with the same identity".to_string(),
        3 => "the media server is shutting down".to_string(),
        4 => "removed from the room".to_string(),
        5 => "the room was deleted".to_string(),
        7 => "joining the room failed".to_string(),
        code => format!("connection closed (reason code {code})"),
    })
}

fn participant_identity(participant: &JsValue) -> String {
    Reflect::get(participant, &"identity".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}

fn document_element(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}
