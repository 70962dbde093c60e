// SPDX-License-Identifier: MIT OR Apache-2.0

//! The live session screen. Owns the [`SessionController`] and mirrors its
//! event stream into component state.

use std::rc::Rc;

use assistant_client::{
    ConnectionState, HttpTokenProvider, JoinCredential, LivekitEngine, SessionController,
    SessionControllerOptions, SessionEngine, SessionEvent, TokenProvider,
    DEFAULT_CONNECT_TIMEOUT,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::media_error_overlay::MediaErrorOverlay;
use crate::components::session_controls::SessionControls;
use crate::components::transcript::{TranscriptLine, TranscriptPanel};
use crate::constants::REMOTE_MEDIA_CONTAINER_ID;

#[derive(Debug)]
pub enum SessionAction {
    Connect,
    Disconnect,
    DismissDeviceAlert,
}

pub enum Msg {
    Action(SessionAction),
    Event(SessionEvent),
}

impl From<SessionAction> for Msg {
    fn from(action: SessionAction) -> Self {
        Msg::Action(action)
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct SessionPageProps {
    pub room: String,
    pub identity: String,
    pub api_base_url: String,
    #[prop_or_default]
    pub media_server_url: Option<String>,
}

pub struct SessionPage {
    controller: SessionController,
    state: ConnectionState,
    connecting: bool,
    error: String,
    device_alert: Option<String>,
    quality: Option<String>,
    room_metadata: Option<String>,
    transcript: Vec<TranscriptLine>,
}

impl SessionPage {
    fn credential(ctx: &Context<Self>) -> JoinCredential {
        JoinCredential {
            identity: ctx.props().identity.clone(),
            room_name: ctx.props().room.clone(),
        }
    }

    fn apply(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::StateChanged(state) => {
                self.state = state;
                true
            }
            SessionEvent::ConnectingChanged(connecting) => {
                self.connecting = connecting;
                true
            }
            SessionEvent::ErrorChanged(error) => {
                self.error = error;
                true
            }
            SessionEvent::MediaDeviceAlert(message) => {
                self.device_alert = Some(message);
                true
            }
            SessionEvent::RoomMetadataChanged(metadata) => {
                self.room_metadata = Some(metadata);
                true
            }
            SessionEvent::ConnectionQualityChanged { quality, .. } => {
                self.quality = Some(quality);
                true
            }
            SessionEvent::TranscriptSegment {
                participant,
                text,
                is_final,
            } => {
                self.push_transcript(participant, text, is_final);
                true
            }
        }
    }

    // Interim segments replace the speaker's previous interim line so the
    // text grows in place instead of stacking up partial duplicates.
    fn push_transcript(&mut self, participant: String, text: String, is_final: bool) {
        if let Some(last) = self.transcript.last_mut() {
            if !last.is_final && last.participant == participant {
                last.text = text;
                last.is_final = is_final;
                return;
            }
        }
        self.transcript.push(TranscriptLine {
            participant,
            text,
            is_final,
        });
    }
}

impl Component for SessionPage {
    type Message = Msg;
    type Properties = SessionPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let engine: Rc<dyn SessionEngine> =
            Rc::new(LivekitEngine::new(REMOTE_MEDIA_CONTAINER_ID));
        let token_provider: Rc<dyn TokenProvider> =
            Rc::new(HttpTokenProvider::new(&ctx.props().api_base_url));
        let controller = SessionController::new(SessionControllerOptions {
            engine,
            token_provider,
            media_server_url: ctx.props().media_server_url.clone(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        });

        let mut events = controller.subscribe();
        let link = ctx.link().clone();
        spawn_local(async move {
            while let Ok(event) = events.recv().await {
                link.send_message(Msg::Event(event));
            }
        });

        Self {
            controller,
            state: ConnectionState::default(),
            connecting: false,
            error: String::new(),
            device_alert: None,
            quality: None,
            room_metadata: None,
            transcript: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Action(SessionAction::Connect) => {
                let controller = self.controller.clone();
                let credential = Self::credential(ctx);
                spawn_local(async move {
                    // Failures surface through the event stream.
                    let _ = controller.connect(&credential).await;
                });
                false
            }
            Msg::Action(SessionAction::Disconnect) => {
                let controller = self.controller.clone();
                spawn_local(async move {
                    controller.disconnect().await;
                });
                false
            }
            Msg::Action(SessionAction::DismissDeviceAlert) => {
                self.device_alert = None;
                true
            }
            Msg::Event(event) => self.apply(event),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        let controller = self.controller.clone();
        spawn_local(async move {
            controller.dispose().await;
        });
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_connect = ctx.link().callback(|_: MouseEvent| SessionAction::Connect);
        let on_disconnect = ctx
            .link()
            .callback(|_: MouseEvent| SessionAction::Disconnect);
        let on_dismiss_alert = ctx
            .link()
            .callback(|_: MouseEvent| SessionAction::DismissDeviceAlert);

        html! {
            <div class="session-page">
                <header class="session-header">
                    <h1>{ ctx.props().room.clone() }</h1>
                    if let Some(quality) = &self.quality {
                        <span class="connection-quality">{ format!("quality: {quality}") }</span>
                    }
                    if let Some(metadata) = &self.room_metadata {
                        <span class="room-metadata">{ metadata.clone() }</span>
                    }
                </header>
                if !self.error.is_empty() {
                    <div class="error-banner">{ self.error.clone() }</div>
                }
                if self.state == ConnectionState::Reconnecting {
                    <div class="reconnecting-banner">{ "Connection lost, reconnecting..." }</div>
                }
                <div id={REMOTE_MEDIA_CONTAINER_ID} class="agent-media"></div>
                <TranscriptPanel lines={self.transcript.clone()} />
                <SessionControls
                    state={self.state}
                    connecting={self.connecting}
                    on_connect={on_connect}
                    on_disconnect={on_disconnect}
                />
                if let Some(message) = &self.device_alert {
                    <MediaErrorOverlay message={message.clone()} on_dismiss={on_dismiss_alert} />
                }
            </div>
        }
    }
}
