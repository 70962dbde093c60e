// SPDX-License-Identifier: MIT OR Apache-2.0

use assistant_client::ConnectionState;
use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct SessionControlsProps {
    pub state: ConnectionState,
    pub connecting: bool,
    pub on_connect: Callback<MouseEvent>,
    pub on_disconnect: Callback<MouseEvent>,
}

/// Connect/disconnect buttons plus a status badge.
///
/// Connect is disabled while a session attempt is in flight or already live;
/// disconnect is disabled only when there is nothing to tear down.
#[function_component(SessionControls)]
pub fn session_controls(props: &SessionControlsProps) -> Html {
    let connect_disabled = props.connecting || !props.state.is_disconnected();
    let disconnect_disabled = props.state.is_disconnected() && !props.connecting;

    let badge_class = match props.state {
        ConnectionState::Connected => "status-badge connected",
        ConnectionState::Reconnecting => "status-badge reconnecting",
        ConnectionState::DisconnectedByError => "status-badge errored",
        _ if props.connecting => "status-badge connecting",
        _ => "status-badge",
    };

    html! {
        <div class="session-controls">
            <span class={badge_class}>{ props.state.to_string() }</span>
            <button
                class="connect-button"
                disabled={connect_disabled}
                onclick={props.on_connect.clone()}
            >
                { "Connect" }
            </button>
            <button
                class="disconnect-button"
                disabled={disconnect_disabled}
                onclick={props.on_disconnect.clone()}
            >
                { "Disconnect" }
            </button>
        </div>
    }
}
