// SPDX-License-Identifier: MIT OR Apache-2.0

//! Landing page: the join form asking for identity and room name.
//!
//! This is the input boundary that replaces blocking prompts; empty fields
//! fall back to the fixed defaults before navigation.

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::constants::{DEFAULT_IDENTITY, DEFAULT_ROOM};
use crate::context::UsernameCtx;
use crate::routing::Route;

fn field_or(input: &NodeRef, fallback: &str) -> String {
    let value = input
        .cast::<HtmlInputElement>()
        .map(|i| i.value())
        .unwrap_or_default();
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator().unwrap();
    let username_ctx = use_context::<UsernameCtx>().expect("UsernameCtx provided by AppRoot");
    let identity_ref = use_node_ref();
    let room_ref = use_node_ref();

    let onsubmit = {
        let identity_ref = identity_ref.clone();
        let room_ref = room_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let identity = field_or(&identity_ref, DEFAULT_IDENTITY);
            let room = field_or(&room_ref, DEFAULT_ROOM);
            username_ctx.set(Some(identity));
            navigator.push(&Route::Session { room });
        })
    };

    html! {
        <div class="home-page">
            <div>
                <h1>{ "Voice Assistant" }</h1>
                <p>{ "Talk to the assistant in a real-time room." }</p>
            </div>
            <form {onsubmit}>
                <h3>{ "Join a Session" }</h3>
                <input
                    id="identity"
                    type="text"
                    ref={identity_ref}
                    placeholder={format!("Your name (default: {DEFAULT_IDENTITY})")} />
                <input
                    id="room-name"
                    type="text"
                    ref={room_ref}
                    placeholder={format!("Room (default: {DEFAULT_ROOM})")} />
                <input type="submit" value="Join Session" />
            </form>
        </div>
    }
}
