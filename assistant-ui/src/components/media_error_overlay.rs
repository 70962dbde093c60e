// SPDX-License-Identifier: MIT OR Apache-2.0

//! Blocking overlay for device failures reported mid-session.
//!
//! A microphone or camera error after a successful connect is not a failed
//! connect call, so it gets a modal notification instead of the inline error
//! line.

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct MediaErrorOverlayProps {
    /// The message to display (e.g. "Media device error: permission denied").
    pub message: String,
    pub on_dismiss: Callback<MouseEvent>,
}

#[function_component(MediaErrorOverlay)]
pub fn media_error_overlay(props: &MediaErrorOverlayProps) -> Html {
    html! {
        <div class="glass-backdrop media-error-overlay" style="z-index: 9999;">
            <div class="card" style="width: 420px; text-align: center;">
                <h4 style="margin-top: 0;">{ "Media Device Problem" }</h4>
                <p class="media-error-message" style="margin: 1.5rem 0;">
                    { &props.message }
                </p>
                <button class="btn-primary media-error-dismiss-btn" onclick={props.on_dismiss.clone()}>
                    { "Dismiss" }
                </button>
            </div>
        </div>
    }
}
