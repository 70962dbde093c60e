// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Component tests for the TranscriptPanel.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use assistant_ui::components::transcript::{TranscriptLine, TranscriptPanel};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn lines() -> Vec<TranscriptLine> {
    vec![
        TranscriptLine {
            participant: "agent".to_string(),
            text: "Hello, how can I help?".to_string(),
            is_final: true,
        },
        TranscriptLine {
            participant: "guest".to_string(),
            text: "What's the wea".to_string(),
            is_final: false,
        },
    ]
}

#[wasm_bindgen_test]
async fn panel_renders_speakers_and_text() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <TranscriptPanel lines={lines()} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("agent:"), "speaker label missing");
    assert!(text.contains("Hello, how can I help?"), "final text missing");
    assert!(text.contains("What's the wea"), "interim text missing");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn interim_lines_carry_the_interim_class() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <TranscriptPanel lines={lines()} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let rows = mount.query_selector_all(".transcript-line").unwrap();
    assert_eq!(rows.length(), 2);

    let interim = mount.query_selector_all(".transcript-line.interim").unwrap();
    assert_eq!(interim.length(), 1, "exactly one interim line expected");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn empty_transcript_shows_placeholder() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <TranscriptPanel lines={Vec::<TranscriptLine>::new()} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("No transcript yet."), "placeholder missing");

    cleanup(&mount);
}
