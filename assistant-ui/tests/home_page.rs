// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Integration test for the Home (landing) page.
//
// Verifies that the real Home component renders when window.__APP_CONFIG is
// present. Rather than asserting on every single DOM node, we check a handful
// of landmarks that uniquely identify the page.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, inject_app_config, remove_app_config};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_router::prelude::*;

use assistant_ui::context::UsernameCtx;
use assistant_ui::pages::home::Home;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

// Mirrors AppRoot's context without the route switch, so we always render
// Home regardless of the test-runner's URL path.
#[function_component(HomeTestWrapper)]
fn home_test_wrapper() -> Html {
    let username_state = use_state(|| None::<String>);
    html! {
        <ContextProvider<UsernameCtx> context={username_state.clone()}>
            <BrowserRouter>
                <Home />
            </BrowserRouter>
        </ContextProvider<UsernameCtx>>
    }
}

#[wasm_bindgen_test]
async fn home_page_renders_landmarks() {
    inject_app_config();

    let mount = create_mount_point();
    yew::Renderer::<HomeTestWrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Voice Assistant"), "title missing");
    assert!(text.contains("Join a Session"), "form heading missing");
    assert!(text.contains("Join Session"), "join button missing");

    // The two inputs the user fills in must be present.
    assert!(
        mount.query_selector("#identity").unwrap().is_some(),
        "identity input missing"
    );
    assert!(
        mount.query_selector("#room-name").unwrap().is_some(),
        "room name input missing"
    );

    cleanup(&mount);
    remove_app_config();
}
