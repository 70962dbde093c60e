// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Component tests for the MediaErrorOverlay.
//
// Verifies that the overlay renders the heading, the message prop, and a
// dismiss button that fires the callback.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use support::{cleanup, create_mount_point};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::platform::time::sleep;
use yew::prelude::*;

use assistant_ui::components::media_error_overlay::MediaErrorOverlay;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn overlay_renders_heading_and_message() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <MediaErrorOverlay
                message={"Media device error: permission denied"}
                on_dismiss={Callback::noop()}
            />
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(
        text.contains("Media Device Problem"),
        "overlay heading missing"
    );
    assert!(
        text.contains("Media device error: permission denied"),
        "overlay should display the message prop"
    );

    // The root element should be the glass backdrop.
    assert!(
        mount
            .query_selector(".glass-backdrop.media-error-overlay")
            .unwrap()
            .is_some(),
        "backdrop missing"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn dismiss_button_fires_the_callback() {
    #[derive(Properties, PartialEq)]
    struct WrapperProps {
        on_dismiss: Callback<MouseEvent>,
    }

    #[function_component(Wrapper)]
    fn wrapper(props: &WrapperProps) -> Html {
        html! {
            <MediaErrorOverlay
                message={"Camera unplugged."}
                on_dismiss={props.on_dismiss.clone()}
            />
        }
    }

    let dismissed = Rc::new(Cell::new(false));
    let on_dismiss = {
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| dismissed.set(true))
    };

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), WrapperProps { on_dismiss })
        .render();
    sleep(Duration::ZERO).await;

    let button = mount
        .query_selector(".media-error-dismiss-btn")
        .unwrap()
        .expect("dismiss button should be rendered")
        .unchecked_into::<HtmlElement>();
    assert_eq!(button.text_content().unwrap_or_default(), "Dismiss");

    button.click();
    sleep(Duration::ZERO).await;

    assert!(dismissed.get(), "clicking dismiss should fire the callback");

    cleanup(&mount);
}
