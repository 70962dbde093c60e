// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shown instead of the app when `window.__APP_CONFIG` is missing or broken.

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="error-container">
            <h3>{ "Configuration error" }</h3>
            <p class="error-message">{ props.message.clone() }</p>
            <p>{ "Check the __APP_CONFIG object injected by the hosting page." }</p>
        </div>
    }
}
