// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application root: runtime-config guard, context provider and route switch.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::config_error::ConfigError;
use crate::components::session::SessionPage;
use crate::constants::{app_config, DEFAULT_IDENTITY};
use crate::context::UsernameCtx;
use crate::pages::home::Home;
use crate::routing::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Session { room } => html! { <SessionRoute {room} /> },
        Route::NotFound => html! { <h1>{ "404" }</h1> },
    }
}

#[function_component(AppRoot)]
pub fn app_root() -> Html {
    let username_state = use_state(|| None::<String>);
    match app_config() {
        Ok(_) => html! {
            <ContextProvider<UsernameCtx> context={username_state.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<UsernameCtx>>
        },
        Err(message) => html! { <ConfigError {message} /> },
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct SessionRouteProps {
    pub room: String,
}

/// Bridges the route to the session page: resolves the identity from context
/// (falling back to the default for deep links) and hands the runtime config
/// over as plain props, so the page itself never touches `window`.
#[function_component(SessionRoute)]
pub fn session_route(props: &SessionRouteProps) -> Html {
    let username = use_context::<UsernameCtx>().expect("UsernameCtx provided by AppRoot");
    let identity = (*username)
        .clone()
        .unwrap_or_else(|| DEFAULT_IDENTITY.to_string());

    match app_config() {
        Ok(config) => html! {
            <SessionPage
                room={props.room.clone()}
                {identity}
                api_base_url={config.api_base_url}
                media_server_url={config.media_server_url}
            />
        },
        Err(message) => html! { <ConfigError {message} /> },
    }
}
