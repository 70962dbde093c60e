// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application route definitions.
//!
//! Extracted into its own module so that both the binary entry-point and the
//! integration tests can share the same `Route` enum.

use enum_display::EnumDisplay;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug, EnumDisplay)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/session/:room")]
    Session { room: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
