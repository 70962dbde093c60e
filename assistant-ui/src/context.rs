// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers shared across the component tree.

use yew::prelude::*;

/// Identity the user entered on the home page.
///
/// `UseStateHandle<Option<String>>` allows both read-only access (via deref)
/// and mutation by calling `.set(Some("new_name".into()))`.
pub type UsernameCtx = UseStateHandle<Option<String>>;
