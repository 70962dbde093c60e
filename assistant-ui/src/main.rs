// SPDX-License-Identifier: MIT OR Apache-2.0

use assistant_ui::app::AppRoot;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("could not initialize logger");
    yew::Renderer::<AppRoot>::new().render();
}
