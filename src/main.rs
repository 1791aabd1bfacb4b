mod animator;
mod catalog;
mod config;
mod error;
mod landing;
mod primitives;
mod schedule;
mod stage;

use dioxus::prelude::*;
use landing::Landing;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
