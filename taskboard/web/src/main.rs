use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use taskboard_core::{ClientConfig, HttpTaskApi};
use tracing::warn;

mod components;
mod views;

use views::{NotFound, Tasks};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Tasks {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../Taskboard.toml");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Root component. Provides the backend client to every view and mounts the router.
#[component]
fn App() -> Element {
    use_context_provider(|| HttpTaskApi::new(&load_config()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

fn load_config() -> ClientConfig {
    ClientConfig::load(CONFIG_TOML).unwrap_or_else(|err| {
        warn!("Invalid configuration, using defaults: {err:#}");
        ClientConfig::default()
    })
}
