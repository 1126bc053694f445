use dioxus::prelude::*;

const FETCHING_TASKS: &str = "Fetching your tasks...";

/// Shown in place of the list until the first `GET /tasks` settles.
#[component]
pub fn LoadingSpinner(#[props(default = FETCHING_TASKS.to_string())] message: String) -> Element {
    rsx! {
        section { class: "loading", role: "status",
            span { class: "spinner" }
            p { class: "muted", "{message}" }
        }
    }
}
