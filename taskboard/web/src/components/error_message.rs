use dioxus::prelude::*;

/// An error message component for displaying failed requests
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "error-message", role: "alert",
            p { "{message}" }
        }
    }
}
