use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div { class: "page centered",
            div { class: "not-found",
                h1 { class: "not-found-code", "404" }
                h2 { class: "not-found-title", "Page Not Found" }
                p { class: "muted", "There is nothing at /{path}." }
                Link { to: "/", class: "button button-primary", "Back to tasks" }
            }
        }
    }
}
