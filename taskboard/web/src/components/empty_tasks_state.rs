use dioxus::prelude::*;

/// Shown in place of the list when there are no tasks
#[component]
pub fn EmptyTasksState() -> Element {
    rsx! {
        div { class: "empty-state",
            p { "No tasks yet. Add one above." }
        }
    }
}
