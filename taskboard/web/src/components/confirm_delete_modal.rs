use dioxus::prelude::*;
use taskboard_core::DialogDecision;

/// Blocking confirmation shown before a task is deleted
#[component]
pub fn ConfirmDeleteModal(task_name: String, on_close: EventHandler<DialogDecision<()>>) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(DialogDecision::Cancelled),

            div {
                class: "modal",
                role: "alertdialog",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "modal-title", "Are you sure?" }
                p { class: "muted", "\"{task_name}\" will be deleted. This cannot be undone." }

                div { class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "button button-danger",
                        onclick: move |_| on_close.call(DialogDecision::Confirmed(())),
                        "Yes, delete it"
                    }
                    button {
                        r#type: "button",
                        class: "button button-secondary",
                        onclick: move |_| on_close.call(DialogDecision::Cancelled),
                        "Cancel"
                    }
                }
            }
        }
    }
}
