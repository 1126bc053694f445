use super::PrioritySelect;
use chrono::Local;
use dioxus::prelude::*;
use taskboard_core::{DialogDecision, Task, TaskForm};

/// Modal for editing a task.
///
/// The dialog owns its form state, pre-filled from `task`, and hands it back through
/// `on_close` when saved. Closing it any other way reports a cancellation.
#[component]
pub fn EditTaskModal(task: Task, on_close: EventHandler<DialogDecision<TaskForm>>) -> Element {
    let mut form = use_signal(|| TaskForm::from_task(&task, &Local));
    let TaskForm {
        task_name,
        due_date,
        priority,
    } = form();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_close.call(DialogDecision::Confirmed(form()));
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(DialogDecision::Cancelled),

            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "modal-title", "Edit task" }

                form { onsubmit: handle_submit,
                    label { class: "label", "Name of Task:" }
                    input {
                        class: "input",
                        r#type: "text",
                        value: "{task_name}",
                        oninput: move |evt| form.write().task_name = evt.value(),
                        autofocus: true,
                    }

                    label { class: "label", "Due date" }
                    input {
                        class: "input",
                        r#type: "date",
                        value: "{due_date}",
                        oninput: move |evt| form.write().due_date = evt.value(),
                    }

                    label { class: "label", "Priority" }
                    PrioritySelect {
                        value: priority,
                        on_change: move |priority| form.write().priority = priority,
                    }

                    div { class: "modal-actions",
                        button { r#type: "submit", class: "button button-primary", "Save" }
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
}
