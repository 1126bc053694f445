use super::PrioritySelect;
use dioxus::prelude::*;
use taskboard_core::TaskForm;

/// Form for creating a task.
///
/// Submitting hands the current values to `on_submit`. The fields keep their values
/// afterwards so several similar tasks can be entered quickly.
#[component]
pub fn NewTaskForm(on_submit: EventHandler<TaskForm>) -> Element {
    let mut form = use_signal(TaskForm::default);
    let TaskForm {
        task_name,
        due_date,
        priority,
    } = form();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(form());
    };

    rsx! {
        form { class: "task-form", onsubmit: handle_submit,
            label { class: "label", "Name of Task:" }
            input {
                class: "input",
                r#type: "text",
                placeholder: "Type the name of task",
                value: "{task_name}",
                oninput: move |evt| form.write().task_name = evt.value(),
            }

            div { class: "form-grid",
                div {
                    label { class: "label", "Due date" }
                    input {
                        class: "input",
                        r#type: "date",
                        value: "{due_date}",
                        oninput: move |evt| form.write().due_date = evt.value(),
                    }
                }
                div {
                    label { class: "label", "Priority" }
                    PrioritySelect {
                        value: priority,
                        on_change: move |priority| form.write().priority = priority,
                    }
                }
            }

            input { class: "button button-submit", r#type: "submit", value: "Submit" }
        }
    }
}
