use dioxus::prelude::*;
use taskboard_core::{TaskId, TaskRow};

/// Renders every row in order, one card each
#[component]
pub fn TaskCards(
    rows: Vec<TaskRow>,
    on_edit: EventHandler<TaskId>,
    on_delete: EventHandler<TaskId>,
) -> Element {
    rsx! {
        section { class: "task-list",
            for row in rows {
                TaskCard {
                    key: "{row.id}",
                    row: row.clone(),
                    on_edit: on_edit,
                    on_delete: on_delete,
                }
            }
        }
    }
}

/// A single task with its edit and delete actions
#[component]
pub fn TaskCard(
    row: TaskRow,
    on_edit: EventHandler<TaskId>,
    on_delete: EventHandler<TaskId>,
) -> Element {
    let edit_id = row.id.clone();
    let delete_id = row.id.clone();

    rsx! {
        article { class: "task-card",
            p {
                span { class: "field", "Task: " }
                "{row.task_name}"
            }
            p {
                span { class: "field", "Due date: " }
                "{row.due_date}"
            }
            p {
                span { class: "field", "Priority: " }
                "{row.priority}"
            }

            div { class: "task-actions",
                button {
                    class: "icon-button icon-button-edit",
                    title: "Edit task",
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    "✎"
                }
                button {
                    class: "icon-button icon-button-delete",
                    title: "Delete task",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "🗑"
                }
            }
        }
    }
}
