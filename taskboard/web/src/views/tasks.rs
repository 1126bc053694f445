use crate::components::{
    ConfirmDeleteModal, EditTaskModal, EmptyTasksState, ErrorMessage, Header, LoadingSpinner,
    NewTaskForm, TaskCards, Toast,
};
use chrono::Local;
use dioxus::prelude::*;
use taskboard_core::actions::{self, ActionError};
use taskboard_core::{
    Change, DialogDecision, HttpTaskApi, ListView, Notices, Outcome, Task, TaskForm, TaskId,
    TaskList,
};
use tracing::error;

/// The task page: creation form, task list and the edit / delete dialogs.
#[component]
pub fn Tasks() -> Element {
    let api = use_context::<HttpTaskApi>();
    let mut tasks = use_signal(TaskList::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let action_error = use_signal(|| None::<String>);
    let mut editing = use_signal(|| None::<Task>);
    let mut deleting = use_signal(|| None::<Task>);
    let mut notices = use_signal(Notices::new);

    // Initial load of the tasks
    let load_api = api.clone();
    use_effect(move || {
        let api = load_api.clone();
        spawn(async move {
            match actions::load_tasks(&api).await {
                Ok(list) => tasks.set(list),
                Err(e) => {
                    error!("Failed to load tasks: {e}");
                    load_error.set(Some(format!("Failed to load tasks: {e}")));
                }
            }
            loading.set(false);
        });
    });

    let create_api = api.clone();
    let handle_create = move |form: TaskForm| {
        let api = create_api.clone();
        spawn(async move {
            match actions::create_task(&api, &form, &Local).await {
                Ok(change) => apply(tasks, action_error, change),
                Err(e) => report(action_error, "Failed to create task", e),
            }
        });
    };

    let handle_edit_request = move |id: TaskId| {
        let task = tasks.peek().get(&id).cloned();
        editing.set(task);
    };

    let edit_api = api.clone();
    let handle_edit_close = move |decision: DialogDecision<TaskForm>| {
        let Some(task) = editing.take() else {
            return;
        };
        let api = edit_api.clone();
        spawn(async move {
            match actions::edit_task(&api, &task.id, decision, &Local).await {
                Ok(Outcome::Applied(change)) => apply(tasks, action_error, change),
                Ok(Outcome::Cancelled) => {}
                Err(e) => report(action_error, "Failed to update task", e),
            }
        });
    };

    let handle_delete_request = move |id: TaskId| {
        let task = tasks.peek().get(&id).cloned();
        deleting.set(task);
    };

    let delete_api = api.clone();
    let handle_delete_close = move |decision: DialogDecision<()>| {
        let Some(task) = deleting.take() else {
            return;
        };
        let api = delete_api.clone();
        spawn(async move {
            match actions::delete_task(&api, &task.id, decision).await {
                Ok(Outcome::Applied(change)) => {
                    apply(tasks, action_error, change);
                    notices.write().show("Task deleted");
                }
                Ok(Outcome::Cancelled) => {}
                Err(e) => report(action_error, "Failed to delete task", e),
            }
        });
    };

    let list_view = tasks.read().view(loading(), &Local);

    rsx! {
        main { class: "page",
            div { class: "container",
                Header {}
                NewTaskForm { on_submit: handle_create }

                if let Some(err) = action_error() {
                    ErrorMessage { message: err }
                }

                if let Some(err) = load_error() {
                    ErrorMessage { message: err }
                }

                {match list_view {
                    ListView::Loading => rsx! { LoadingSpinner {} },
                    ListView::Empty => rsx! { EmptyTasksState {} },
                    ListView::Rows(rows) => rsx! {
                        TaskCards { rows, on_edit: handle_edit_request, on_delete: handle_delete_request }
                    },
                }}
            }

            if let Some(task) = editing() {
                EditTaskModal { key: "{task.id}", task, on_close: handle_edit_close }
            }

            if let Some(task) = deleting() {
                ConfirmDeleteModal { task_name: task.task_name, on_close: handle_delete_close }
            }

            if let Some(notice) = notices.read().current().cloned() {
                Toast {
                    key: "{notice.id}",
                    notice,
                    on_dismiss: move |id| notices.write().dismiss(id),
                }
            }
        }
    }
}

fn apply(mut tasks: Signal<TaskList>, mut action_error: Signal<Option<String>>, change: Change) {
    let next = tasks.peek().clone().apply(change);
    tasks.set(next);
    action_error.set(None);
}

fn report(mut action_error: Signal<Option<String>>, context: &str, err: ActionError) {
    error!("{context}: {err}");
    action_error.set(Some(format!("{context}: {err}")));
}
