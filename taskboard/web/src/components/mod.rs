mod confirm_delete_modal;
mod edit_task_modal;
mod empty_tasks_state;
mod error_message;
mod header;
mod loading_spinner;
mod new_task_form;
mod priority_select;
mod task_card;
mod toast;

pub use confirm_delete_modal::ConfirmDeleteModal;
pub use edit_task_modal::EditTaskModal;
pub use empty_tasks_state::EmptyTasksState;
pub use error_message::ErrorMessage;
pub use header::Header;
pub use loading_spinner::LoadingSpinner;
pub use new_task_form::NewTaskForm;
pub use priority_select::PrioritySelect;
pub use task_card::{TaskCard, TaskCards};
pub use toast::Toast;
