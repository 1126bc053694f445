use dioxus::prelude::*;
use taskboard_core::Priority;
use tracing::warn;

/// Select box over every [`Priority`], with `value` pre-selected
#[component]
pub fn PrioritySelect(value: Priority, on_change: EventHandler<Priority>) -> Element {
    let handle_change = move |evt: FormEvent| match evt.value().parse::<Priority>() {
        Ok(priority) => on_change.call(priority),
        Err(err) => warn!("Ignoring priority selection: {err}"),
    };

    rsx! {
        select { class: "input", value: "{value}", onchange: handle_change,
            for priority in Priority::ALL {
                option {
                    key: "{priority}",
                    value: "{priority}",
                    selected: priority == value,
                    "{priority}"
                }
            }
        }
    }
}
