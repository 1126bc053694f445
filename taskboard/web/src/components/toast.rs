use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use taskboard_core::Notice;

const DISMISS_AFTER_MS: u32 = 3_000;

/// Short-lived acknowledgment. Dismisses itself, or on click.
///
/// Mount it keyed by `notice.id` so a replacing notice starts its own timer.
#[component]
pub fn Toast(notice: Notice, on_dismiss: EventHandler<u64>) -> Element {
    let id = notice.id;
    use_effect(move || {
        spawn(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            on_dismiss.call(id);
        });
    });

    rsx! {
        div {
            class: "toast",
            role: "status",
            onclick: move |_| on_dismiss.call(id),
            "{notice.message}"
        }
    }
}
