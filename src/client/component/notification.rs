use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCircleCheck, FaCircleExclamation},
    Icon,
};

use crate::client::{
    constant::NOTIFICATION_DURATION_MS,
    model::notification::{Notice, Notifications},
};

/// Pushes a notice onto the shared stack and removes it again once
/// `NOTIFICATION_DURATION_MS` has elapsed.
pub fn show_notice(mut notifications: Signal<Notifications>, notice: Notice) {
    let id = notifications.write().push(notice);

    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(NOTIFICATION_DURATION_MS).await;
        notifications.write().dismiss(id);
    });
}

#[component]
pub fn NotificationStack() -> Element {
    let notifications = use_context::<Signal<Notifications>>();
    let items: Vec<(u64, Notice)> = notifications.read().iter().cloned().collect();

    rsx!(
        div {
            class: "toast",
            for (id, notice) in items {
                div {
                    key: "{id}",
                    class: if notice.is_error() { "alert alert-error" } else { "alert alert-success" },
                    if notice.is_error() {
                        Icon { width: 16, height: 16, icon: FaCircleExclamation }
                    } else {
                        Icon { width: 16, height: 16, icon: FaCircleCheck }
                    }
                    span { "{notice.message}" }
                }
            }
        }
    )
}
