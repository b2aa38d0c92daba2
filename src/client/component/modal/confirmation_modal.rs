use dioxus::prelude::*;

use super::Modal;

/// Yes/no dialog. `on_cancel` fires for the Cancel button only; closing through
/// the backdrop or Escape just hides the dialog.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: Element,
    confirm_text: String,
    confirm_class: String,
    is_processing: bool,
    processing_text: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            {message}
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| {
                        show.set(false);
                        on_cancel.call(());
                    },
                    disabled: is_processing,
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    onclick: move |_| on_confirm.call(()),
                    disabled: is_processing,
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm" }
                        "{processing_text}"
                    } else {
                        "{confirm_text}"
                    }
                }
            }
        }
    )
}
