use dioxus::prelude::*;

use crate::client::{
    component::Modal,
    controller::MergeProposal,
    model::form::StudentForm,
};

/// Add/edit form. Which mode is shown depends on whether the form carries an id.
#[component]
pub fn StudentFormModal(
    show: Signal<bool>,
    mut values: Signal<StudentForm>,
    is_submitting: bool,
    on_submit: EventHandler<()>,
) -> Element {
    let is_edit = values.read().is_edit();
    let (title, action, pending) = if is_edit {
        ("Edit Student", "Update", "Updating...")
    } else {
        ("Add Student", "Add", "Adding...")
    };
    let fields = values();

    rsx!(
        Modal {
            show,
            title: title.to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: move |evt: Event<FormData>| {
                    evt.prevent_default();
                    on_submit.call(());
                },

                div {
                    class: "form-control",
                    label { class: "label", r#for: "name", "Name" }
                    input {
                        id: "name",
                        r#type: "text",
                        class: "input w-full",
                        required: true,
                        value: "{fields.name}",
                        disabled: is_submitting,
                        oninput: move |evt| values.write().name = evt.value(),
                    }
                }
                div {
                    class: "form-control",
                    label { class: "label", r#for: "subject", "Subject" }
                    input {
                        id: "subject",
                        r#type: "text",
                        class: "input w-full",
                        required: true,
                        value: "{fields.subject}",
                        disabled: is_submitting,
                        oninput: move |evt| values.write().subject = evt.value(),
                    }
                }
                div {
                    class: "form-control",
                    label { class: "label", r#for: "marks", "Marks" }
                    input {
                        id: "marks",
                        r#type: "number",
                        class: "input w-full",
                        required: true,
                        value: "{fields.marks}",
                        disabled: is_submitting,
                        oninput: move |evt| values.write().marks = evt.value(),
                    }
                }

                div {
                    class: "modal-action",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting,
                        if is_submitting {
                            span { class: "loading loading-spinner loading-sm" }
                            "{pending}"
                        } else {
                            "{action}"
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn MergeSummary(proposal: MergeProposal) -> Element {
    let existing = &proposal.existing;

    rsx!(
        div {
            class: "merge-summary",
            p { "Found existing student record:" }
            dl {
                dt { "Name" }
                dd { "{existing.name}" }
                dt { "Subject" }
                dd { "{existing.subject}" }
                dt { "Current Marks" }
                dd { "{existing.marks}" }
                dt { "New marks to add" }
                dd { "{proposal.added_marks}" }
                dt { "Total after update will be" }
                dd { class: "font-bold", "{proposal.total_marks}" }
            }
            p { "Do you want to update the marks?" }
        }
    )
}
