mod modal;
mod table;

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPlus, Icon};

use crate::{
    client::{
        api::HttpStudentApi,
        component::{show_notice, ConfirmationModal, Page},
        controller::{
            ActionReport, DeleteConfirmation, MergeProposal, StudentListController, Submission,
        },
        model::{form::StudentForm, menu::ActionMenu, notification::Notifications},
    },
    model::student::StudentDto,
};

use modal::{MergeSummary, StudentFormModal};
use table::StudentsTable;

fn controller() -> StudentListController<HttpStudentApi> {
    StudentListController::new(HttpStudentApi)
}

/// Replaces the table contents with the reloaded collection and shows the notices.
fn apply_report(
    report: ActionReport,
    mut students: Signal<Option<Vec<StudentDto>>>,
    notifications: Signal<Notifications>,
) {
    if let Some(fresh) = report.students {
        students.set(Some(fresh));
    }
    for notice in report.notices {
        show_notice(notifications, notice);
    }
}

#[component]
pub fn Dashboard() -> Element {
    let notifications = use_context::<Signal<Notifications>>();
    let mut students = use_signal(|| None::<Vec<StudentDto>>);
    let mut menu = use_signal(ActionMenu::default);

    let mut show_form = use_signal(|| false);
    let mut form = use_signal(StudentForm::default);
    let mut is_submitting = use_signal(|| false);

    let mut show_merge = use_signal(|| false);
    let mut pending_merge = use_signal(|| None::<MergeProposal>);
    let mut is_merging = use_signal(|| false);

    let mut show_delete = use_signal(|| false);
    let mut pending_delete = use_signal(|| None::<DeleteConfirmation>);
    let mut is_deleting = use_signal(|| false);

    use_future(move || async move {
        match controller().load_all().await {
            Ok(fresh) => students.set(Some(fresh)),
            Err(notice) => {
                students.set(Some(Vec::new()));
                show_notice(notifications, notice);
            }
        }
    });

    // Closing the form discards whatever was typed
    use_effect(move || {
        if !show_form() {
            form.set(StudentForm::default());
        }
    });

    let on_submit = move |_| {
        let submitted = form();
        is_submitting.set(true);
        spawn(async move {
            match controller().submit(&submitted).await {
                Submission::Finished(report) => {
                    if report.completed {
                        show_form.set(false);
                    }
                    apply_report(report, students, notifications);
                }
                Submission::ConfirmMerge(proposal) => {
                    pending_merge.set(Some(proposal));
                    show_merge.set(true);
                }
            }
            is_submitting.set(false);
        });
    };

    let on_confirm_merge = move |_| {
        let Some(proposal) = pending_merge() else {
            return;
        };
        is_merging.set(true);
        spawn(async move {
            let report = controller().confirm_merge(proposal).await;
            if report.completed {
                show_form.set(false);
            }
            apply_report(report, students, notifications);
            pending_merge.set(None);
            show_merge.set(false);
            is_merging.set(false);
        });
    };

    let on_edit = move |id: i32| {
        spawn(async move {
            match controller().load_for_edit(id).await {
                Ok(prefilled) => {
                    form.set(prefilled);
                    show_form.set(true);
                }
                Err(notice) => show_notice(notifications, notice),
            }
        });
    };

    let on_delete = move |id: i32| {
        pending_delete.set(Some(controller().request_delete(id)));
        show_delete.set(true);
    };

    let on_confirm_delete = move |_| {
        let Some(confirmation) = pending_delete() else {
            return;
        };
        is_deleting.set(true);
        spawn(async move {
            let report = controller().confirm_delete(confirmation).await;
            apply_report(report, students, notifications);
            pending_delete.set(None);
            show_delete.set(false);
            is_deleting.set(false);
        });
    };

    rsx! {
        Page {
            div {
                class: "content",
                onclick: move |_| menu.write().close(),
                div {
                    class: "card",
                    div {
                        class: "card-header",
                        h2 { class: "card-title", "Students" }
                        button {
                            r#type: "button",
                            class: "btn btn-primary",
                            onclick: move |_| show_form.set(true),
                            Icon { width: 14, height: 14, icon: FaPlus }
                            " Add"
                        }
                    }

                    if let Some(list) = students() {
                        StudentsTable {
                            students: list.clone(),
                            menu,
                            on_edit,
                            on_delete,
                        }
                        if list.is_empty() {
                            div {
                                class: "empty-state",
                                "No students yet"
                            }
                        }
                    } else {
                        div {
                            class: "empty-state",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    }
                }
            }

            StudentFormModal {
                show: show_form,
                values: form,
                is_submitting: is_submitting(),
                on_submit,
            }

            ConfirmationModal {
                show: show_merge,
                title: "Existing Student Found".to_string(),
                message: rsx!(
                    if let Some(proposal) = pending_merge() {
                        MergeSummary { proposal }
                    }
                ),
                confirm_text: "Update Marks".to_string(),
                confirm_class: "btn-primary".to_string(),
                is_processing: is_merging(),
                processing_text: "Updating...".to_string(),
                on_confirm: on_confirm_merge,
                on_cancel: move |_| pending_merge.set(None),
            }

            ConfirmationModal {
                show: show_delete,
                title: "Delete Student".to_string(),
                message: rsx!(
                    p {
                        class: "py-4",
                        "Are you sure you want to delete this student?"
                    }
                ),
                confirm_text: "Delete".to_string(),
                confirm_class: "btn-error".to_string(),
                is_processing: is_deleting(),
                processing_text: "Deleting...".to_string(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
