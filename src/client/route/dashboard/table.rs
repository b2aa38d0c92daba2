use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaEllipsisVertical, FaPenToSquare, FaTrash},
    Icon,
};

use crate::{client::model::menu::ActionMenu, model::student::StudentDto};

#[component]
pub fn StudentsTable(
    students: Vec<StudentDto>,
    mut menu: Signal<ActionMenu>,
    on_edit: EventHandler<i32>,
    on_delete: EventHandler<i32>,
) -> Element {
    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table w-full",
                thead {
                    tr {
                        th { "Name" }
                        th { "Subject" }
                        th { "Marks" }
                        th {
                            class: "text-right",
                            "Actions"
                        }
                    }
                }
                tbody {
                    for student in students {
                        {
                            let student_id = student.id;
                            let initial = student.initial();
                            let is_open = menu.read().is_open(student_id);
                            rsx! {
                                tr {
                                    key: "{student_id}",
                                    td {
                                        class: "name-cell",
                                        div { class: "initial-circle", "{initial}" }
                                        "{student.name}"
                                    }
                                    td { "{student.subject}" }
                                    td { "{student.marks}" }
                                    td {
                                        class: "action-cell",
                                        div {
                                            class: "action-dropdown",
                                            button {
                                                r#type: "button",
                                                class: "btn btn-sm btn-ghost",
                                                onclick: move |evt| {
                                                    evt.stop_propagation();
                                                    menu.write().toggle(student_id);
                                                },
                                                Icon { width: 14, height: 14, icon: FaEllipsisVertical }
                                            }
                                            if is_open {
                                                div {
                                                    class: "dropdown-content",
                                                    button {
                                                        r#type: "button",
                                                        onclick: move |evt| {
                                                            evt.stop_propagation();
                                                            menu.write().close();
                                                            on_edit.call(student_id);
                                                        },
                                                        Icon { width: 14, height: 14, icon: FaPenToSquare }
                                                        " Edit"
                                                    }
                                                    button {
                                                        r#type: "button",
                                                        onclick: move |evt| {
                                                            evt.stop_propagation();
                                                            menu.write().close();
                                                            on_delete.call(student_id);
                                                        },
                                                        Icon { width: 14, height: 14, icon: FaTrash }
                                                        " Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
