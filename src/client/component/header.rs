use dioxus::prelude::*;

use crate::client::{component::ThemeToggle, constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "header",
        div {
            class: "flex items-center",
            Link {
                to: Route::Dashboard {},
                p {
                    class: "header-title",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center",
            ThemeToggle {  }
        }
    })
}
