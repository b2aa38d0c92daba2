use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Page {
            class: "flex flex-col items-center justify-center",
            h1 { class: "text-2xl", "404" }
            p { "Nothing lives at /{path}" }
            Link {
                to: Route::Dashboard {},
                class: "btn btn-ghost",
                "Back to students"
            }
        }
    }
}
