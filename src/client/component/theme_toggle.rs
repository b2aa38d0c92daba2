use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaMoon, FaSun},
    Icon,
};
use dioxus_logger::tracing;

use crate::client::{constant::THEME_STORAGE_KEY, model::theme::Theme};

/// Sets `data-theme` on the document root and persists the choice.
fn apply_theme(theme: Theme) {
    document::eval(&format!(
        "document.documentElement.setAttribute('data-theme', '{value}'); localStorage.setItem('{key}', '{value}');",
        value = theme.as_str(),
        key = THEME_STORAGE_KEY,
    ));
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_signal(Theme::default);

    use_future(move || async move {
        let stored = document::eval(&format!(
            "return localStorage.getItem('{}');",
            THEME_STORAGE_KEY
        ))
        .join::<Option<String>>()
        .await;

        let stored = match stored {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Failed to read stored theme: {:?}", err);
                None
            }
        };

        let initial = Theme::from_stored(stored.as_deref());
        apply_theme(initial);
        theme.set(initial);
    });

    rsx!(
        button {
            r#type: "button",
            class: "btn btn-ghost btn-circle",
            title: "Toggle theme",
            onclick: move |_| {
                let next = theme().toggled();
                apply_theme(next);
                theme.set(next);
            },
            if theme() == Theme::Dark {
                Icon { width: 20, height: 20, icon: FaMoon }
            } else {
                Icon { width: 20, height: 20, icon: FaSun }
            }
        }
    )
}
