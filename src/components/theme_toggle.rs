use leptos::prelude::*;

use crate::config::{MOON_CLASS, TOGGLE_ID};

/// Button the theme controller binds to by id. The icon starts as the moon;
/// the controller swaps it once it has read the stored preference.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let icon_class = format!("bi {}", MOON_CLASS);

    view! {
        <button id=TOGGLE_ID class="btn theme-toggle" type="button" title="Toggle theme">
            <i class=icon_class></i>
        </button>
    }
}
