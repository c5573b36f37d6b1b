use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn Navbar(
    /// Brand text shown on the left
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <nav class="navbar">
            <span class="navbar-brand">{title}</span>
            <div class="navbar-actions">
                <ThemeToggle />
            </div>
        </nav>
    }
}
