use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::config::ThemeConfig;
use crate::dom;

#[component]
pub fn App() -> impl IntoView {
    // Runs once after mount, when the toggle button is in the document
    Effect::new(move |_| {
        if dom::install_on_document(ThemeConfig::default()).is_none() {
            log::warn!("theme controller unavailable");
        }
    });

    view! {
        <div class="app-layout">
            <Navbar title="GM" />
            <main class="content">
                <h2>"Theme"</h2>
                <p class="section-description">
                    "Use the button in the navigation bar to switch between light and dark. The choice is kept in this browser."
                </p>
            </main>
        </div>
    }
}
