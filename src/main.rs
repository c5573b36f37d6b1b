use gm_theme::app::App;

fn main() {
    gm_theme::init_logging();
    leptos::mount::mount_to_body(App);
}
