mod app;
mod commands;
mod components;
mod dom;
mod pages;
mod presets;
mod state;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
