use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::state::ShellState;

#[component]
pub fn App() -> impl IntoView {
    // Single owner of page state; children get the signal as a prop.
    let shell = RwSignal::new(ShellState::default());

    view! {
        <div class="app-layout">
            <div class="ambience" aria-hidden="true">
                <div class="ambience-glow ambience-glow-red"></div>
                <div class="ambience-glow ambience-glow-orange"></div>
            </div>
            <Navbar shell=shell />
            <HomePage shell=shell />
            <Footer />
        </div>
    }
}
