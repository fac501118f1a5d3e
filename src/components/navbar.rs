use leptos::prelude::*;

use crate::state::{ActiveTab, ShellState};

const NAV_TABS: [(ActiveTab, &str); 2] = [
    (ActiveTab::Presets, "Cobra Presets"),
    (ActiveTab::Ai, "AI Sensei"),
];

#[component]
pub fn Navbar(shell: RwSignal<ShellState>) -> impl IntoView {
    let tab_class = move |tab: ActiveTab, base: &'static str| {
        move || {
            if shell.with(|s| s.active_tab == tab) {
                format!("{} nav-link-active", base)
            } else {
                base.to_string()
            }
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="brand">
                    <span class="brand-mark">"\u{1F525}"</span>
                    <h1 class="brand-title">"TO " <span class="brand-accent">"COBRAS"</span></h1>
                </div>

                <div class="nav-desktop">
                    {NAV_TABS
                        .into_iter()
                        .map(|(tab, label)| view! {
                            <button
                                class=tab_class(tab, "nav-link")
                                on:click=move |_| shell.update(|s| s.set_tab(tab))
                            >
                                {label}
                            </button>
                        })
                        .collect::<Vec<_>>()}
                    <span class="beta-tag">"BETA v3.0"</span>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| shell.update(|s| s.toggle_mobile_menu())
                >
                    {move || if shell.with(|s| s.mobile_menu_open) { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || shell.with(|s| s.mobile_menu_open)>
                <div class="nav-mobile">
                    {NAV_TABS
                        .into_iter()
                        .map(|(tab, label)| view! {
                            <button
                                class=tab_class(tab, "nav-mobile-link")
                                on:click=move |_| shell.update(|s| s.choose_tab_from_menu(tab))
                            >
                                {label}
                            </button>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}
