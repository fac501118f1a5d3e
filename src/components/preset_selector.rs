use leptos::prelude::*;

use crate::presets::PRESETS;
use crate::state::ShellState;

#[component]
pub fn PresetSelector(shell: RwSignal<ShellState>) -> impl IntoView {
    view! {
        <div class="preset-list">
            <h3 class="section-label">"Select Combat Style"</h3>
            {PRESETS
                .iter()
                .map(|preset| {
                    let is_active = move || shell.with(|s| s.active_preset == preset.id);
                    view! {
                        <button
                            class=move || {
                                if is_active() { "preset-card preset-card-active" } else { "preset-card" }
                            }
                            on:click=move |_| shell.update(|s| s.select_preset(preset))
                        >
                            <div class="preset-card-body">
                                <div class="preset-name">{preset.name}</div>
                                <div class="preset-description">{preset.description}</div>
                            </div>
                            <span class="preset-chevron">"\u{203A}"</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
