use leptos::prelude::*;

use crate::commands::SensitivityRecord;
use crate::components::ai_coach::AiCoach;
use crate::components::preset_selector::PresetSelector;
use crate::components::sensitivity_card::SensitivityCard;
use crate::dom::{self, RESULTS_SECTION_ID};
use crate::state::{ActiveTab, ShellState};

#[component]
pub fn HomePage(shell: RwSignal<ShellState>) -> impl IntoView {
    let on_tab = move |tab: ActiveTab| shell.with(|s| s.active_tab == tab);

    let on_generated = move |record: SensitivityRecord| {
        shell.update(|s| s.apply_generated(record));
        dom::scroll_to_results();
    };

    view! {
        <div class="page home-page">
            <section class="hero">
                <div class="hero-badge">"\u{1F3C6} #1 Sensitivity Guide"</div>
                <h2 class="hero-title">
                    "Strike with " <span class="gradient-text">"Venomous Precision"</span>
                </h2>
                <p class="hero-description">
                    "Welcome to " <strong>"TO COBRAS"</strong>
                    ". Optimize your aim, control your recoil, and dominate the battleground with settings tailored for champions."
                </p>
            </section>

            <main class="content">
                <div class="controls-column">
                    <div class="tab-switcher">
                        <button
                            class=move || if on_tab(ActiveTab::Presets) { "tab-btn tab-btn-active" } else { "tab-btn" }
                            on:click=move |_| shell.update(|s| s.set_tab(ActiveTab::Presets))
                        >
                            "Manual Presets"
                        </button>
                        <button
                            class=move || if on_tab(ActiveTab::Ai) { "tab-btn tab-btn-active tab-btn-ai" } else { "tab-btn" }
                            on:click=move |_| shell.update(|s| s.set_tab(ActiveTab::Ai))
                        >
                            "AI Generator"
                        </button>
                    </div>

                    <Show
                        when=move || on_tab(ActiveTab::Presets)
                        fallback=move || view! {
                            <div class="ai-panel">
                                <AiCoach on_generated=on_generated />
                                <p class="ai-note">
                                    "COBRA AI analyzes your device specs (PPI, Touch Sampling) to generate the deadliest sensitivity."
                                </p>
                            </div>
                        }
                    >
                        <PresetSelector shell=shell />
                    </Show>
                </div>

                <div class="results-column" id=RESULTS_SECTION_ID>
                    <div class="tip-panel">
                        <span class="tip-icon">"\u{2316}"</span>
                        <div>
                            <h4 class="tip-title">"Cobra Tip"</h4>
                            <p class="tip-text">{move || shell.with(|s| s.tip())}</p>
                        </div>
                    </div>

                    <SensitivityCard
                        data=Signal::derive(move || shell.with(|s| s.current))
                        title=Signal::derive(move || shell.with(|s| s.card_title().to_string()))
                    />

                    <div class="stats-strip">
                        <div class="stat">
                            <div class="stat-value">"4.9/5"</div>
                            <div class="stat-label">"Rating"</div>
                        </div>
                        <div class="stat-divider"></div>
                        <div class="stat">
                            <div class="stat-value">"2.5M+"</div>
                            <div class="stat-label">"Cobras Trained"</div>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
