use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, EngineStatus};
use crate::components::status_badge::{BadgeTone, StatusBadge};
use crate::dom;

#[component]
pub fn Footer() -> impl IntoView {
    let (engine, set_engine) = signal::<Option<Result<EngineStatus, String>>>(None);

    // Query the backend once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            set_engine.set(Some(commands::get_engine_status().await));
        });
    });

    let year = dom::current_year();

    view! {
        <footer class="footer">
            <p class="footer-brand">"TO " <span class="brand-accent">"COBRAS"</span></p>
            <p class="footer-tagline">"Strike with precision. Win with style."</p>
            <div class="footer-status">
                {move || engine.get().map(|status| match status {
                    Ok(s) if s.api_key_set => view! {
                        <StatusBadge label="Cobra Server" tone=BadgeTone::Online detail=s.model />
                    }.into_any(),
                    Ok(s) => view! {
                        <StatusBadge
                            label="Cobra Server"
                            tone=BadgeTone::Degraded
                            detail=format!("{} (no API key)", s.model)
                        />
                    }.into_any(),
                    Err(_) => view! {
                        <StatusBadge label="Cobra Server" tone=BadgeTone::Offline detail="Unreachable" />
                    }.into_any(),
                })}
            </div>
            <p class="footer-legal">{format!("\u{00A9} {} TO COBRAS. Not affiliated with Garena.", year)}</p>
        </footer>
    }
}
