use leptos::logging::error;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, PlayStyle, SensitivityRecord};
use crate::components::status_badge::{BadgeTone, StatusBadge};
use crate::state::{FormState, SUCCESS_RESET_MS};

#[component]
pub fn AiCoach(
    /// Receives each record the form produces, fallback or not.
    #[prop(into)]
    on_generated: Callback<SensitivityRecord>,
) -> impl IntoView {
    let form = RwSignal::new(FormState::default());

    // Pending success-reset timer; cleared on unmount and on resubmit
    let reset_timer = StoredValue::new(None::<i32>);

    let cancel_reset = move || {
        if let Some(id) = reset_timer.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
            reset_timer.set_value(None);
        }
    };
    on_cleanup(cancel_reset);

    let schedule_reset = move || {
        cancel_reset();
        let callback = wasm_bindgen::closure::Closure::once(move || {
            reset_timer.set_value(None);
            form.try_update(|f| f.reset_after_success());
        });
        if let Some(window) = web_sys::window() {
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                SUCCESS_RESET_MS,
            ) {
                reset_timer.set_value(Some(id));
            }
        }
        callback.forget();
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        cancel_reset();

        spawn_local(async move {
            let result =
                commands::generate_sensitivity(&request.device_model, request.play_style).await;
            if let Err(e) = &result {
                error!("Sensitivity generation failed: {}", e);
            }
            if let Some(record) = form.try_update(|f| f.settle(result)).flatten() {
                on_generated.run(record);
                schedule_reset();
            }
        });
    };

    let is_loading = move || form.with(|f| f.is_loading());

    view! {
        <div class="coach-panel">
            <div class="coach-header">
                <div class="coach-icon">"\u{1F916}"</div>
                <div>
                    <h2 class="coach-title">"Cobra AI Sensei"</h2>
                    <p class="coach-subtitle">"Device Analysis Module"</p>
                </div>
            </div>

            <form class="coach-form" on:submit=submit>
                <div class="form-group">
                    <label for="device-model">"Your Device Model"</label>
                    <input
                        id="device-model"
                        type="text"
                        class="input"
                        placeholder="e.g. iPhone 13, Samsung S23, POCO X3..."
                        required
                        prop:value=move || form.with(|f| f.device.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.device = value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Combat Style"</label>
                    <div class="style-grid">
                        {PlayStyle::ALL
                            .into_iter()
                            .map(|style| view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if form.with(|f| f.play_style == style) {
                                            "style-btn style-btn-active"
                                        } else {
                                            "style-btn"
                                        }
                                    }
                                    on:click=move |_| form.update(|f| f.play_style = style)
                                >
                                    {style.short_label()}
                                </button>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                {move || form.with(|f| f.error).map(|msg| view! {
                    <div class="coach-error">
                        <span class="coach-error-icon">"!"</span>
                        {msg}
                    </div>
                })}

                <Show when=move || form.with(|f| f.degraded)>
                    <StatusBadge
                        label="Offline preset values"
                        tone=BadgeTone::Degraded
                        detail="AI unavailable, showing Cobra defaults"
                    />
                </Show>

                <button
                    type="submit"
                    class=move || if is_loading() { "btn btn-generate btn-busy" } else { "btn btn-generate" }
                    disabled=is_loading
                >
                    {move || if is_loading() {
                        view! { <span class="spinner"></span>" Calibrating..." }.into_any()
                    } else {
                        view! { <span class="btn-icon">"\u{26A1}"</span>" Generate Venom Settings" }.into_any()
                    }}
                </button>
            </form>
        </div>
    }
}
