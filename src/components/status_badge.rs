use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Online,
    Degraded,
    Offline,
}

impl BadgeTone {
    fn icon(self) -> &'static str {
        match self {
            BadgeTone::Online => "\u{25CF}",
            BadgeTone::Degraded => "\u{25B2}",
            BadgeTone::Offline => "\u{2717}",
        }
    }

    fn class(self) -> &'static str {
        match self {
            BadgeTone::Online => "status-badge status-online",
            BadgeTone::Degraded => "status-badge status-degraded",
            BadgeTone::Offline => "status-badge status-offline",
        }
    }
}

#[component]
pub fn StatusBadge(
    /// Short label, e.g. "Cobra Server"
    #[prop(into)]
    label: String,
    tone: BadgeTone,
    /// Optional trailing detail, e.g. the model name
    #[prop(optional, into)]
    detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="status-item">
            <span class=tone.class()>{tone.icon()}</span>
            <span class="status-label">{label}</span>
            {detail.map(|d| view! { <span class="status-detail">{d}</span> })}
        </div>
    }
}
