use leptos::prelude::*;

/// Counter card for the dashboard stats row
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Counter value (None = still loading)
    #[prop(into)]
    value: Signal<Option<usize>>,
    /// Accent color: "rose", "sky" or "emerald"
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let accent_class = move || match accent.get().as_deref().unwrap_or("rose") {
        "sky" => "stat-card__value stat-card__value--sky",
        "emerald" => "stat-card__value stat-card__value--emerald",
        _ => "stat-card__value stat-card__value--rose",
    };

    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class=accent_class>{formatted}</div>
        </div>
    }
}
