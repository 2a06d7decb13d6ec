use leptos::prelude::*;

/// Compact pill with a label and an already formatted value
#[component]
pub fn StatCard(
    /// Label displayed before the value
    label: &'static str,
    /// Formatted value ("-" when unknown)
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
        </div>
    }
}
