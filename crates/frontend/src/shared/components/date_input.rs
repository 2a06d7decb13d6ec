use leptos::prelude::*;

/// Native date picker bound to a `yyyy-mm-dd` string ("" = no date).
///
/// `min` / `max` only narrow what the picker offers; typed input is still
/// checked by the caller.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<String>,
    /// Receives `yyyy-mm-dd` or ""
    on_change: Callback<String>,
    #[prop(into)]
    min: Signal<String>,
    #[prop(into)]
    max: Signal<String>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="filter-input filter-input--date"
            title=title
            prop:value=value
            min=move || min.get()
            max=move || max.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}
