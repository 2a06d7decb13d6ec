use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible block with the list filters.
///
/// The header carries the active-filter badge, the result summary and a
/// loading hint; it stays visible while the body is collapsed.
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,

    /// Shown as a badge when non-zero
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// "Showing 1–10 of 42 results"
    #[prop(into)]
    summary: Signal<String>,

    #[prop(into)]
    is_loading: Signal<bool>,

    children: Children,
) -> impl IntoView {
    let chevron_class = move || {
        if is_expanded.get() {
            "filter-panel__chevron filter-panel__chevron--expanded"
        } else {
            "filter-panel__chevron"
        }
    };
    let body_class = move || {
        if is_expanded.get() {
            "filter-panel__collapsible filter-panel__collapsible--expanded"
        } else {
            "filter-panel__collapsible filter-panel__collapsible--collapsed"
        }
    };

    view! {
        <section class="filter-panel">
            <header class="filter-panel-header">
                <button
                    type="button"
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=chevron_class>{icon("chevron-down")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </button>

                <div class="filter-panel-header__center">
                    <span class="filter-panel__summary">{move || summary.get()}</span>
                </div>

                <div class="filter-panel-header__right">
                    <span class="text-muted">
                        {move || if is_loading.get() { "Loading…" } else { "" }}
                    </span>
                </div>
            </header>

            <div class=body_class>
                <div class="filter-panel-content">{children()}</div>
            </div>
        </section>
    }
}

/// Removable chip for one active filter value
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <span class="filter-tag">
            {label}
            <button
                type="button"
                class="filter-tag__remove"
                title="Remove"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </span>
    }
}
