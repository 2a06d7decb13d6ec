use crate::shared::icons::icon;
use crate::shared::pagination::PageWindow;
use leptos::prelude::*;

/// PaginationControls component - numbered pagination bar
///
/// Renders nothing for an empty window (one page or no data).
#[component]
pub fn PaginationControls(
    /// Descriptor from `compute_window`
    #[prop(into)]
    window: Signal<PageWindow>,

    /// Callback with the 1-based page the user picked
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let page_button = move |p: u32, current: u32| {
        let class = if p == current {
            "pagination-btn pagination-btn--active"
        } else {
            "pagination-btn"
        };
        view! {
            <button
                class=class
                on:click=move |_| on_page_change.run(p)
            >
                {p.to_string()}
            </button>
        }
    };

    move || {
        let w = window.get();
        if w.is_empty() {
            return view! { <></> }.into_any();
        }

        let prev = w.prev_target();
        let next = w.next_target();
        let current = w.page;
        let prev_disabled = !w.prev_enabled;
        let next_disabled = !w.next_enabled;

        view! {
            <div class="pagination-controls">
                <span class="pagination-info">{w.caption()}</span>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(prev)
                    disabled=prev_disabled
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {w.show_first.then(|| page_button(1, current))}
                {w.leading_ellipsis.then(|| view! { <span class="pagination-ellipsis">"…"</span> })}
                {w.pages.iter().map(|&p| page_button(p, current)).collect_view()}
                {w.trailing_ellipsis.then(|| view! { <span class="pagination-ellipsis">"…"</span> })}
                {w.show_last.then(|| page_button(w.total_pages, current))}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(next)
                    disabled=next_disabled
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        }
        .into_any()
    }
}
