use crate::shared::icons::icon;
use leptos::prelude::*;

/// Multi-select dropdown: a button with the derived label and a menu of
/// options. Picking an option toggles it and closes the menu; a click
/// outside the menu closes it too.
#[component]
pub fn MultiSelectDropdown(
    /// Button text (default label, single value or "first (+n)")
    #[prop(into)]
    label: Signal<String>,
    /// Available option values, in server order
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Currently selected values, in selection order
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Callback with the toggled value
    on_toggle: Callback<String>,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    let has_selection = move || !selected.get().is_empty();

    view! {
        <div class="multi-select">
            <button
                type="button"
                class=move || {
                    if has_selection() {
                        "multi-select__button multi-select__button--active"
                    } else {
                        "multi-select__button"
                    }
                }
                on:click=move |_| set_is_open.update(|o| *o = !*o)
            >
                <span class="multi-select__label">{move || label.get()}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || is_open.get()>
                // transparent backdrop: a click outside closes the menu
                <div class="multi-select__backdrop" on:click=move |_| set_is_open.set(false)></div>
                <div class="multi-select__menu">
                    {move || {
                        let opts = options.get();
                        if opts.is_empty() {
                            return view! {
                                <div class="multi-select__empty">"No options"</div>
                            }.into_any();
                        }
                        let current = selected.get();
                        opts.into_iter().map(|value| {
                            let is_selected = current.contains(&value);
                            let class = if is_selected {
                                "multi-select__item multi-select__item--selected"
                            } else {
                                "multi-select__item"
                            };
                            let text = value.clone();
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    on:click=move |_| {
                                        set_is_open.set(false);
                                        on_toggle.run(value.clone());
                                    }
                                >
                                    {text}
                                </button>
                            }
                        }).collect_view().into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
