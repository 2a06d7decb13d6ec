//! Debounced search box for list filters
//!
//! The box keeps its own text while the user types and only reports it after
//! a pause. `SearchSync` decides when a change coming from outside (a reset,
//! another filter reloading the list) must overwrite that text and drop the
//! pending report.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay between the last keystroke and the search request
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Bookkeeping between the text box and the filter value it feeds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSync {
    last_emitted: String,
    reset_generation: u64,
}

impl SearchSync {
    pub fn new(value: &str, reset_generation: u64) -> Self {
        Self {
            last_emitted: value.to_string(),
            reset_generation,
        }
    }

    /// Record a value reported to the owner
    pub fn emitted(&mut self, value: &str) {
        self.last_emitted = value.to_string();
    }

    /// Called whenever the bound value or the reset generation is observed.
    ///
    /// Returns the text the box must show, in which case any pending report
    /// is cancelled. `None` means the change is our own echo (or unrelated to
    /// this box) and whatever the user is typing stays.
    pub fn observe(&mut self, incoming: &str, reset_generation: u64) -> Option<String> {
        if reset_generation != self.reset_generation {
            self.reset_generation = reset_generation;
            self.last_emitted = incoming.to_string();
            return Some(incoming.to_string());
        }
        // the owner trims what it stores
        if incoming.trim() != self.last_emitted.trim() {
            self.last_emitted = incoming.to_string();
            return Some(incoming.to_string());
        }
        None
    }
}

/// Text input with a debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Changes whenever the owner resets its filters
    #[prop(into)]
    reset_token: Signal<u64>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let sync = StoredValue::new(SearchSync::new(
        &value.get_untracked(),
        reset_token.get_untracked(),
    ));

    // Pending timer; dropping a Timeout cancels it
    let debounce_timeout = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let incoming = value.get();
        let generation = reset_token.get();
        let mut replace = None;
        sync.update_value(|s| replace = s.observe(&incoming, generation));
        if let Some(text) = replace {
            debounce_timeout.set_value(None);
            set_input_value.set(text);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            sync.update_value(|s| s.emitted(&new_value));
            on_change.run(new_value);
        });
        debounce_timeout.set_value(Some(timeout));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        debounce_timeout.set_value(None);
        set_input_value.set(String::new());
        sync.update_value(|s| s.emitted(""));
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button type="button" class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
