use super::super::api::{fetch_filter_metadata, fetch_sales};
use super::super::controller::{
    age_input_text, FilterEvent, LoadStatus, SalesController, SalesRequest,
};
use super::super::dropdowns::Dimension;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::multi_select::MultiSelectDropdown;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_count, format_inr, format_text, TableCellMoney};
use crate::shared::date_utils::{format_date_input, format_iso_date};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::enums::sales_sort::SORT_OPTIONS;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::HtmlInputElement;

#[component]
fn P910Header(
    #[prop(into)] total_items: Signal<u64>,
    #[prop(into)] is_loading: Signal<bool>,
    on_refresh: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">"Retail Sales"</h1>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || total_items.get().to_string()}</span>
                </Badge>
            </div>

            <div class="page__header-right">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_reset.run(())
                >
                    {icon("x")}
                    " Reset filters"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_refresh.run(())
                    disabled=is_loading
                >
                    {icon("refresh")}
                    {move || if is_loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </div>
        </div>
    }
}

/// Stats over the whole filtered dataset, hidden until the server sends them
#[component]
fn StatsBar(controller: RwSignal<SalesController>) -> impl IntoView {
    let stats = Memo::new(move |_| controller.with(|c| c.stats().cloned().unwrap_or_default()));

    view! {
        <Show when=move || controller.with(|c| c.stats().is_some())>
            <div class="stats-bar">
                <StatCard
                    label="Total Units Sold"
                    value=Signal::derive(move || format_count(stats.get().total_quantity))
                />
                <StatCard
                    label="Total Amount"
                    value=Signal::derive(move || format_inr(stats.get().total_amount))
                />
                <StatCard
                    label="Total Discount"
                    value=Signal::derive(move || format_inr(stats.get().total_discount))
                />
            </div>
        </Show>
    }
}

/// Loading / empty / error panel above the table
#[component]
fn StatusPanel(controller: RwSignal<SalesController>) -> impl IntoView {
    move || match controller.with(|c| c.status()) {
        LoadStatus::Loading => view! {
            <div class="status-panel">
                <Spinner />
                <span class="text-muted">"Loading sales…"</span>
            </div>
        }
        .into_any(),
        LoadStatus::Empty => view! {
            <div class="status-panel">
                <span class="text-muted">"No sales match the selected filters."</span>
            </div>
        }
        .into_any(),
        LoadStatus::Error => {
            let message = controller.with(|c| {
                c.error().map(|e| e.user_message()).unwrap_or_default()
            });
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{message}</span>
                </div>
            }
            .into_any()
        }
        LoadStatus::Idle | LoadStatus::Ready => view! { <></> }.into_any(),
    }
}

#[component]
pub fn RetailSalesList() -> impl IntoView {
    let controller = RwSignal::new(SalesController::default());
    let is_filter_expanded = RwSignal::new(true);

    // every event issues a request; the controller drops stale answers
    let run = move |request: SalesRequest| {
        spawn_local(async move {
            let result = fetch_sales(&request.filters).await;
            controller.update(|c| {
                c.complete(request.seq, result);
            });
        });
    };

    let dispatch = Callback::new(move |event: FilterEvent| {
        if let Some(request) = controller.try_update(|c| c.dispatch(event)) {
            run(request);
        }
    });

    // Bootstrap: metadata and the first page are fetched side by side
    spawn_local(async move {
        let result = fetch_filter_metadata().await;
        controller.update(|c| c.set_metadata(result));
    });
    dispatch.run(FilterEvent::Refresh);

    let filters = Memo::new(move |_| controller.with(|c| c.filters().clone()));
    let is_loading = Signal::derive(move || controller.with(|c| c.is_loading()));
    let reset_token = Signal::derive(move || controller.with(|c| c.reset_count()));

    let age_text = |age: Option<u32>| age.map(|v| v.to_string()).unwrap_or_default();

    let active_tags = move || {
        controller.with(|c| {
            let mut tags = Vec::new();
            for dimension in Dimension::all() {
                for value in c.dropdowns().selection(dimension).values() {
                    tags.push((dimension, value.clone()));
                }
            }
            tags
        })
    };

    view! {
        <div class="page page--wide">
            <P910Header
                total_items=Signal::derive(move || {
                    controller.with(|c| c.response().map(|r| r.total_items()).unwrap_or(0))
                })
                is_loading=is_loading
                on_refresh=Callback::new(move |_| dispatch.run(FilterEvent::Refresh))
                on_reset=Callback::new(move |_| dispatch.run(FilterEvent::Reset))
            />

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=Signal::derive(move || filters.get().active_filters_count())
                summary=Signal::derive(move || controller.with(|c| c.summary()))
                is_loading=is_loading
            >
                <Flex gap=FlexGap::Small align=FlexAlign::End attr:style="flex-wrap: wrap;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Customer name:"</Label>
                        <SearchInput
                            value=Signal::derive(move || filters.get().search_name)
                            reset_token=reset_token
                            on_change=Callback::new(move |v: String| dispatch.run(FilterEvent::SearchName(v)))
                            placeholder="Search by name..."
                        />
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Phone:"</Label>
                        <SearchInput
                            value=Signal::derive(move || filters.get().search_phone)
                            reset_token=reset_token
                            on_change=Callback::new(move |v: String| dispatch.run(FilterEvent::SearchPhone(v)))
                            placeholder="Search by phone..."
                        />
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Age:"</Label>
                        <Flex gap=FlexGap::Small>
                            <input
                                type="number"
                                min="0"
                                class="filter-input filter-input--narrow"
                                placeholder="Min"
                                prop:value=move || age_text(filters.get().age_min)
                                on:change=move |ev| {
                                    let text = event_target_value(&ev);
                                    dispatch.run(FilterEvent::AgeMin(text.clone()));
                                    // rejected text leaves the store as is, so rewrite the box here
                                    event_target::<HtmlInputElement>(&ev).set_value(&age_input_text(&text));
                                }
                            />
                            <input
                                type="number"
                                min="0"
                                class="filter-input filter-input--narrow"
                                placeholder="Max"
                                prop:value=move || age_text(filters.get().age_max)
                                on:change=move |ev| {
                                    let text = event_target_value(&ev);
                                    dispatch.run(FilterEvent::AgeMax(text.clone()));
                                    // rejected text leaves the store as is, so rewrite the box here
                                    event_target::<HtmlInputElement>(&ev).set_value(&age_input_text(&text));
                                }
                            />
                        </Flex>
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Date:"</Label>
                        <Flex gap=FlexGap::Small>
                            <DateInput
                                value=Signal::derive(move || format_date_input(filters.get().date_from))
                                on_change=Callback::new(move |v: String| dispatch.run(FilterEvent::DateFrom(v)))
                                min=Signal::derive(String::new)
                                max=Signal::derive(move || format_date_input(filters.get().date_to))
                                title="From"
                            />
                            <span>"–"</span>
                            <DateInput
                                value=Signal::derive(move || format_date_input(filters.get().date_to))
                                on_change=Callback::new(move |v: String| dispatch.run(FilterEvent::DateTo(v)))
                                min=Signal::derive(move || format_date_input(filters.get().date_from))
                                max=Signal::derive(String::new)
                                title="To"
                            />
                        </Flex>
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Sort by:"</Label>
                        <select
                            class="filter-select"
                            prop:value=move || filters.get().sort_option()
                            on:change=move |ev| dispatch.run(FilterEvent::SortChanged(event_target_value(&ev)))
                        >
                            {SORT_OPTIONS
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <option
                                            value=value
                                            selected=move || filters.get().sort_option() == value
                                        >
                                            {label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </Flex>
                </Flex>

                <Flex gap=FlexGap::Small attr:style="flex-wrap: wrap;">
                    {Dimension::all()
                        .into_iter()
                        .map(|dimension| {
                            view! {
                                <MultiSelectDropdown
                                    label=Signal::derive(move || {
                                        controller.with(|c| c.dropdowns().label(dimension))
                                    })
                                    options=Signal::derive(move || {
                                        controller.with(|c| dimension.options(c.metadata()).to_vec())
                                    })
                                    selected=Signal::derive(move || {
                                        controller.with(|c| {
                                            c.dropdowns().selection(dimension).values().to_vec()
                                        })
                                    })
                                    on_toggle=Callback::new(move |value: String| {
                                        dispatch.run(FilterEvent::ToggleOption { dimension, value })
                                    })
                                />
                            }
                        })
                        .collect_view()}
                </Flex>

                <div class="filter-tags">
                    {move || {
                        active_tags()
                            .into_iter()
                            .map(|(dimension, value)| {
                                let label = format!("{}: {}", dimension.default_label(), value);
                                view! {
                                    <FilterTag
                                        label=label
                                        on_remove=Callback::new(move |_| {
                                            dispatch.run(FilterEvent::ToggleOption {
                                                dimension,
                                                value: value.clone(),
                                            })
                                        })
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </FilterPanel>

            <StatsBar controller=controller />
            <StatusPanel controller=controller />

            <div class=move || {
                if controller.with(|c| c.status()) == LoadStatus::Ready {
                    "page-content"
                } else {
                    "page-content page-content--dimmed"
                }
            }>
                <div style="width: 100%; overflow-x: auto;">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=110.0>"Transaction ID"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Date"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Customer ID"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Customer Name"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Phone"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Gender"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>"Age"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Product Category"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Quantity"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Amount"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                controller
                                    .with(|c| c.rows().to_vec())
                                    .into_iter()
                                    .map(|row| {
                                        let amount = row.display_amount();
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{format_text(row.transaction_id.as_deref())}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_iso_date(row.date.as_deref())}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_text(row.customer_id.as_deref())}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{format_text(row.customer_name.as_deref())}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_text(row.phone_number.as_deref())}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_text(row.gender.as_deref())}</TableCellLayout></TableCell>
                                                <TableCell class="text-right"><TableCellLayout>{format_count(row.age)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_text(row.product_category.as_deref())}</TableCellLayout></TableCell>
                                                <TableCell class="text-right"><TableCellLayout>{format_count(row.quantity)}</TableCellLayout></TableCell>
                                                <TableCellMoney value=Signal::derive(move || amount) />
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    window=Signal::derive(move || controller.with(|c| c.page_window()))
                    on_page_change=Callback::new(move |page: u32| dispatch.run(FilterEvent::PageChanged(page)))
                />
            </div>
        </div>
    }
}
