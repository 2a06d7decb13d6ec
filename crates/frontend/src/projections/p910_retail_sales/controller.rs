//! Event reducer and request bookkeeping for the retail sales list
//!
//! UI inputs never touch state directly. Each one produces a `FilterEvent`;
//! `SalesController::dispatch` turns it into a `FilterPatch`, merges it and
//! hands back a `SalesRequest` to run. Responses come back through
//! `complete`, which drops anything that is not the answer to the latest
//! request: the last request sent wins, not the last response to arrive.

use super::dropdowns::{Dimension, DropdownState};
use super::state::{FilterPatch, FilterState, FilterStore, DEFAULT_PAGE_SIZE};
use crate::shared::api_error::{ApiError, ApiResult};
use crate::shared::date_utils::parse_date_input;
use crate::shared::pagination::{compute_window, result_summary, PageWindow, PAGE_WINDOW_RADIUS};
use contracts::enums::sales_sort::parse_sort_option;
use contracts::projections::p910_retail_sales::dto::{
    FilterMetadata, SalesListResponse, SalesRecordDto, SalesStatsDto,
};

/// Typed "field changed" events from the list page
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    SearchName(String),
    SearchPhone(String),
    /// Raw text of the age input
    AgeMin(String),
    AgeMax(String),
    /// Raw value of the date input (`yyyy-mm-dd` or empty)
    DateFrom(String),
    DateTo(String),
    /// Value of the sort selector, e.g. `quantity_asc`
    SortChanged(String),
    ToggleOption { dimension: Dimension, value: String },
    PageChanged(u32),
    Reset,
    /// Reload the current query as is
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Empty,
    Error,
}

/// Monotonic request numbering
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSequencer {
    issued: u64,
}

impl RequestSequencer {
    pub fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }
}

/// A sales fetch to run: the filters at the time it was issued plus its number
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRequest {
    pub seq: u64,
    pub filters: FilterState,
}

#[derive(Debug, Clone)]
pub struct SalesController {
    store: FilterStore,
    dropdowns: DropdownState,
    metadata: FilterMetadata,
    sequencer: RequestSequencer,
    status: LoadStatus,
    response: Option<SalesListResponse>,
    error: Option<ApiError>,
    resets: u64,
}

impl Default for SalesController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl SalesController {
    pub fn new(page_size: u32) -> Self {
        Self {
            store: FilterStore::new(page_size),
            dropdowns: DropdownState::default(),
            metadata: FilterMetadata::default(),
            sequencer: RequestSequencer::default(),
            status: LoadStatus::Idle,
            response: None,
            error: None,
            resets: 0,
        }
    }

    /// Apply an event and issue the reload it triggers
    pub fn dispatch(&mut self, event: FilterEvent) -> SalesRequest {
        log::debug!("filter event: {:?}", event);

        match event {
            FilterEvent::Reset => {
                self.store.reset();
                self.dropdowns.reset();
                self.resets += 1;
            }
            FilterEvent::Refresh => {}
            other => {
                let patch = self.reduce(other);
                self.store.merge(patch);
            }
        }

        self.begin_load()
    }

    /// Patch for every event except `Reset` / `Refresh`.
    /// Anything but a page click resets the page to 1.
    fn reduce(&mut self, event: FilterEvent) -> FilterPatch {
        let current = self.store.current();
        match event {
            FilterEvent::SearchName(text) => FilterPatch {
                search_name: Some(text.trim().to_string()),
                ..Default::default()
            }
            .first_page(),
            FilterEvent::SearchPhone(text) => FilterPatch {
                search_phone: Some(text.trim().to_string()),
                ..Default::default()
            }
            .first_page(),
            FilterEvent::AgeMin(text) => FilterPatch {
                age_min: Some(parse_age(&text)),
                ..Default::default()
            }
            .first_page(),
            FilterEvent::AgeMax(text) => FilterPatch {
                age_max: Some(parse_age(&text)),
                ..Default::default()
            }
            .first_page(),
            FilterEvent::DateFrom(text) => {
                let date_from = parse_date_input(&text);
                // an inverted range drops the opposite bound
                let date_to = match (date_from, current.date_to) {
                    (Some(from), Some(to)) if from > to => {
                        log::warn!("date_from {} is after date_to {}, clearing date_to", from, to);
                        Some(None)
                    }
                    _ => None,
                };
                FilterPatch {
                    date_from: Some(date_from),
                    date_to,
                    ..Default::default()
                }
                .first_page()
            }
            FilterEvent::DateTo(text) => {
                let date_to = parse_date_input(&text);
                let date_from = match (current.date_from, date_to) {
                    (Some(from), Some(to)) if from > to => {
                        log::warn!("date_to {} is before date_from {}, clearing date_from", to, from);
                        Some(None)
                    }
                    _ => None,
                };
                FilterPatch {
                    date_from,
                    date_to: Some(date_to),
                    ..Default::default()
                }
                .first_page()
            }
            FilterEvent::SortChanged(value) => {
                let (sort_by, sort_order) = parse_sort_option(&value);
                FilterPatch {
                    sort_by: Some(sort_by),
                    sort_order: Some(sort_order),
                    ..Default::default()
                }
                .first_page()
            }
            FilterEvent::ToggleOption { dimension, value } => {
                self.dropdowns.toggle(dimension, &value);
                self.dropdowns.to_patch().first_page()
            }
            FilterEvent::PageChanged(page) => FilterPatch::page(page),
            FilterEvent::Reset | FilterEvent::Refresh => FilterPatch::default(),
        }
    }

    /// Number a new request for the current filters and enter `Loading`
    pub fn begin_load(&mut self) -> SalesRequest {
        let seq = self.sequencer.next();
        self.status = LoadStatus::Loading;
        SalesRequest {
            seq,
            filters: self.store.snapshot(),
        }
    }

    /// Reconcile a finished request. Returns `false` when it was stale and ignored.
    ///
    /// On error the last rendered response is kept as is; only the status changes.
    pub fn complete(&mut self, seq: u64, result: ApiResult<SalesListResponse>) -> bool {
        if !self.sequencer.is_latest(seq) {
            log::debug!("dropping stale sales response #{}", seq);
            return false;
        }

        match result {
            Ok(response) => {
                let page = response.page_or(self.store.current().page);
                self.store.merge(FilterPatch::page(page));
                self.status = if response.items.is_empty() {
                    LoadStatus::Empty
                } else {
                    LoadStatus::Ready
                };
                log::info!(
                    "sales loaded: page {} of {}, {} items total",
                    page,
                    response.total_pages(),
                    response.total_items()
                );
                self.response = Some(response);
                self.error = None;
            }
            Err(err) => {
                log::error!("Load error: {}", err);
                self.status = LoadStatus::Error;
                self.error = Some(err);
            }
        }
        true
    }

    /// Metadata failure is not fatal: the dropdowns just have no options
    pub fn set_metadata(&mut self, result: ApiResult<FilterMetadata>) {
        self.metadata = match result {
            Ok(metadata) => metadata,
            Err(err) => {
                log::warn!("Failed to load filter metadata: {}", err);
                FilterMetadata::default()
            }
        };
    }

    /// Bumped by every `Reset`; text inputs watch it to drop pending input
    pub fn reset_count(&self) -> u64 {
        self.resets
    }

    pub fn filters(&self) -> &FilterState {
        self.store.current()
    }

    pub fn dropdowns(&self) -> &DropdownState {
        &self.dropdowns
    }

    pub fn metadata(&self) -> &FilterMetadata {
        &self.metadata
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Last successfully loaded page (kept while loading or after an error)
    pub fn response(&self) -> Option<&SalesListResponse> {
        self.response.as_ref()
    }

    pub fn rows(&self) -> &[SalesRecordDto] {
        self.response
            .as_ref()
            .map(|r| r.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn stats(&self) -> Option<&SalesStatsDto> {
        self.response.as_ref().and_then(|r| r.stats.as_ref())
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn page_window(&self) -> PageWindow {
        match &self.response {
            Some(r) => compute_window(
                r.page_or(self.filters().page),
                r.total_pages(),
                PAGE_WINDOW_RADIUS,
            ),
            None => PageWindow::default(),
        }
    }

    /// "Showing X–Y of Z results", empty before the first load
    pub fn summary(&self) -> String {
        match &self.response {
            Some(r) => {
                let filters = self.filters();
                result_summary(
                    r.page_or(filters.page),
                    r.page_size_or(filters.page_size),
                    r.total_items(),
                )
            }
            None => String::new(),
        }
    }
}

/// Non-negative integer or no bound
pub fn parse_age(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

/// What an age box should show once its text has been applied
pub fn age_input_text(text: &str) -> String {
    parse_age(text).map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::enums::sales_sort::{SortBy, SortOrder};

    fn page_of(n_items: usize, page: u32, total_items: u64, total_pages: u32) -> SalesListResponse {
        SalesListResponse {
            items: (0..n_items)
                .map(|i| SalesRecordDto {
                    transaction_id: Some(format!("T{}", i)),
                    ..Default::default()
                })
                .collect(),
            page: Some(page),
            page_size: Some(10),
            total_items: Some(total_items),
            total_pages: Some(total_pages),
            stats: None,
        }
    }

    fn format_age(age: Option<u32>) -> String {
        age.map(|v| v.to_string()).unwrap_or_default()
    }

    fn toggle(dimension: Dimension, value: &str) -> FilterEvent {
        FilterEvent::ToggleOption {
            dimension,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_region_toggles_end_to_end() {
        let mut ctl = SalesController::default();
        ctl.dispatch(FilterEvent::PageChanged(3));

        ctl.dispatch(toggle(Dimension::Region, "North"));
        ctl.dispatch(toggle(Dimension::Region, "South"));
        let request = ctl.dispatch(toggle(Dimension::Region, "North"));

        assert_eq!(request.filters.page, 1);
        assert!(request
            .filters
            .to_query()
            .contains(&("customer_region", "South".to_string())));
        assert_eq!(ctl.dropdowns().label(Dimension::Region), "South");
        assert!(ctl.is_loading());
    }

    #[test]
    fn test_every_filter_event_resets_page() {
        let events = vec![
            FilterEvent::SearchName("asha".into()),
            FilterEvent::SearchPhone("98".into()),
            FilterEvent::AgeMin("20".into()),
            FilterEvent::AgeMax("60".into()),
            FilterEvent::DateFrom("2023-01-01".into()),
            FilterEvent::DateTo("2023-12-31".into()),
            FilterEvent::SortChanged("quantity_asc".into()),
            toggle(Dimension::Tags, "organic"),
        ];

        for event in events {
            let mut ctl = SalesController::default();
            ctl.dispatch(FilterEvent::PageChanged(5));
            assert_eq!(ctl.filters().page, 5);

            let request = ctl.dispatch(event.clone());
            assert_eq!(request.filters.page, 1, "{:?} must reset the page", event);
        }
    }

    #[test]
    fn test_page_change_keeps_filters() {
        let mut ctl = SalesController::default();
        ctl.dispatch(FilterEvent::SearchName("  Ravi ".into()));
        let request = ctl.dispatch(FilterEvent::PageChanged(2));

        assert_eq!(request.filters.page, 2);
        assert_eq!(request.filters.search_name, "Ravi");
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let mut ctl = SalesController::default();
        let a = ctl.dispatch(FilterEvent::Refresh);
        let b = ctl.dispatch(FilterEvent::Refresh);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut ctl = SalesController::default();
        let older = ctl.dispatch(FilterEvent::SearchName("a".into()));
        let newer = ctl.dispatch(FilterEvent::SearchName("ab".into()));

        assert!(ctl.complete(newer.seq, Ok(page_of(2, 1, 2, 1))));
        // the older request finishes last and must not overwrite the render
        assert!(!ctl.complete(older.seq, Ok(page_of(10, 1, 500, 50))));

        assert_eq!(ctl.rows().len(), 2);
        assert_eq!(ctl.response().map(|r| r.total_items()), Some(2));
        assert_eq!(ctl.status(), LoadStatus::Ready);
    }

    #[test]
    fn test_stale_error_is_dropped_too() {
        let mut ctl = SalesController::default();
        let older = ctl.dispatch(FilterEvent::Refresh);
        let _newer = ctl.dispatch(FilterEvent::Refresh);

        assert!(!ctl.complete(older.seq, Err(ApiError::RequestFailed { status: 500 })));
        assert_eq!(ctl.status(), LoadStatus::Loading);
        assert!(ctl.error().is_none());
    }

    #[test]
    fn test_error_keeps_previous_table() {
        let mut ctl = SalesController::default();
        let first = ctl.dispatch(FilterEvent::Refresh);
        ctl.complete(first.seq, Ok(page_of(3, 1, 3, 1)));
        let rendered = ctl.response().cloned();

        let second = ctl.dispatch(FilterEvent::PageChanged(2));
        assert_eq!(ctl.status(), LoadStatus::Loading);
        assert!(ctl.complete(second.seq, Err(ApiError::RequestFailed { status: 502 })));

        assert_eq!(ctl.status(), LoadStatus::Error);
        assert_eq!(ctl.error(), Some(&ApiError::RequestFailed { status: 502 }));
        assert_eq!(ctl.response().cloned(), rendered);
        assert_eq!(ctl.rows().len(), 3);
    }

    #[test]
    fn test_success_after_error_clears_it() {
        let mut ctl = SalesController::default();
        let r = ctl.dispatch(FilterEvent::Refresh);
        ctl.complete(r.seq, Err(ApiError::Transport("refused".into())));
        let r = ctl.dispatch(FilterEvent::Refresh);
        ctl.complete(r.seq, Ok(page_of(1, 1, 1, 1)));

        assert!(ctl.error().is_none());
        assert_eq!(ctl.status(), LoadStatus::Ready);
    }

    #[test]
    fn test_empty_response_status_and_summary() {
        let mut ctl = SalesController::default();
        let r = ctl.dispatch(FilterEvent::Refresh);
        ctl.complete(r.seq, Ok(page_of(0, 1, 0, 1)));

        assert_eq!(ctl.status(), LoadStatus::Empty);
        assert_eq!(ctl.summary(), "No results found.");
        assert!(ctl.page_window().is_empty());
    }

    #[test]
    fn test_page_synced_from_response() {
        let mut ctl = SalesController::default();
        let r = ctl.dispatch(FilterEvent::PageChanged(9));
        // server clamps to its last page
        ctl.complete(r.seq, Ok(page_of(5, 3, 25, 3)));

        assert_eq!(ctl.filters().page, 3);
        assert_eq!(ctl.summary(), "Showing 21–25 of 25 results");
        let window = ctl.page_window();
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert!(!window.next_enabled);
    }

    #[test]
    fn test_sparse_server_body_falls_back_to_request() {
        let body = r#"{"items": [{"transaction_id": 17, "total_amount": null, "final_amount": 950.5}]}"#;
        let response: SalesListResponse = serde_json::from_str(body).unwrap();

        let mut ctl = SalesController::default();
        let r = ctl.dispatch(FilterEvent::PageChanged(4));
        ctl.complete(r.seq, Ok(response));

        assert_eq!(ctl.filters().page, 4);
        assert_eq!(ctl.rows()[0].transaction_id.as_deref(), Some("17"));
        assert_eq!(ctl.rows()[0].display_amount(), Some(950.5));
        assert!(ctl.page_window().is_empty());
        assert!(ctl.stats().is_none());
    }

    #[test]
    fn test_summary_for_second_page() {
        let mut ctl = SalesController::default();
        let r = ctl.dispatch(FilterEvent::PageChanged(2));
        ctl.complete(r.seq, Ok(page_of(10, 2, 25, 3)));
        assert_eq!(ctl.summary(), "Showing 11–20 of 25 results");
    }

    #[test]
    fn test_reset_restores_sort_and_clears_dropdowns() {
        let mut ctl = SalesController::default();
        ctl.dispatch(FilterEvent::SortChanged("customer_name_asc".into()));
        ctl.dispatch(toggle(Dimension::Gender, "Female"));
        ctl.dispatch(FilterEvent::AgeMin("30".into()));
        ctl.dispatch(FilterEvent::PageChanged(4));

        let request = ctl.dispatch(FilterEvent::Reset);

        assert_eq!(request.filters, FilterState::default());
        assert_eq!(request.filters.sort_by, SortBy::Date);
        assert_eq!(request.filters.sort_order, SortOrder::Desc);
        assert_eq!(ctl.filters().sort_option(), "date_desc");
        assert_eq!(ctl.dropdowns(), &DropdownState::default());
    }

    #[test]
    fn test_age_input_parsing() {
        let mut ctl = SalesController::default();
        ctl.dispatch(FilterEvent::AgeMin(" 25 ".into()));
        assert_eq!(ctl.filters().age_min, Some(25));

        ctl.dispatch(FilterEvent::AgeMin("abc".into()));
        assert_eq!(ctl.filters().age_min, None);

        ctl.dispatch(FilterEvent::AgeMax("-5".into()));
        assert_eq!(ctl.filters().age_max, None);
        assert!(!ctl
            .filters()
            .to_query()
            .iter()
            .any(|(k, _)| *k == "age_min" || *k == "age_max"));
    }

    #[test]
    fn test_rejected_age_text_is_not_left_in_the_box() {
        assert_eq!(age_input_text("25.5"), "");
        assert_eq!(age_input_text("abc"), "");
        assert_eq!(age_input_text(" 40 "), "40");

        let mut ctl = SalesController::default();
        // the store does not change, so the box has to be rewritten explicitly
        let before = ctl.filters().clone();
        ctl.dispatch(FilterEvent::AgeMin("25.5".into()));
        assert_eq!(ctl.filters(), &before);
        assert_eq!(age_input_text("25.5"), format_age(ctl.filters().age_min));
    }

    #[test]
    fn test_reset_count_bumps_only_on_reset() {
        let mut ctl = SalesController::default();
        ctl.dispatch(FilterEvent::SearchName("Ravi".into()));
        ctl.dispatch(FilterEvent::Refresh);
        assert_eq!(ctl.reset_count(), 0);

        ctl.dispatch(FilterEvent::Reset);
        ctl.dispatch(FilterEvent::Reset);
        assert_eq!(ctl.reset_count(), 2);
    }

    #[test]
    fn test_inverted_date_range_clears_other_bound() {
        let mut ctl = SalesController::default();
        ctl.dispatch(FilterEvent::DateTo("2023-03-01".into()));
        ctl.dispatch(FilterEvent::DateFrom("2023-04-01".into()));

        assert_eq!(ctl.filters().date_from, NaiveDate::from_ymd_opt(2023, 4, 1));
        assert_eq!(ctl.filters().date_to, None);

        ctl.dispatch(FilterEvent::DateTo("2023-02-01".into()));
        assert_eq!(ctl.filters().date_from, None);
        assert_eq!(ctl.filters().date_to, NaiveDate::from_ymd_opt(2023, 2, 1));
    }

    #[test]
    fn test_blank_date_input_clears_bound() {
        let mut ctl = SalesController::default();
        ctl.dispatch(FilterEvent::DateFrom("2023-01-10".into()));
        ctl.dispatch(FilterEvent::DateFrom("".into()));
        assert_eq!(ctl.filters().date_from, None);
    }

    #[test]
    fn test_metadata_failure_falls_back_to_empty_options() {
        let mut ctl = SalesController::default();
        ctl.set_metadata(Err(ApiError::RequestFailed { status: 404 }));

        for dimension in Dimension::all() {
            assert!(dimension.options(ctl.metadata()).is_empty());
        }
    }

    #[test]
    fn test_metadata_success() {
        let mut ctl = SalesController::default();
        ctl.set_metadata(Ok(FilterMetadata {
            gender: vec!["Male".into(), "Female".into()],
            ..Default::default()
        }));
        assert_eq!(Dimension::Gender.options(ctl.metadata()), ["Male", "Female"]);
    }
}
