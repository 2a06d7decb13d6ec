//! Filter state of the retail sales list
//!
//! `FilterStore` is the single source of truth for everything sent to
//! `GET /sales`. Inputs never write fields directly: they produce a
//! `FilterPatch` which is shallow-merged into the store.
//!
//! Page reset is a caller contract, not something `merge` does on its own:
//! every patch that changes a filter, the search or the sort must carry
//! `page: Some(1)`, and only a pagination click may carry any other page.
//! `SalesController::dispatch` is the one place that builds patches and it
//! honours this for every event.

use super::dropdowns::Dimension;
use crate::shared::date_utils::format_date_input;
use crate::shared::query::{serialize, QueryParams, QueryValue};
use chrono::NaiveDate;
use contracts::enums::sales_sort::{sort_option_code, SortBy, SortOrder};

/// Rows per page; there is no control to change it during a session
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Canonical query of the sales list
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search_name: String,
    pub search_phone: String,
    pub customer_region: Vec<String>,
    pub gender: Vec<String>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    pub product_category: Vec<String>,
    pub tags: Vec<String>,
    pub payment_method: Vec<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    /// 1-based
    pub page: u32,
    pub page_size: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl FilterState {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            search_name: String::new(),
            search_phone: String::new(),
            customer_region: Vec::new(),
            gender: Vec::new(),
            age_min: None,
            age_max: None,
            product_category: Vec::new(),
            tags: Vec::new(),
            payment_method: Vec::new(),
            date_from: None,
            date_to: None,
            sort_by: SortBy::Date,
            sort_order: SortOrder::Desc,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Parameters in wire order, multi-valued fields already comma-joined
    pub fn query_params(&self) -> QueryParams {
        vec![
            ("search_name", self.search_name.as_str().into()),
            ("search_phone", self.search_phone.as_str().into()),
            (Dimension::Region.query_key(), self.customer_region.join(",").into()),
            (Dimension::Gender.query_key(), self.gender.join(",").into()),
            ("age_min", self.age_min.into()),
            ("age_max", self.age_max.into()),
            (Dimension::Category.query_key(), self.product_category.join(",").into()),
            (Dimension::Tags.query_key(), self.tags.join(",").into()),
            (Dimension::Payment.query_key(), self.payment_method.join(",").into()),
            ("date_from", date_param(self.date_from)),
            ("date_to", date_param(self.date_to)),
            ("sort_by", self.sort_by.code().into()),
            ("sort_order", self.sort_order.code().into()),
            ("page", self.page.into()),
            ("page_size", self.page_size.into()),
        ]
    }

    /// Pairs actually sent to the server
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        serialize(&self.query_params())
    }

    /// Value of the sort selector, e.g. `date_desc`
    pub fn sort_option(&self) -> String {
        sort_option_code(self.sort_by, self.sort_order)
    }

    /// Number of narrowing inputs in use (search, dropdowns, ranges)
    pub fn active_filters_count(&self) -> usize {
        [
            !self.search_name.trim().is_empty(),
            !self.search_phone.trim().is_empty(),
            !self.customer_region.is_empty(),
            !self.gender.is_empty(),
            self.age_min.is_some() || self.age_max.is_some(),
            !self.product_category.is_empty(),
            !self.tags.is_empty(),
            !self.payment_method.is_empty(),
            self.date_from.is_some() || self.date_to.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }
}

fn date_param(date: Option<NaiveDate>) -> QueryValue {
    date.map(|d| format_date_input(Some(d)).into())
        .unwrap_or(QueryValue::Absent)
}

/// Partial update of `FilterState`; `None` leaves a field untouched.
///
/// Optional fields use `Option<Option<_>>`: `Some(None)` clears the value.
/// There is no `page_size` field, it is fixed once the store is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub search_name: Option<String>,
    pub search_phone: Option<String>,
    pub customer_region: Option<Vec<String>>,
    pub gender: Option<Vec<String>>,
    pub age_min: Option<Option<u32>>,
    pub age_max: Option<Option<u32>>,
    pub product_category: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub payment_method: Option<Vec<String>>,
    pub date_from: Option<Option<NaiveDate>>,
    pub date_to: Option<Option<NaiveDate>>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
}

impl FilterPatch {
    /// Patch that only moves to another page
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }

    /// Same patch, with the page reset to 1
    pub fn first_page(self) -> Self {
        Self {
            page: Some(1),
            ..self
        }
    }
}

/// Owner of the current `FilterState`
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    state: FilterState,
}

impl FilterStore {
    pub fn new(page_size: u32) -> Self {
        Self {
            state: FilterState::with_page_size(page_size),
        }
    }

    /// Shallow merge: every `Some` field replaces the current value
    pub fn merge(&mut self, patch: FilterPatch) {
        let s = &mut self.state;
        if let Some(v) = patch.search_name {
            s.search_name = v;
        }
        if let Some(v) = patch.search_phone {
            s.search_phone = v;
        }
        if let Some(v) = patch.customer_region {
            s.customer_region = v;
        }
        if let Some(v) = patch.gender {
            s.gender = v;
        }
        if let Some(v) = patch.age_min {
            s.age_min = v;
        }
        if let Some(v) = patch.age_max {
            s.age_max = v;
        }
        if let Some(v) = patch.product_category {
            s.product_category = v;
        }
        if let Some(v) = patch.tags {
            s.tags = v;
        }
        if let Some(v) = patch.payment_method {
            s.payment_method = v;
        }
        if let Some(v) = patch.date_from {
            s.date_from = v;
        }
        if let Some(v) = patch.date_to {
            s.date_to = v;
        }
        if let Some(v) = patch.sort_by {
            s.sort_by = v;
        }
        if let Some(v) = patch.sort_order {
            s.sort_order = v;
        }
        if let Some(v) = patch.page {
            s.page = v.max(1);
        }
    }

    /// Owned copy for serialization or an in-flight request
    pub fn snapshot(&self) -> FilterState {
        self.state.clone()
    }

    /// Read access without cloning
    pub fn current(&self) -> &FilterState {
        &self.state
    }

    /// Back to defaults; the session's page size is kept
    pub fn reset(&mut self) {
        self.state = FilterState::with_page_size(self.state.page_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 10);
        assert_eq!(state.sort_by, SortBy::Date);
        assert_eq!(state.sort_order, SortOrder::Desc);
        assert_eq!(state.sort_option(), "date_desc");
        assert_eq!(state.active_filters_count(), 0);
    }

    #[test]
    fn test_default_query_sends_only_sort_and_paging() {
        let pairs = FilterState::default().to_query();
        assert_eq!(
            pairs,
            vec![
                ("sort_by", "date".to_string()),
                ("sort_order", "desc".to_string()),
                ("page", "1".to_string()),
                ("page_size", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_multi_values_are_comma_joined_in_selection_order() {
        let mut store = FilterStore::default();
        store.merge(FilterPatch {
            customer_region: Some(vec!["South".into(), "East".into()]),
            tags: Some(vec!["organic".into()]),
            ..Default::default()
        });

        let pairs = store.snapshot().to_query();
        assert!(pairs.contains(&("customer_region", "South,East".to_string())));
        assert!(pairs.contains(&("tags", "organic".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "gender"));
    }

    #[test]
    fn test_dropdown_selections_use_dimension_keys_in_wire_order() {
        let mut store = FilterStore::default();
        store.merge(FilterPatch {
            customer_region: Some(vec!["North".into()]),
            gender: Some(vec!["Female".into()]),
            product_category: Some(vec!["Beauty".into()]),
            tags: Some(vec!["organic".into()]),
            payment_method: Some(vec!["UPI".into()]),
            ..Default::default()
        });

        let keys: Vec<&str> = store
            .snapshot()
            .to_query()
            .into_iter()
            .map(|(k, _)| k)
            .filter(|k| Dimension::all().iter().any(|d| d.query_key() == *k))
            .collect();
        assert_eq!(
            keys,
            ["customer_region", "gender", "product_category", "tags", "payment_method"]
        );
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut store = FilterStore::default();
        store.merge(FilterPatch {
            search_name: Some("Asha".into()),
            age_min: Some(Some(20)),
            page: Some(4),
            ..Default::default()
        });
        store.merge(FilterPatch {
            age_max: Some(Some(40)),
            ..Default::default()
        });

        let s = store.snapshot();
        assert_eq!(s.search_name, "Asha");
        assert_eq!(s.age_min, Some(20));
        assert_eq!(s.age_max, Some(40));
        // merge alone never resets the page
        assert_eq!(s.page, 4);
    }

    #[test]
    fn test_merge_can_clear_optional_fields() {
        let mut store = FilterStore::default();
        store.merge(FilterPatch {
            date_from: Some(NaiveDate::from_ymd_opt(2023, 1, 1)),
            ..Default::default()
        });
        store.merge(FilterPatch {
            date_from: Some(None),
            ..Default::default()
        });
        assert_eq!(store.current().date_from, None);
    }

    #[test]
    fn test_page_never_drops_below_one() {
        let mut store = FilterStore::default();
        store.merge(FilterPatch::page(0));
        assert_eq!(store.current().page, 1);
    }

    #[test]
    fn test_first_page_overrides_page() {
        let patch = FilterPatch {
            search_phone: Some("98".into()),
            page: Some(7),
            ..Default::default()
        }
        .first_page();
        assert_eq!(patch.page, Some(1));
        assert_eq!(patch.search_phone.as_deref(), Some("98"));
    }

    #[test]
    fn test_reset_restores_defaults_and_keeps_page_size() {
        let mut store = FilterStore::new(25);
        store.merge(FilterPatch {
            search_name: Some("Ravi".into()),
            gender: Some(vec!["Male".into()]),
            sort_by: Some(SortBy::Quantity),
            sort_order: Some(SortOrder::Asc),
            page: Some(3),
            ..Default::default()
        });

        store.reset();

        assert_eq!(store.snapshot(), FilterState::with_page_size(25));
        assert_eq!(store.current().sort_option(), "date_desc");
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let mut store = FilterStore::default();
        store.merge(FilterPatch {
            date_from: Some(NaiveDate::from_ymd_opt(2023, 2, 1)),
            date_to: Some(NaiveDate::from_ymd_opt(2023, 2, 28)),
            ..Default::default()
        });

        let pairs = store.snapshot().to_query();
        assert!(pairs.contains(&("date_from", "2023-02-01".to_string())));
        assert!(pairs.contains(&("date_to", "2023-02-28".to_string())));
        assert_eq!(store.current().active_filters_count(), 1);
    }
}
