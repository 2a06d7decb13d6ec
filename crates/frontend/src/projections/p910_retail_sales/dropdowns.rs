//! Selections of the five multi-select dropdowns
//!
//! Each dimension keeps its values in the order they were picked. The first
//! picked value is the one shown on the button, so the order is part of the
//! behaviour and must not be sorted.

use super::state::FilterPatch;
use contracts::projections::p910_retail_sales::dto::FilterMetadata;

/// One independently toggleable filter axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Region,
    Gender,
    Category,
    Tags,
    Payment,
}

impl Dimension {
    pub fn all() -> [Dimension; 5] {
        [
            Dimension::Region,
            Dimension::Gender,
            Dimension::Category,
            Dimension::Tags,
            Dimension::Payment,
        ]
    }

    /// Button text while nothing is selected
    pub fn default_label(&self) -> &'static str {
        match self {
            Dimension::Region => "Region",
            Dimension::Gender => "Gender",
            Dimension::Category => "Product Category",
            Dimension::Tags => "Tags",
            Dimension::Payment => "Payment",
        }
    }

    /// Query parameter (and metadata key) of the dimension
    pub fn query_key(&self) -> &'static str {
        match self {
            Dimension::Region => "customer_region",
            Dimension::Gender => "gender",
            Dimension::Category => "product_category",
            Dimension::Tags => "tags",
            Dimension::Payment => "payment_method",
        }
    }

    /// Option values offered for this dimension
    pub fn options<'a>(&self, metadata: &'a FilterMetadata) -> &'a [String] {
        match self {
            Dimension::Region => &metadata.customer_region,
            Dimension::Gender => &metadata.gender,
            Dimension::Category => &metadata.product_category,
            Dimension::Tags => &metadata.tags,
            Dimension::Payment => &metadata.payment_method,
        }
    }
}

/// Ordered set of selected values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    /// Remove the value if present, otherwise append it.
    /// Returns `true` when the value is selected afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(idx) => {
                self.values.remove(idx);
                false
            }
            None => {
                self.values.push(value.to_string());
                true
            }
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// "" → default, one value → the value, more → "{first} (+{n-1})"
    pub fn label(&self, default_label: &str) -> String {
        match self.values.as_slice() {
            [] => default_label.to_string(),
            [only] => only.clone(),
            [first, rest @ ..] => format!("{} (+{})", first, rest.len()),
        }
    }
}

/// Selections of all dimensions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    region: Selection,
    gender: Selection,
    category: Selection,
    tags: Selection,
    payment: Selection,
}

impl DropdownState {
    pub fn selection(&self, dimension: Dimension) -> &Selection {
        match dimension {
            Dimension::Region => &self.region,
            Dimension::Gender => &self.gender,
            Dimension::Category => &self.category,
            Dimension::Tags => &self.tags,
            Dimension::Payment => &self.payment,
        }
    }

    fn selection_mut(&mut self, dimension: Dimension) -> &mut Selection {
        match dimension {
            Dimension::Region => &mut self.region,
            Dimension::Gender => &mut self.gender,
            Dimension::Category => &mut self.category,
            Dimension::Tags => &mut self.tags,
            Dimension::Payment => &mut self.payment,
        }
    }

    pub fn toggle(&mut self, dimension: Dimension, value: &str) -> bool {
        self.selection_mut(dimension).toggle(value)
    }

    pub fn label(&self, dimension: Dimension) -> String {
        self.selection(dimension).label(dimension.default_label())
    }

    pub fn reset(&mut self) {
        for dimension in Dimension::all() {
            self.selection_mut(dimension).clear();
        }
    }

    /// Patch carrying every dimension's selection. The page is NOT touched
    /// here; callers chain `.first_page()`.
    pub fn to_patch(&self) -> FilterPatch {
        FilterPatch {
            customer_region: Some(self.region.values().to_vec()),
            gender: Some(self.gender.values().to_vec()),
            product_category: Some(self.category.values().to_vec()),
            tags: Some(self.tags.values().to_vec()),
            payment_method: Some(self.payment.values().to_vec()),
            ..Default::default()
        }
    }
}
