use serde::{Deserialize, Serialize};

/// Column the sales list is ordered by on the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Date,
    Quantity,
    CustomerName,
}

impl SortBy {
    /// Query-string code understood by `/sales`
    pub fn code(&self) -> &'static str {
        match self {
            SortBy::Date => "date",
            SortBy::Quantity => "quantity",
            SortBy::CustomerName => "customer_name",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "date" => Some(SortBy::Date),
            "quantity" => Some(SortBy::Quantity),
            "customer_name" => Some(SortBy::CustomerName),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Entries of the sort selector: `(value, label)`.
///
/// The value is `{sort_by}_{sort_order}`, e.g. `customer_name_asc`.
pub const SORT_OPTIONS: [(&str, &str); 6] = [
    ("date_desc", "Date (Newest First)"),
    ("date_asc", "Date (Oldest First)"),
    ("quantity_desc", "Quantity (High to Low)"),
    ("quantity_asc", "Quantity (Low to High)"),
    ("customer_name_asc", "Customer Name (A-Z)"),
    ("customer_name_desc", "Customer Name (Z-A)"),
];

/// Build the selector value for a sort pair
pub fn sort_option_code(sort_by: SortBy, sort_order: SortOrder) -> String {
    format!("{}_{}", sort_by.code(), sort_order.code())
}

/// Parse a selector value back into a sort pair.
///
/// Anything unrecognised falls back to newest-first by date.
pub fn parse_sort_option(value: &str) -> (SortBy, SortOrder) {
    value
        .trim()
        .rsplit_once('_')
        .and_then(|(by, order)| Some((SortBy::from_code(by)?, SortOrder::from_code(order)?)))
        .unwrap_or((SortBy::Date, SortOrder::Desc))
}
