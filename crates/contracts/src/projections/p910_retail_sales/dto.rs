use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One sales transaction row as returned by `GET /sales` (P910)
///
/// Every field is optional: the dataset is a flat CSV import and the client
/// renders `-` for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesRecordDto {
    // Identifiers (may arrive as numbers or strings)
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,

    // Customer
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub customer_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub customer_region: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub customer_type: Option<String>,

    // Product
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub product_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub product_category: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub tags: Option<String>,

    // Sums
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub price_per_unit: Option<f64>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub final_amount: Option<f64>,

    // Order info
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub order_status: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub delivery_type: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub store_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub store_location: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub salesperson_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub employee_name: Option<String>,
}

impl SalesRecordDto {
    /// Amount shown in the table: total, or final when the total is missing
    pub fn display_amount(&self) -> Option<f64> {
        self.total_amount.or(self.final_amount)
    }
}

/// Aggregates over the whole filtered dataset (not just the current page)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesStatsDto {
    #[serde(default)]
    pub total_quantity: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub total_discount: Option<f64>,
}

/// Page of sales returned by `GET /sales`
///
/// Numeric fields are optional because the client falls back to the values
/// it asked for when the server leaves them out (or sends zero).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesListResponse {
    #[serde(default)]
    pub items: Vec<SalesRecordDto>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_items: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub stats: Option<SalesStatsDto>,
}

impl SalesListResponse {
    pub fn page_or(&self, requested: u32) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(requested)
    }

    pub fn page_size_or(&self, requested: u32) -> u32 {
        self.page_size.filter(|s| *s > 0).unwrap_or(requested)
    }

    pub fn total_items(&self) -> u64 {
        self.total_items.unwrap_or(0)
    }

    /// Missing or zero means "no pagination needed"
    pub fn total_pages(&self) -> u32 {
        self.total_pages.filter(|t| *t > 0).unwrap_or(1)
    }
}

/// Distinct option values for the dropdown filters (`GET /filters`)
///
/// A missing or malformed list turns into an empty one so that a broken
/// dimension never takes the other dropdowns down with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterMetadata {
    #[serde(default, deserialize_with = "string_list")]
    pub customer_region: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub gender: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub product_category: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub payment_method: Vec<String>,
}

fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
