use super::state::FilterState;
use crate::shared::api_error::{check_status, ApiError, ApiResult};
use crate::shared::api_utils::api_url;
use crate::shared::query::with_query;
use contracts::projections::p910_retail_sales::dto::{FilterMetadata, SalesListResponse};
use gloo_net::http::Request;

/// URL of `GET /sales` for the given filters
pub fn sales_url(state: &FilterState) -> String {
    with_query(&api_url("/sales"), &state.to_query())
}

/// Fetch one page of sales for the given filters
///
/// Single attempt: no retry, no timeout, never cancelled.
pub async fn fetch_sales(state: &FilterState) -> ApiResult<SalesListResponse> {
    let url = sales_url(state);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    check_status(response.status())?;

    let data: SalesListResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(data)
}

/// Fetch the option values of the dropdown filters
pub async fn fetch_filter_metadata() -> ApiResult<FilterMetadata> {
    let url = api_url("/filters");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    check_status(response.status())?;

    let data: FilterMetadata = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(data)
}
