//! Table cell for rupee amounts
//!
//! ```rust,ignore
//! <TableCellMoney value=Signal::derive(move || row_amount) />
//! ```

use super::number_format::format_inr;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned amount with the `₹ ` prefix and en-IN digit grouping;
/// a missing value renders as `-`.
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,
) -> impl IntoView {
    view! {
        <TableCell class="text-right">
            <span style="white-space: nowrap;">
                {move || format_inr(value.get())}
            </span>
        </TableCell>
    }
}
