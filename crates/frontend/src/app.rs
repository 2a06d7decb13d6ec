use crate::projections::p910_retail_sales::ui::list::RetailSalesList;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <RetailSalesList />
        </ConfigProvider>
    }
}
