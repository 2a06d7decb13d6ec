pub mod p910_retail_sales;
