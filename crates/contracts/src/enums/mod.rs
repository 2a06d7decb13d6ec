pub mod sales_sort;
