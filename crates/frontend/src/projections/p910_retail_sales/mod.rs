pub mod api;
pub mod controller;
pub mod dropdowns;
pub mod state;
pub mod ui;
