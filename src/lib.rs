pub mod app;
pub mod store;
pub mod ui;
