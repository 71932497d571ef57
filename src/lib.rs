pub mod app;
pub mod config;
pub mod models;
pub mod quiz;
pub mod ui;
pub mod utils;
