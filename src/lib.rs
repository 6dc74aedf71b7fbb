pub mod charts;
pub mod config;
pub mod models;
pub mod ui;
