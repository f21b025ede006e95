pub mod app;
pub mod browser;
pub mod config;
pub mod core;
pub mod features;
pub mod pages;
