pub mod config;
pub mod content;
pub mod forms;
pub mod i18n;
pub mod metrics;
pub mod pages;
pub mod retry;
pub mod server;
pub mod submission;
