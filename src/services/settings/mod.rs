//! Configuration file handling.

mod service;

pub use service::SettingsService;
