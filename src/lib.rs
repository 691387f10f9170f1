// Calendar Widget Library
// Date ranges, date-keyed event storage and the session controller

pub mod controller;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use controller::{CalendarController, CalendarState};
pub use error::CalendarError;
