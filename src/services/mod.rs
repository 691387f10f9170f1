// Service module exports

pub mod event;
pub mod persistence;
pub mod range;
pub mod settings;
