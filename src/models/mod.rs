// Module exports for models

pub mod appointment;
pub mod patient;
pub mod service;
pub mod settings;
pub mod ui;
