// Service module exports
// Session data, synthetic seeding and configuration loading

pub mod appointment;
pub mod generator;
pub mod patient;
pub mod settings;
