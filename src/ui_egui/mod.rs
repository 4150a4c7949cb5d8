mod app;
mod appointment_dialog;
pub mod drag;
pub mod shortcuts;
pub mod theme;
pub mod views;

pub use app::ClinicApp;
pub use appointment_dialog::time_slots;
