use chrono::{NaiveDate, Timelike};

use crate::models::appointment::Appointment;

/// Appointments on `date`, earliest first.
///
/// Recomputed on every call; the session holds only a few hundred records.
pub fn appointments_on_date<'a, I>(all: I, date: NaiveDate) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let mut matches: Vec<&Appointment> = all.into_iter().filter(|a| a.date == date).collect();
    matches.sort_by_key(|a| a.time);
    matches
}

/// Entries from one day's list whose start falls in `hour`.
pub fn appointments_in_hour<'a>(
    day_appointments: &[&'a Appointment],
    hour: u32,
) -> Vec<&'a Appointment> {
    day_appointments
        .iter()
        .copied()
        .filter(|a| a.time.hour() == hour)
        .collect()
}

/// Whether anything is booked on `date` (mini-month markers).
pub fn has_appointments_on<'a, I>(all: I, date: NaiveDate) -> bool
where
    I: IntoIterator<Item = &'a Appointment>,
{
    all.into_iter().any(|a| a.date == date)
}
