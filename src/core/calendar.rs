//! Calendar-day filtering and the half-hour day grid.
//!
//! Days are compared as calendar days only. "Today" is always computed from an
//! explicit instant and timezone so results never depend on the host's clock or
//! locale.

use super::assembler::AppointmentView;
use crate::{
    errors::{Error, Result},
    models::TimeOfDay,
};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Width of one grid slot.
pub const SLOT_MINUTES: u8 = 30;
/// Number of slots in one day.
pub const SLOTS_PER_DAY: usize = 48;

/// Views whose date equals `target`, in their original order.
#[must_use]
pub fn filter_by_date(views: &[AppointmentView], target: NaiveDate) -> Vec<AppointmentView> {
    views
        .iter()
        .filter(|view| view.date == target)
        .cloned()
        .collect()
}

/// The half-hour slot a time falls in: minutes below 30 round to `:00`, the
/// rest to `:30`.
#[must_use]
pub const fn nearest_half_hour_slot(time: TimeOfDay) -> TimeOfDay {
    time.floor_to(SLOT_MINUTES)
}

/// All 48 slot start times of a day, from `00:00` to `23:30`.
#[must_use]
pub fn day_slots() -> Vec<TimeOfDay> {
    (0..24u8)
        .flat_map(|hour| [0, SLOT_MINUTES].map(|minute| TimeOfDay::new(hour, minute)))
        .flatten()
        .collect()
}

/// Appointments of one day bucketed into half-hour slots.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule<'a> {
    /// The day shown
    pub date: NaiveDate,
    /// Every slot of the day with the appointments starting in it
    pub slots: Vec<(TimeOfDay, Vec<&'a AppointmentView>)>,
}

impl<'a> DaySchedule<'a> {
    /// Slots that have at least one appointment.
    pub fn busy_slots(&self) -> impl Iterator<Item = &(TimeOfDay, Vec<&'a AppointmentView>)> {
        self.slots.iter().filter(|(_, views)| !views.is_empty())
    }

    /// Number of appointments on the day.
    #[must_use]
    pub fn appointment_count(&self) -> usize {
        self.slots.iter().map(|(_, views)| views.len()).sum()
    }
}

/// Builds the grid for `day`. Within a slot, appointments keep their input order.
#[must_use]
pub fn schedule_for_day(views: &[AppointmentView], day: NaiveDate) -> DaySchedule<'_> {
    let mut slots: Vec<(TimeOfDay, Vec<&AppointmentView>)> =
        day_slots().into_iter().map(|slot| (slot, Vec::new())).collect();

    for view in views.iter().filter(|view| view.date == day) {
        let slot = nearest_half_hour_slot(view.time);
        let index = usize::from(slot.minutes_from_midnight() / u16::from(SLOT_MINUTES));
        if let Some((_, bucket)) = slots.get_mut(index) {
            bucket.push(view);
        }
    }

    DaySchedule { date: day, slots }
}

/// Parses a `YYYY-MM-DD` calendar day.
///
/// # Errors
/// Returns [`Error::InvalidDate`] for anything else.
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })
}

/// The calendar day `now` falls on in `tz`.
#[must_use]
pub fn today_in(tz: Tz, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Parses `input` when given, otherwise uses today in `tz`.
///
/// # Errors
/// Returns [`Error::InvalidDate`] for a malformed day.
pub fn day_or_today(input: Option<&str>, tz: Tz, now: DateTime<Utc>) -> Result<NaiveDate> {
    input.map_or_else(|| Ok(today_in(tz, now)), parse_day)
}
