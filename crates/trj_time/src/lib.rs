//! Calendar-hour arithmetic for the windtrace trajectory tools.
//!
//! The only clock the integrator needs is an integer (year, month, day,
//! hour) tuple that can step forward or backward by exactly one hour,
//! respecting the proleptic Gregorian leap-year rule. There is no
//! sub-hour resolution and no time zone handling beyond a fixed-hour
//! shift applied by the caller.

mod calendar;

pub use calendar::{
    CalendarPoint, is_leap_year, month_length, shift_hours, step_backward, step_forward,
};
