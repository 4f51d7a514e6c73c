use super::fields::Meridiem;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Time of day as the user edits it
///
/// `hours` is the display hour: 0-23 in 24-hour mode, 1-12 together with a
/// `meridiem` in 12-hour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub meridiem: Option<Meridiem>,
}

impl TimeOfDay {
    /// Build from a 24-hour cron hour, converting for display when needed
    pub fn from_cron(hour24: u8, minutes: u8, seconds: u8, use_24_hour_time: bool) -> Self {
        let (hours, meridiem) = display_hour(hour24, use_24_hour_time);
        Self {
            hours,
            minutes,
            seconds,
            meridiem,
        }
    }

    pub fn from_naive(time: NaiveTime, use_24_hour_time: bool) -> Self {
        Self::from_cron(
            time.hour() as u8,
            time.minute() as u8,
            time.second() as u8,
            use_24_hour_time,
        )
    }

    /// The 24-hour value written into the hours field
    pub fn cron_hour(&self, use_24_hour_time: bool) -> u8 {
        hour_to_cron(self.hours, self.meridiem, use_24_hour_time)
    }
}

/// Convert a 24-hour value into its display form.
///
/// 12-hour mode maps 0 to 12 AM and 13-23 to 1-11 PM.
pub fn display_hour(hour24: u8, use_24_hour_time: bool) -> (u8, Option<Meridiem>) {
    if use_24_hour_time {
        return (hour24, None);
    }
    let meridiem = if hour24 >= 12 { Meridiem::Pm } else { Meridiem::Am };
    let hours = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    (hours, Some(meridiem))
}

/// Convert a display hour back into the 24-hour cron value.
///
/// A display hour without a meridiem passes through unchanged. Out-of-range
/// PM hours saturate and are left for the grammar check to reject.
pub fn hour_to_cron(hours: u8, meridiem: Option<Meridiem>, use_24_hour_time: bool) -> u8 {
    if use_24_hour_time {
        return hours;
    }
    match meridiem {
        Some(Meridiem::Am) if hours == 12 => 0,
        Some(Meridiem::Am) => hours,
        Some(Meridiem::Pm) if hours == 12 => 12,
        Some(Meridiem::Pm) => hours.saturating_add(12),
        None => hours,
    }
}
