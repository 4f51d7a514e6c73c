//! Build a cron string from structured schedule parameters.

use crate::options::CronOptions;
use crate::schedule::{
    DailySchedule, MonthDay, MonthlySchedule, Schedule, TimeOfDay, YearlySchedule,
};
use chrono::{Datelike, Timelike};
use tracing::debug;

/// Produce the cron expression for `schedule` in the field layout implied
/// by `options`.
///
/// The seconds field is prepended unless `remove_seconds` is set, and `*` is
/// appended as the year unless `remove_years` is set. One-time schedules
/// always carry their literal year. Advanced schedules return their raw text.
pub fn synthesize(schedule: &Schedule, options: &CronOptions) -> String {
    let use_24 = options.use_24_hour_time;

    let (seconds, body) = match schedule {
        Schedule::OneTime(one_time) => {
            let at = one_time.at;
            let body = format!(
                "{:02} {:02} {:02} {:02} ?",
                at.minute(),
                at.hour(),
                at.day(),
                at.month()
            );
            let cron = with_seconds(0, body, options);
            let cron = format!("{} {}", cron, at.year());
            debug!(kind = %schedule.kind(), cron = %cron, "Synthesized cron expression");
            return cron;
        }
        Schedule::Minutes(minutes) => (
            minutes.seconds,
            format!("0/{} * 1/1 * ?", minutes.every_minutes),
        ),
        Schedule::Hourly(hourly) => (
            hourly.seconds,
            format!("{} 0/{} 1/1 * ?", hourly.minutes, hourly.every_hours),
        ),
        Schedule::Daily(DailySchedule::EveryNDays { every_days, time }) => (
            time.seconds,
            format!("{} 1/{} * ?", clock(time, use_24), every_days),
        ),
        Schedule::Daily(DailySchedule::EveryWeekday { time }) => {
            (time.seconds, format!("{} ? * MON-FRI", clock(time, use_24)))
        }
        Schedule::Weekly(weekly) => (
            weekly.time.seconds,
            format!("{} ? * {}", clock(&weekly.time, use_24), weekly.days.to_field()),
        ),
        Schedule::Monthly(MonthlySchedule::SpecificDayOfMonth {
            day,
            run_on_weekday,
            every_months,
            time,
        }) => (
            time.seconds,
            format!(
                "{} {} 1/{} ?",
                clock(time, use_24),
                day_field(*day, *run_on_weekday),
                every_months
            ),
        ),
        Schedule::Monthly(MonthlySchedule::SpecificWeekdayOccurrence {
            weekday,
            occurrence,
            start_month,
            every_months,
            time,
        }) => (
            time.seconds,
            format!(
                "{} ? {}/{} {}{}",
                clock(time, use_24),
                start_month,
                every_months,
                weekday,
                occurrence
            ),
        ),
        Schedule::Yearly(YearlySchedule::SpecificMonthDay {
            month,
            day,
            run_on_weekday,
            time,
        }) => (
            time.seconds,
            format!(
                "{} {} {} ?",
                clock(time, use_24),
                day_field(*day, *run_on_weekday),
                month
            ),
        ),
        Schedule::Yearly(YearlySchedule::SpecificMonthWeek {
            month,
            weekday,
            occurrence,
            time,
        }) => (
            time.seconds,
            format!("{} ? {} {}{}", clock(time, use_24), month, weekday, occurrence),
        ),
        Schedule::Advanced(advanced) => return advanced.expression.clone(),
    };

    let mut cron = with_seconds(seconds, body, options);
    if !options.remove_years {
        cron.push_str(" *");
    }
    debug!(kind = %schedule.kind(), cron = %cron, "Synthesized cron expression");
    cron
}

/// "{minutes} {hours}" with the hour converted to its 24-hour cron value
fn clock(time: &TimeOfDay, use_24_hour_time: bool) -> String {
    format!("{} {}", time.minutes, time.cron_hour(use_24_hour_time))
}

fn day_field(day: MonthDay, run_on_weekday: bool) -> String {
    if run_on_weekday {
        format!("{}W", day)
    } else {
        day.to_string()
    }
}

fn with_seconds(seconds: u8, body: String, options: &CronOptions) -> String {
    if options.remove_seconds {
        body
    } else {
        format!("{} {}", seconds, body)
    }
}
