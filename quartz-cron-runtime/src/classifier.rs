//! Recover structured schedule parameters from a cron string.
//!
//! The incoming expression is normalized to the seven-field form (seconds
//! through year), then tried against an ordered table of templates. The first
//! template whose predicate matches extracts the parameters. Templates overlap,
//! so their order is part of the behavior. Anything unmatched becomes an
//! advanced schedule holding the original text.

use crate::options::CronOptions;
use crate::schedule::{
    AdvancedSchedule, DailySchedule, HourlySchedule, MinutesSchedule, MonthDay, MonthlySchedule,
    Occurrence, Schedule, TimeOfDay, Weekday, WeekdaySet, WeeklySchedule, YearlySchedule,
};
use tracing::debug;

/// Seven fields of a normalized expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CronFields<'a> {
    pub seconds: &'a str,
    pub minutes: &'a str,
    pub hours: &'a str,
    pub day_of_month: &'a str,
    pub month: &'a str,
    pub day_of_week: &'a str,
    pub year: &'a str,
}

impl<'a> CronFields<'a> {
    /// Split a normalized expression; `None` unless there are exactly seven fields
    pub fn split(normalized: &'a str) -> Option<Self> {
        let parts: Vec<&str> = normalized.split_whitespace().collect();
        let [seconds, minutes, hours, day_of_month, month, day_of_week, year] = parts[..] else {
            return None;
        };
        Some(Self {
            seconds,
            minutes,
            hours,
            day_of_month,
            month,
            day_of_week,
            year,
        })
    }

    /// Seconds, minutes and hours are all plain numbers
    fn fixed_clock(&self) -> bool {
        is_number(self.seconds) && is_number(self.minutes) && is_number(self.hours)
    }

    fn time(&self, options: &CronOptions) -> Option<TimeOfDay> {
        Some(TimeOfDay::from_cron(
            clock_value(self.hours, 23)?,
            clock_value(self.minutes, 59)?,
            clock_value(self.seconds, 59)?,
            options.use_24_hour_time,
        ))
    }
}

/// Bring an expression into the seven-field form, adding a synthetic `0`
/// seconds field and `*` year field where `options` removes them.
pub fn normalize(cron: &str, options: &CronOptions) -> String {
    let mut normalized = cron.trim().to_string();
    if options.remove_seconds {
        normalized = format!("0 {}", normalized);
    }
    if options.remove_years {
        normalized.push_str(" *");
    }
    normalized
}

/// One recognizable expression shape
pub struct Template {
    pub name: &'static str,
    pub matches: fn(&CronFields<'_>) -> bool,
    pub extract: fn(&CronFields<'_>, &CronOptions) -> Option<Schedule>,
}

/// Recognized shapes in match order
pub static TEMPLATES: [Template; 9] = [
    Template {
        name: "minutes",
        matches: |f| {
            is_number(f.seconds)
                && step_from(f.minutes, "0").is_some()
                && f.hours == "*"
                && f.day_of_month == "1/1"
                && f.month == "*"
                && f.day_of_week == "?"
                && f.year == "*"
        },
        extract: |f, _| {
            Some(Schedule::Minutes(MinutesSchedule {
                every_minutes: step_from(f.minutes, "0")?.parse().ok()?,
                seconds: clock_value(f.seconds, 59)?,
            }))
        },
    },
    Template {
        name: "hourly",
        matches: |f| {
            is_number(f.seconds)
                && is_number(f.minutes)
                && step_from(f.hours, "0").is_some()
                && f.day_of_month == "1/1"
                && f.month == "*"
                && f.day_of_week == "?"
                && f.year == "*"
        },
        extract: |f, _| {
            Some(Schedule::Hourly(HourlySchedule {
                every_hours: step_from(f.hours, "0")?.parse().ok()?,
                minutes: clock_value(f.minutes, 59)?,
                seconds: clock_value(f.seconds, 59)?,
            }))
        },
    },
    Template {
        name: "daily/everyDays",
        matches: |f| {
            f.fixed_clock()
                && step_from(f.day_of_month, "1").is_some()
                && f.month == "*"
                && f.day_of_week == "?"
                && f.year == "*"
        },
        extract: |f, options| {
            Some(Schedule::Daily(DailySchedule::EveryNDays {
                every_days: step_from(f.day_of_month, "1")?.parse().ok()?,
                time: f.time(options)?,
            }))
        },
    },
    Template {
        name: "daily/everyWeekDay",
        matches: |f| {
            f.fixed_clock()
                && f.day_of_month == "?"
                && f.month == "*"
                && f.day_of_week == "MON-FRI"
                && f.year == "*"
        },
        extract: |f, options| {
            Some(Schedule::Daily(DailySchedule::EveryWeekday {
                time: f.time(options)?,
            }))
        },
    },
    Template {
        name: "weekly",
        matches: |f| {
            f.fixed_clock()
                && f.day_of_month == "?"
                && f.month == "*"
                && weekday_list(f.day_of_week).is_some()
                && f.year == "*"
        },
        extract: |f, options| {
            Some(Schedule::Weekly(WeeklySchedule {
                days: weekday_list(f.day_of_week)?,
                time: f.time(options)?,
            }))
        },
    },
    Template {
        name: "monthly/specificDay",
        matches: |f| {
            f.fixed_clock()
                && month_day(f.day_of_month).is_some()
                && step_from(f.month, "1").is_some()
                && f.day_of_week == "?"
                && f.year == "*"
        },
        extract: |f, options| {
            let (day, run_on_weekday) = month_day(f.day_of_month)?;
            Some(Schedule::Monthly(MonthlySchedule::SpecificDayOfMonth {
                day,
                run_on_weekday,
                every_months: step_from(f.month, "1")?.parse().ok()?,
                time: f.time(options)?,
            }))
        },
    },
    Template {
        name: "monthly/specificWeekDay",
        matches: |f| {
            f.fixed_clock()
                && f.day_of_month == "?"
                && month_step(f.month).is_some()
                && weekday_occurrence(f.day_of_week).is_some()
                && f.year == "*"
        },
        extract: |f, options| {
            let (start_month, every_months) = month_step(f.month)?;
            let (weekday, occurrence) = weekday_occurrence(f.day_of_week)?;
            Some(Schedule::Monthly(MonthlySchedule::SpecificWeekdayOccurrence {
                weekday,
                occurrence,
                start_month: start_month.parse().ok()?,
                every_months: every_months.parse().ok()?,
                time: f.time(options)?,
            }))
        },
    },
    Template {
        name: "yearly/specificMonthDay",
        matches: |f| {
            f.fixed_clock()
                && month_day(f.day_of_month).is_some()
                && is_number(f.month)
                && f.day_of_week == "?"
                && f.year == "*"
        },
        extract: |f, options| {
            let (day, run_on_weekday) = month_day(f.day_of_month)?;
            Some(Schedule::Yearly(YearlySchedule::SpecificMonthDay {
                month: f.month.parse().ok()?,
                day,
                run_on_weekday,
                time: f.time(options)?,
            }))
        },
    },
    Template {
        name: "yearly/specificMonthWeek",
        matches: |f| {
            f.fixed_clock()
                && f.day_of_month == "?"
                && is_number(f.month)
                && weekday_occurrence(f.day_of_week).is_some()
                && f.year == "*"
        },
        extract: |f, options| {
            let (weekday, occurrence) = weekday_occurrence(f.day_of_week)?;
            Some(Schedule::Yearly(YearlySchedule::SpecificMonthWeek {
                month: f.month.parse().ok()?,
                weekday,
                occurrence,
                time: f.time(options)?,
            }))
        },
    },
];

/// Classify `cron` into a schedule.
///
/// Never fails: unrecognized input, including input with the wrong number of
/// fields, becomes [`Schedule::Advanced`] holding `cron` verbatim.
pub fn classify(cron: &str, options: &CronOptions) -> Schedule {
    let normalized = normalize(cron, options);

    let recognized = CronFields::split(&normalized).and_then(|fields| {
        let template = TEMPLATES.iter().find(|t| (t.matches)(&fields))?;
        let schedule = (template.extract)(&fields, options);
        debug!(
            template = template.name,
            extracted = schedule.is_some(),
            "Cron expression matched template"
        );
        schedule
    });

    recognized.unwrap_or_else(|| {
        debug!(cron = %cron, "No template matched, classifying as advanced");
        Schedule::Advanced(AdvancedSchedule {
            expression: cron.to_string(),
        })
    })
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A seconds, minutes or hours value no greater than `max`
fn clock_value(field: &str, max: u8) -> Option<u8> {
    field.parse().ok().filter(|value| *value <= max)
}

/// The step of `"{start}/N"`
fn step_from<'a>(field: &'a str, start: &str) -> Option<&'a str> {
    let step = field.strip_prefix(start)?.strip_prefix('/')?;
    is_number(step).then_some(step)
}

/// `"M1/M2"` with both sides numeric
fn month_step(field: &str) -> Option<(&str, &str)> {
    let (start, step) = field.split_once('/')?;
    (is_number(start) && is_number(step)).then_some((start, step))
}

/// Day-of-month token: a day number or `L`, with an optional `W` suffix
fn month_day(field: &str) -> Option<(MonthDay, bool)> {
    let (day, run_on_weekday) = match field.strip_suffix('W') {
        Some(day) => (day, true),
        None => (field, false),
    };
    if day != "L" && !is_number(day) {
        return None;
    }
    Some((day.parse().ok()?, run_on_weekday))
}

/// Comma list of weekday codes, e.g. "MON,WED"
fn weekday_list(field: &str) -> Option<WeekdaySet> {
    field.split(',').map(Weekday::from_code).collect()
}

/// Weekday code followed by `#1`..`#5` or `L`, e.g. "FRI#2"
fn weekday_occurrence(field: &str) -> Option<(Weekday, Occurrence)> {
    let code = field.get(..3)?;
    let suffix = field.get(3..)?;
    Some((Weekday::from_code(code)?, Occurrence::from_code(suffix)?))
}
