//! Structured schedule parameters, one variant per editor tab.

mod fields;
mod kind;
mod time;

pub use fields::{Meridiem, MonthDay, Occurrence, Weekday, WeekdaySet};
pub use kind::{DailyKind, MonthlyKind, ScheduleCategory, ScheduleKind, YearlyKind};
pub use time::{display_hour, hour_to_cron, TimeOfDay};

use crate::error::Result;
use crate::options::CronOptions;
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Parameters of the active schedule
///
/// Exactly one variant is active, and it always agrees with [`Schedule::kind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Schedule {
    OneTime(OneTimeSchedule),
    Minutes(MinutesSchedule),
    Hourly(HourlySchedule),
    Daily(DailySchedule),
    Weekly(WeeklySchedule),
    Monthly(MonthlySchedule),
    Yearly(YearlySchedule),
    Advanced(AdvancedSchedule),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeSchedule {
    pub at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinutesSchedule {
    pub every_minutes: u32,
    pub seconds: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlySchedule {
    pub every_hours: u32,
    pub minutes: u8,
    pub seconds: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DailySchedule {
    EveryNDays { every_days: u32, time: TimeOfDay },
    EveryWeekday { time: TimeOfDay },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub days: WeekdaySet,
    pub time: TimeOfDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MonthlySchedule {
    SpecificDayOfMonth {
        day: MonthDay,
        /// Run on the nearest weekday (`W` suffix)
        run_on_weekday: bool,
        every_months: u32,
        time: TimeOfDay,
    },
    SpecificWeekdayOccurrence {
        weekday: Weekday,
        occurrence: Occurrence,
        start_month: u8,
        every_months: u32,
        time: TimeOfDay,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum YearlySchedule {
    SpecificMonthDay {
        month: u8,
        day: MonthDay,
        run_on_weekday: bool,
        time: TimeOfDay,
    },
    SpecificMonthWeek {
        month: u8,
        weekday: Weekday,
        occurrence: Occurrence,
        time: TimeOfDay,
    },
}

/// Raw expression kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedSchedule {
    pub expression: String,
}

impl Schedule {
    pub fn kind(&self) -> ScheduleKind {
        match self {
            Schedule::OneTime(_) => ScheduleKind::OneTime,
            Schedule::Minutes(_) => ScheduleKind::Minutes,
            Schedule::Hourly(_) => ScheduleKind::Hourly,
            Schedule::Daily(DailySchedule::EveryNDays { .. }) => {
                ScheduleKind::Daily(DailyKind::EveryNDays)
            }
            Schedule::Daily(DailySchedule::EveryWeekday { .. }) => {
                ScheduleKind::Daily(DailyKind::EveryWeekday)
            }
            Schedule::Weekly(_) => ScheduleKind::Weekly,
            Schedule::Monthly(MonthlySchedule::SpecificDayOfMonth { .. }) => {
                ScheduleKind::Monthly(MonthlyKind::SpecificDayOfMonth)
            }
            Schedule::Monthly(MonthlySchedule::SpecificWeekdayOccurrence { .. }) => {
                ScheduleKind::Monthly(MonthlyKind::SpecificWeekdayOccurrence)
            }
            Schedule::Yearly(YearlySchedule::SpecificMonthDay { .. }) => {
                ScheduleKind::Yearly(YearlyKind::SpecificMonthDay)
            }
            Schedule::Yearly(YearlySchedule::SpecificMonthWeek { .. }) => {
                ScheduleKind::Yearly(YearlyKind::SpecificMonthWeek)
            }
            Schedule::Advanced(_) => ScheduleKind::Advanced,
        }
    }

    pub fn category(&self) -> ScheduleCategory {
        self.kind().category()
    }

    /// Initial parameters for a freshly selected tab
    ///
    /// Fails only when `options.default_time` cannot be parsed.
    pub fn default_for(kind: ScheduleKind, options: &CronOptions) -> Result<Self> {
        let time = TimeOfDay::from_naive(options.default_time_of_day()?, options.use_24_hour_time);

        let schedule = match kind {
            ScheduleKind::OneTime => {
                let now = Local::now().naive_local();
                let at = now
                    .with_second(0)
                    .and_then(|dt| dt.with_nanosecond(0))
                    .unwrap_or(now);
                Schedule::OneTime(OneTimeSchedule { at })
            }
            ScheduleKind::Minutes => Schedule::Minutes(MinutesSchedule {
                every_minutes: 1,
                seconds: 0,
            }),
            ScheduleKind::Hourly => Schedule::Hourly(HourlySchedule {
                every_hours: 1,
                minutes: 0,
                seconds: 0,
            }),
            ScheduleKind::Daily(DailyKind::EveryNDays) => {
                Schedule::Daily(DailySchedule::EveryNDays { every_days: 1, time })
            }
            ScheduleKind::Daily(DailyKind::EveryWeekday) => {
                Schedule::Daily(DailySchedule::EveryWeekday { time })
            }
            ScheduleKind::Weekly => Schedule::Weekly(WeeklySchedule {
                days: [Weekday::Mon].into(),
                time,
            }),
            ScheduleKind::Monthly(MonthlyKind::SpecificDayOfMonth) => {
                Schedule::Monthly(MonthlySchedule::SpecificDayOfMonth {
                    day: MonthDay::Day(1),
                    run_on_weekday: false,
                    every_months: 1,
                    time,
                })
            }
            ScheduleKind::Monthly(MonthlyKind::SpecificWeekdayOccurrence) => {
                Schedule::Monthly(MonthlySchedule::SpecificWeekdayOccurrence {
                    weekday: Weekday::Mon,
                    occurrence: Occurrence::First,
                    start_month: 1,
                    every_months: 1,
                    time,
                })
            }
            ScheduleKind::Yearly(YearlyKind::SpecificMonthDay) => {
                Schedule::Yearly(YearlySchedule::SpecificMonthDay {
                    month: 1,
                    day: MonthDay::Day(1),
                    run_on_weekday: false,
                    time,
                })
            }
            ScheduleKind::Yearly(YearlyKind::SpecificMonthWeek) => {
                Schedule::Yearly(YearlySchedule::SpecificMonthWeek {
                    month: 1,
                    weekday: Weekday::Mon,
                    occurrence: Occurrence::First,
                    time,
                })
            }
            ScheduleKind::Advanced => Schedule::Advanced(AdvancedSchedule {
                expression: default_advanced_expression(options),
            }),
        };
        Ok(schedule)
    }
}

/// Sample expression shown when the advanced tab has no prior content
pub fn default_advanced_expression(options: &CronOptions) -> String {
    match (options.remove_seconds, options.remove_years) {
        (false, false) => "0 15 10 L-2 * ? 2019",
        (true, false) => "15 10 L-2 * ? 2019",
        (false, true) => "0 15 10 L-2 * ?",
        (true, true) => "15 10 L-2 * ?",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_requested_kind() {
        let options = CronOptions::default();
        let kinds = [
            ScheduleKind::OneTime,
            ScheduleKind::Minutes,
            ScheduleKind::Hourly,
            ScheduleKind::Daily(DailyKind::EveryNDays),
            ScheduleKind::Daily(DailyKind::EveryWeekday),
            ScheduleKind::Weekly,
            ScheduleKind::Monthly(MonthlyKind::SpecificDayOfMonth),
            ScheduleKind::Monthly(MonthlyKind::SpecificWeekdayOccurrence),
            ScheduleKind::Yearly(YearlyKind::SpecificMonthDay),
            ScheduleKind::Yearly(YearlyKind::SpecificMonthWeek),
            ScheduleKind::Advanced,
        ];
        for kind in kinds {
            assert_eq!(Schedule::default_for(kind, &options).unwrap().kind(), kind);
        }
    }

    #[test]
    fn defaults_use_default_time() {
        let options = CronOptions {
            default_time: "14:05:30".to_string(),
            use_24_hour_time: false,
            ..CronOptions::default()
        };
        let schedule = Schedule::default_for(ScheduleKind::Weekly, &options).unwrap();
        let Schedule::Weekly(weekly) = schedule else {
            panic!("expected weekly schedule");
        };
        assert_eq!(weekly.time.hours, 2);
        assert_eq!(weekly.time.meridiem, Some(Meridiem::Pm));
        assert_eq!(weekly.time.minutes, 5);
        assert_eq!(weekly.time.seconds, 30);
        assert!(weekly.days.contains(Weekday::Mon));
    }

    #[test]
    fn default_fails_on_bad_default_time() {
        let options = CronOptions {
            default_time: "noon".to_string(),
            ..CronOptions::default()
        };
        assert!(Schedule::default_for(ScheduleKind::Minutes, &options).is_err());
    }

    #[test]
    fn default_advanced_expression_follows_options() {
        let mut options = CronOptions::default();
        assert_eq!(default_advanced_expression(&options), "0 15 10 L-2 * ? 2019");
        options.remove_years = true;
        assert_eq!(default_advanced_expression(&options), "0 15 10 L-2 * ?");
        options.remove_seconds = true;
        assert_eq!(default_advanced_expression(&options), "15 10 L-2 * ?");
    }

    #[test]
    fn serializes_with_category_tag() {
        let schedule = Schedule::Minutes(MinutesSchedule {
            every_minutes: 5,
            seconds: 0,
        });
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["category"], "minutes");
        assert_eq!(json["every_minutes"], 5);
    }
}
