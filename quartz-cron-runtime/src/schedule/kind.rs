use crate::error::CronEditorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level schedule category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleCategory {
    OneTime,
    Minutes,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DailyKind {
    EveryNDays,
    EveryWeekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthlyKind {
    SpecificDayOfMonth,
    SpecificWeekdayOccurrence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearlyKind {
    SpecificMonthDay,
    SpecificMonthWeek,
}

/// Category together with its sub-category, i.e. the active editor tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleKind {
    OneTime,
    Minutes,
    Hourly,
    Daily(DailyKind),
    Weekly,
    Monthly(MonthlyKind),
    Yearly(YearlyKind),
    Advanced,
}

impl ScheduleKind {
    pub fn category(&self) -> ScheduleCategory {
        match self {
            ScheduleKind::OneTime => ScheduleCategory::OneTime,
            ScheduleKind::Minutes => ScheduleCategory::Minutes,
            ScheduleKind::Hourly => ScheduleCategory::Hourly,
            ScheduleKind::Daily(_) => ScheduleCategory::Daily,
            ScheduleKind::Weekly => ScheduleCategory::Weekly,
            ScheduleKind::Monthly(_) => ScheduleCategory::Monthly,
            ScheduleKind::Yearly(_) => ScheduleCategory::Yearly,
            ScheduleKind::Advanced => ScheduleCategory::Advanced,
        }
    }

    /// Tab name in `category[/subTab]` form, accepted back by `FromStr`
    pub fn tab_name(&self) -> &'static str {
        match self {
            ScheduleKind::OneTime => "onetime",
            ScheduleKind::Minutes => "minutes",
            ScheduleKind::Hourly => "hourly",
            ScheduleKind::Daily(DailyKind::EveryNDays) => "daily/everyDays",
            ScheduleKind::Daily(DailyKind::EveryWeekday) => "daily/everyWeekDay",
            ScheduleKind::Weekly => "weekly",
            ScheduleKind::Monthly(MonthlyKind::SpecificDayOfMonth) => "monthly/specificDay",
            ScheduleKind::Monthly(MonthlyKind::SpecificWeekdayOccurrence) => {
                "monthly/specificWeekDay"
            }
            ScheduleKind::Yearly(YearlyKind::SpecificMonthDay) => "yearly/specificMonthDay",
            ScheduleKind::Yearly(YearlyKind::SpecificMonthWeek) => "yearly/specificMonthWeek",
            ScheduleKind::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tab_name())
    }
}

impl FromStr for ScheduleKind {
    type Err = CronEditorError;

    /// Parse a tab selection such as "weekly" or "monthly/specificWeekDay".
    /// Matching is case-insensitive. A bare category selects its first sub-tab.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let (tab, sub_tab) = match lower.split_once('/') {
            Some((tab, sub_tab)) => (tab, Some(sub_tab)),
            None => (lower.as_str(), None),
        };

        let kind = match (tab, sub_tab) {
            ("onetime", None) => ScheduleKind::OneTime,
            ("minutes", None) => ScheduleKind::Minutes,
            ("hourly", None) => ScheduleKind::Hourly,
            ("daily", None | Some("everydays")) => ScheduleKind::Daily(DailyKind::EveryNDays),
            ("daily", Some("everyweekday")) => ScheduleKind::Daily(DailyKind::EveryWeekday),
            ("weekly", None) => ScheduleKind::Weekly,
            ("monthly", None | Some("specificday")) => {
                ScheduleKind::Monthly(MonthlyKind::SpecificDayOfMonth)
            }
            ("monthly", Some("specificweekday")) => {
                ScheduleKind::Monthly(MonthlyKind::SpecificWeekdayOccurrence)
            }
            ("yearly", None | Some("specificmonthday")) => {
                ScheduleKind::Yearly(YearlyKind::SpecificMonthDay)
            }
            ("yearly", Some("specificmonthweek")) => {
                ScheduleKind::Yearly(YearlyKind::SpecificMonthWeek)
            }
            ("advanced", None) => ScheduleKind::Advanced,
            _ => return Err(CronEditorError::InvalidCategorySelection(s.to_string())),
        };
        Ok(kind)
    }
}
