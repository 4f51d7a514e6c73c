use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Day of the week as written in the day-of-week cron field
///
/// Variants are declared in MON..SUN order so that ordering and iteration
/// follow the order used when joining a weekday list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Three-letter upper-case code used in cron strings
    pub fn code(&self) -> &'static str {
        match self {
            Weekday::Mon => "MON",
            Weekday::Tue => "TUE",
            Weekday::Wed => "WED",
            Weekday::Thu => "THU",
            Weekday::Fri => "FRI",
            Weekday::Sat => "SAT",
            Weekday::Sun => "SUN",
        }
    }

    /// Parse an exact upper-case code ("MON"). Classification is case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.code() == code)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Ordered, duplicate-free set of weekdays for the weekly schedule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdaySet(BTreeSet<Weekday>);

impl WeekdaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: Weekday) -> bool {
        self.0.insert(day)
    }

    pub fn remove(&mut self, day: Weekday) -> bool {
        self.0.remove(&day)
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }

    /// Comma-joined codes in MON..SUN order, e.g. "MON,WED,FRI"
    pub fn to_field(&self) -> String {
        self.iter().map(|day| day.code()).collect::<Vec<_>>().join(",")
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Weekday; N]> for WeekdaySet {
    fn from(days: [Weekday; N]) -> Self {
        days.into_iter().collect()
    }
}

/// Which occurrence of a weekday within the month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occurrence {
    #[serde(rename = "#1")]
    First,
    #[serde(rename = "#2")]
    Second,
    #[serde(rename = "#3")]
    Third,
    #[serde(rename = "#4")]
    Fourth,
    #[serde(rename = "#5")]
    Fifth,
    #[serde(rename = "L")]
    Last,
}

impl Occurrence {
    pub const ALL: [Occurrence; 6] = [
        Occurrence::First,
        Occurrence::Second,
        Occurrence::Third,
        Occurrence::Fourth,
        Occurrence::Fifth,
        Occurrence::Last,
    ];

    /// Suffix appended to the weekday code: "#1".."#5" or "L"
    pub fn code(&self) -> &'static str {
        match self {
            Occurrence::First => "#1",
            Occurrence::Second => "#2",
            Occurrence::Third => "#3",
            Occurrence::Fourth => "#4",
            Occurrence::Fifth => "#5",
            Occurrence::Last => "L",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|occurrence| occurrence.code() == code)
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Day-of-month value selectable in the monthly and yearly schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthDay {
    Day(u8),
    Last,
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthDay::Day(day) => write!(f, "{}", day),
            MonthDay::Last => f.write_str("L"),
        }
    }
}

impl FromStr for MonthDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "L" {
            return Ok(MonthDay::Last);
        }
        s.parse::<u8>()
            .map(MonthDay::Day)
            .map_err(|_| format!("Invalid day of month: {}", s))
    }
}

/// AM/PM tag attached to a display hour in 12-hour mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("AM"),
            Meridiem::Pm => f.write_str("PM"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_set_joins_in_fixed_order() {
        let days: WeekdaySet = [Weekday::Fri, Weekday::Mon, Weekday::Wed].into();
        assert_eq!(days.to_field(), "MON,WED,FRI");
    }

    #[test]
    fn weekday_set_ignores_duplicates() {
        let mut days = WeekdaySet::new();
        assert!(days.insert(Weekday::Sun));
        assert!(!days.insert(Weekday::Sun));
        assert_eq!(days.len(), 1);
        assert_eq!(days.to_field(), "SUN");
    }

    #[test]
    fn weekday_codes_are_case_sensitive() {
        assert_eq!(Weekday::from_code("THU"), Some(Weekday::Thu));
        assert_eq!(Weekday::from_code("thu"), None);
    }

    #[test]
    fn occurrence_codes() {
        assert_eq!(Occurrence::from_code("#3"), Some(Occurrence::Third));
        assert_eq!(Occurrence::from_code("L"), Some(Occurrence::Last));
        assert_eq!(Occurrence::from_code("#6"), None);
        assert_eq!(Occurrence::Fifth.to_string(), "#5");
    }

    #[test]
    fn month_day_parses_last_and_numbers() {
        assert_eq!("L".parse::<MonthDay>(), Ok(MonthDay::Last));
        assert_eq!("15".parse::<MonthDay>(), Ok(MonthDay::Day(15)));
        assert!("LW".parse::<MonthDay>().is_err());
        assert_eq!(MonthDay::Day(7).to_string(), "7");
    }

    #[test]
    fn serializes_with_cron_codes() {
        let json = serde_json::to_string(&Occurrence::Last).unwrap();
        assert_eq!(json, "\"L\"");
        let json = serde_json::to_string(&Weekday::Tue).unwrap();
        assert_eq!(json, "\"TUE\"");
    }
}
