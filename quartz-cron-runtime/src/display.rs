//! Human-readable labels for cron field values.

use crate::schedule::{Occurrence, Weekday};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Weekday {
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

impl Occurrence {
    pub fn label(&self) -> &'static str {
        match self {
            Occurrence::First => "First",
            Occurrence::Second => "Second",
            Occurrence::Third => "Third",
            Occurrence::Fourth => "Fourth",
            Occurrence::Fifth => "Fifth",
            Occurrence::Last => "Last",
        }
    }
}

/// Month name for 1..=12
pub fn month_label(month: u8) -> Option<&'static str> {
    MONTHS.get(usize::from(month).checked_sub(1)?).copied()
}

/// Label for a day-of-month token: "L", "LW", "1W" or a day number
pub fn month_day_label(token: &str) -> String {
    match token {
        "L" => "Last Day".to_string(),
        "LW" => "Last Weekday".to_string(),
        "1W" => "First Weekday".to_string(),
        day => format!("{}{} day", day, ordinal_suffix(day)),
    }
}

/// English ordinal suffix of a decimal number ("1" -> "st", "12" -> "th")
pub fn ordinal_suffix(value: &str) -> &'static str {
    let mut digits = value.chars().rev();
    let last = digits.next();
    if digits.next() == Some('1') {
        return "th";
    }
    match last {
        Some('1') => "st",
        Some('2') => "nd",
        Some('3') => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_labels() {
        assert_eq!(month_label(1), Some("January"));
        assert_eq!(month_label(12), Some("December"));
        assert_eq!(month_label(0), None);
        assert_eq!(month_label(13), None);
    }

    #[test]
    fn month_day_labels() {
        assert_eq!(month_day_label("L"), "Last Day");
        assert_eq!(month_day_label("LW"), "Last Weekday");
        assert_eq!(month_day_label("1W"), "First Weekday");
        assert_eq!(month_day_label("1"), "1st day");
        assert_eq!(month_day_label("2"), "2nd day");
        assert_eq!(month_day_label("3"), "3rd day");
        assert_eq!(month_day_label("11"), "11th day");
        assert_eq!(month_day_label("13"), "13th day");
        assert_eq!(month_day_label("22"), "22nd day");
        assert_eq!(month_day_label("31"), "31st day");
    }

    #[test]
    fn weekday_and_occurrence_labels() {
        assert_eq!(Weekday::Wed.label(), "Wednesday");
        assert_eq!(Occurrence::Fourth.label(), "Fourth");
        assert_eq!(Occurrence::Last.label(), "Last");
    }
}
