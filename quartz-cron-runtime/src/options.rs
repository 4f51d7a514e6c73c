use crate::error::{CronEditorError, Result};
use chrono::NaiveTime;
use serde::Deserialize;
use std::borrow::Cow;

/// Editor configuration, fixed for the lifetime of a [`CronEditor`](crate::CronEditor)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CronOptions {
    /// Omit the leading seconds field from produced expressions
    pub remove_seconds: bool,
    /// Omit the trailing year field from produced expressions
    pub remove_years: bool,
    /// Hide seconds inputs in the UI; forced on by `remove_seconds`
    pub hide_seconds: bool,
    pub use_24_hour_time: bool,
    /// Default time of day for new schedules, `HH:MM:SS`
    pub default_time: String,
}

impl Default for CronOptions {
    fn default() -> Self {
        Self {
            remove_seconds: false,
            remove_years: false,
            hide_seconds: false,
            use_24_hour_time: true,
            default_time: "00:00:00".to_string(),
        }
    }
}

impl CronOptions {
    /// Apply implied settings: removing seconds also hides them
    pub fn normalized(mut self) -> Self {
        if self.remove_seconds {
            self.hide_seconds = true;
        }
        self
    }

    /// Number of space-separated fields an incoming expression must have
    pub fn expected_field_count(&self) -> usize {
        5 + usize::from(!self.remove_seconds) + usize::from(!self.remove_years)
    }

    pub fn default_time_of_day(&self) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(self.default_time.trim(), "%H:%M:%S")
            .map_err(|_| CronEditorError::InvalidDefaultTime(self.default_time.clone()))
    }

    /// Restore a synthetic seconds field so the expression can be checked
    /// against the full Quartz grammar
    pub fn with_seconds_field<'a>(&self, cron: &'a str) -> Cow<'a, str> {
        if self.remove_seconds {
            Cow::Owned(format!("0 {}", cron))
        } else {
            Cow::Borrowed(cron)
        }
    }
}
