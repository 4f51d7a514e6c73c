//! Quartz Cron Runtime - Core logic of the Quartz cron expression editor
//!
//! This crate maps structured schedule parameters to Quartz cron strings and
//! back, and validates strings against the Quartz field grammar.

mod classifier;
mod config;
mod display;
mod editor;
mod error;
mod options;
pub mod schedule;
mod synthesizer;
mod validator;

// Re-export public API
pub use classifier::{classify, normalize, CronFields, Template, TEMPLATES};
pub use crate::config::{
    load_toml_settings, load_yaml_settings, resolve_config_value, settings_from_config,
    settings_from_str, EditorSettings,
};
pub use ::config::FileFormat;
pub use display::{month_day_label, month_label, ordinal_suffix};
pub use editor::{CronEditor, CronObserver};
pub use error::{CronEditorError, Result};
pub use options::CronOptions;
pub use schedule::{
    default_advanced_expression, AdvancedSchedule, DailyKind, DailySchedule, HourlySchedule,
    Meridiem, MinutesSchedule, MonthDay, MonthlyKind, MonthlySchedule, Occurrence,
    OneTimeSchedule, Schedule, ScheduleCategory, ScheduleKind, TimeOfDay, Weekday, WeekdaySet,
    WeeklySchedule, YearlyKind, YearlySchedule,
};
pub use synthesizer::synthesize;
pub use validator::{
    check_expression, check_field_count, check_grammar, validate, validate_opt, ValidationResult,
};
