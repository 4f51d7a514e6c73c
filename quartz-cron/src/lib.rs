//! # Quartz Cron - Structured schedules to Quartz cron expressions and back
//!
//! This library keeps a set of human-edited schedule parameters ("every 5
//! minutes", "on the third Monday of March") in sync with a Quartz cron
//! expression string.
//!
//! ## Features
//!
//! - **Synthesis**: build a canonical expression from a [`Schedule`]
//! - **Classification**: recover the schedule category and parameters from an
//!   expression, falling back to an advanced (raw text) schedule
//! - **Validation**: check any string against the Quartz field grammar
//! - **Editor**: [`CronEditor`] ties the three together with observer
//!   notifications
//! - **Config support**: load [`CronOptions`] from TOML/YAML files or
//!   `QUARTZ_CRON_*` environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use quartz_cron::{classify, synthesize, validate, CronOptions, MinutesSchedule, Schedule};
//!
//! let options = CronOptions::default();
//!
//! let schedule = Schedule::Minutes(MinutesSchedule { every_minutes: 5, seconds: 30 });
//! let cron = synthesize(&schedule, &options);
//! assert_eq!(cron, "30 0/5 * 1/1 * ? *");
//! assert!(validate(&cron));
//!
//! assert_eq!(classify(&cron, &options), schedule);
//! ```
//!
//! ## Field layout
//!
//! Expressions are seconds-first with an optional trailing year:
//! `seconds minutes hours day-of-month month day-of-week [year]`.
//! `remove_seconds` and `remove_years` drop the outer fields from produced
//! expressions. One-time schedules always carry their literal year.
//!
//! ## Configuration
//!
//! Create `config/editor.toml`:
//!
//! ```toml
//! [editor]
//! remove_years = true
//! use_24_hour_time = false
//! default_time = "09:00:00"
//! cron = "${schedules.report:0 0 9 ? * MON-FRI}"
//! ```
//!
//! Or override from the environment:
//!
//! ```bash
//! export QUARTZ_CRON_EDITOR__USE_24_HOUR_TIME=true
//! ```

// Re-export core types
pub use quartz_cron_runtime::{
    AdvancedSchedule, CronEditor, CronEditorError, CronFields, CronObserver, CronOptions,
    DailyKind, DailySchedule, EditorSettings, FileFormat, HourlySchedule, Meridiem,
    MinutesSchedule, MonthDay, MonthlyKind, MonthlySchedule, Occurrence, OneTimeSchedule,
    Result, Schedule, ScheduleCategory, ScheduleKind, TimeOfDay, ValidationResult, Weekday,
    WeekdaySet, WeeklySchedule, YearlyKind, YearlySchedule,
};

// Core operations
pub use quartz_cron_runtime::{
    check_expression, check_field_count, check_grammar, classify, default_advanced_expression,
    normalize, synthesize, validate, validate_opt,
};

// Config loading
pub use quartz_cron_runtime::{
    load_toml_settings, load_yaml_settings, resolve_config_value, settings_from_config,
    settings_from_str,
};

// Labels
pub use quartz_cron_runtime::{month_day_label, month_label, ordinal_suffix};

// Full runtime for advanced use
pub use quartz_cron_runtime;
