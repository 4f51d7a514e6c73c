use super::observer::CronObserver;
use crate::classifier::classify;
use crate::error::Result;
use crate::options::CronOptions;
use crate::schedule::{Schedule, ScheduleKind};
use crate::synthesizer::synthesize;
use crate::validator::{check_expression, check_grammar, ValidationResult};
use tracing::{debug, info, warn};

/// Schedule state kept in sync with a cron expression
///
/// Parameter edits regenerate the expression. Expressions written from
/// outside are classified back into parameters. A regenerated expression is
/// only committed, and observers only notified, when it passes validation.
pub struct CronEditor {
    options: CronOptions,
    schedule: Schedule,
    cron: String,
    validation: ValidationResult,
    disabled: bool,
    /// Set when a committed expression is emitted; the next external write is
    /// that expression coming back and is not reclassified
    suppress_next_write: bool,
    observers: Vec<Box<dyn CronObserver>>,
}

impl CronEditor {
    /// Create an editor seeded from `cron`.
    ///
    /// Without a seed expression the editor starts on the minutes tab with its
    /// defaults and reports the missing expression as invalid.
    pub fn new(options: CronOptions, cron: Option<&str>) -> Result<Self> {
        let options = options.normalized();
        options.default_time_of_day()?;

        let schedule = Schedule::default_for(ScheduleKind::Minutes, &options)?;
        let mut editor = Self {
            options,
            schedule,
            cron: String::new(),
            validation: ValidationResult::invalid("Cron expression cannot be null"),
            disabled: false,
            suppress_next_write: false,
            observers: Vec::new(),
        };

        if let Some(cron) = cron {
            editor.apply_external(cron);
        }

        info!(
            kind = %editor.schedule.kind(),
            valid = editor.validation.is_valid,
            remove_seconds = editor.options.remove_seconds,
            remove_years = editor.options.remove_years,
            "Cron editor initialized"
        );
        Ok(editor)
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: CronObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Write an expression from outside the editor.
    ///
    /// Skipped once after the editor emitted its own expression.
    pub fn set_cron(&mut self, cron: &str) {
        if std::mem::take(&mut self.suppress_next_write) {
            debug!(cron = %cron, "Skipping reclassification of emitted expression");
            return;
        }
        self.apply_external(cron);
    }

    /// Replace the schedule parameters and regenerate the expression
    pub fn set_schedule(&mut self, schedule: Schedule) {
        self.schedule = schedule;
        self.regenerate();
    }

    /// Modify the schedule parameters in place and regenerate the expression
    pub fn edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Schedule),
    {
        f(&mut self.schedule);
        self.regenerate();
    }

    /// Switch to another tab. Ignored while the editor is disabled.
    ///
    /// A newly selected tab starts from its default parameters.
    pub fn select(&mut self, kind: ScheduleKind) -> Result<()> {
        if self.disabled {
            debug!(kind = %kind, "Editor disabled, ignoring tab selection");
            return Ok(());
        }
        if self.schedule.kind() != kind {
            self.schedule = Schedule::default_for(kind, &self.options)?;
        }
        self.regenerate();
        Ok(())
    }

    /// Switch tab by name, e.g. "monthly/specificWeekDay"
    pub fn select_tab(&mut self, tab: &str) -> Result<()> {
        self.select(tab.parse()?)
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Last committed expression
    pub fn cron(&self) -> &str {
        &self.cron
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn kind(&self) -> ScheduleKind {
        self.schedule.kind()
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }

    pub fn options(&self) -> &CronOptions {
        &self.options
    }

    fn apply_external(&mut self, cron: &str) {
        self.validation = check_expression(Some(cron), &self.options);
        if self.validation.is_valid {
            self.cron = cron.to_string();
        } else {
            warn!(cron = %cron, error = %self.validation.error_message, "Rejected cron expression");
        }

        self.schedule = classify(cron, &self.options);
        debug!(cron = %cron, kind = %self.schedule.kind(), "Classified cron expression");
        self.notify_validation();
    }

    /// Synthesize, validate, then commit and notify
    fn regenerate(&mut self) {
        let cron = synthesize(&self.schedule, &self.options);
        self.validation = check_grammar(&cron, &self.options);

        if self.validation.is_valid {
            self.cron = cron;
            if !self.observers.is_empty() {
                self.suppress_next_write = true;
            }
            for observer in &mut self.observers {
                observer.cron_changed(&self.cron);
            }
        } else {
            warn!(
                cron = %cron,
                error = %self.validation.error_message,
                "Generated expression not committed"
            );
        }
        self.notify_validation();
    }

    fn notify_validation(&mut self) {
        for observer in &mut self.observers {
            observer.validation_changed(&self.validation);
        }
    }
}

impl std::fmt::Debug for CronEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronEditor")
            .field("options", &self.options)
            .field("schedule", &self.schedule)
            .field("cron", &self.cron)
            .field("validation", &self.validation)
            .field("disabled", &self.disabled)
            .field("observers", &self.observers.len())
            .finish()
    }
}
