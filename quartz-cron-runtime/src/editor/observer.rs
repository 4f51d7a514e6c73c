use crate::validator::ValidationResult;

/// Receiver of committed editor changes
///
/// Any `FnMut(&str)` closure is an observer that only listens for the
/// committed cron string.
///
/// # Example
///
/// ```rust
/// use quartz_cron_runtime::{CronEditor, CronOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut editor = CronEditor::new(CronOptions::default(), Some("0 0 12 * * ? *"))?;
/// editor.subscribe(|cron: &str| println!("cron is now {}", cron));
/// editor.select_tab("minutes")?;
/// # Ok(())
/// # }
/// ```
pub trait CronObserver {
    /// Called with every committed expression, in the layout implied by the options
    fn cron_changed(&mut self, cron: &str);

    /// Called whenever the validation result is recomputed
    fn validation_changed(&mut self, _result: &ValidationResult) {}
}

impl<F> CronObserver for F
where
    F: FnMut(&str),
{
    fn cron_changed(&mut self, cron: &str) {
        self(cron)
    }
}
