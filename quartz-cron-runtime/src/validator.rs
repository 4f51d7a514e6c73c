//! Quartz cron grammar validation.
//!
//! [`validate`] is a pure predicate over the full seconds-first grammar
//! (six fields plus an optional year). [`check_field_count`] is the coarser
//! check applied to expressions arriving from outside the editor.

use crate::options::CronOptions;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const MONTH_NAMES: &str = "JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC";
const DAY_NAMES: &str = "MON|TUE|WED|THU|FRI|SAT|SUN";

/// Field pattern: `?`, `*`, or a comma list of the given items
fn field(items: &[String]) -> String {
    let item = format!("(?:{})", items.join("|"));
    format!(r"(?:\?|\*|{item}(?:,{item})*)")
}

/// Value with optional range or step, plus `*/step`
fn numeric_items(value: &str) -> Vec<String> {
    vec![
        format!(r"{value}(?:[-/]{value})?"),
        format!(r"\*/{value}"),
    ]
}

static QUARTZ_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let sixty = r"(?:[0-5]?\d)";
    let hour = r"(?:[01]?\d|2[0-3])";
    let day = r"(?:0?[1-9]|[12]\d|3[01])";
    let month = r"(?:0?[1-9]|1[012])";
    let month_name = format!("(?:{MONTH_NAMES})");
    let weekday = format!("(?:[1-7]|{DAY_NAMES})");

    let seconds_minutes = field(&numeric_items(sixty));
    let hours = field(&numeric_items(hour));

    let mut day_items = numeric_items(day);
    day_items.extend([
        format!("{day}W"),
        "LW".to_string(),
        format!("L(?:-{day})?"),
    ]);
    let day_of_month = field(&day_items);

    let mut month_items = numeric_items(month);
    month_items.push(format!("{month_name}(?:-{month_name})?"));
    let month_field = field(&month_items);

    let day_of_week = field(&[
        format!("{weekday}(?:-{weekday})?"),
        format!("{weekday}/[1-7]"),
        format!("{weekday}#[1-5]"),
        format!("{weekday}L"),
        "L".to_string(),
        r"\*/[1-7]".to_string(),
    ]);

    let year = field(&[
        r"\d{4}(?:-\d{4})?(?:/\d{1,3})?".to_string(),
        r"\*/\d{1,3}".to_string(),
    ]);

    let pattern = format!(
        r"^\s*{seconds_minutes}\s+{seconds_minutes}\s+{hours}\s+{day_of_month}\s+{month_field}\s+{day_of_week}(?:\s+{year})?\s*$"
    );
    Regex::new(&pattern).expect("Quartz grammar pattern is valid")
});

/// Check a seconds-first expression against the Quartz grammar.
///
/// Case-insensitive. Empty or blank input is never valid.
pub fn validate(expression: &str) -> bool {
    if expression.trim().is_empty() {
        return false;
    }
    QUARTZ_REGEX.is_match(&expression.to_uppercase())
}

/// `validate` for an optional value; `None` is never valid
pub fn validate_opt(expression: Option<&str>) -> bool {
    expression.is_some_and(validate)
}

/// Outcome of checking an expression, for display next to the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }

    pub fn invalid(error_message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: error_message.into(),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

/// Compare the number of fields with the count implied by `options`.
pub fn check_field_count(expression: Option<&str>, options: &CronOptions) -> ValidationResult {
    let Some(expression) = expression.filter(|e| !e.trim().is_empty()) else {
        return ValidationResult::invalid("Cron expression cannot be null");
    };

    let expected = options.expected_field_count();
    if expression.split_whitespace().count() != expected {
        return ValidationResult::invalid(format!(
            "Invalid cron expression, there must be {} segments",
            expected
        ));
    }
    ValidationResult::valid()
}

/// Field-count check followed by the grammar check, for expressions
/// arriving from outside the editor
pub fn check_expression(expression: Option<&str>, options: &CronOptions) -> ValidationResult {
    let result = check_field_count(expression, options);
    if !result.is_valid {
        return result;
    }
    check_grammar(expression.unwrap_or_default(), options)
}

/// Grammar check of an expression in the field layout implied by `options`
pub fn check_grammar(expression: &str, options: &CronOptions) -> ValidationResult {
    if expression.trim().is_empty() {
        return ValidationResult::invalid("Cron expression cannot be null");
    }
    if expression.trim().split(' ').any(str::is_empty) {
        return ValidationResult::invalid(
            "Invalid cron expression, fields must be separated by a single space",
        );
    }
    if validate(&options.with_seconds_field(expression)) {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(
            "Invalid cron expression, it does not match the Quartz cron grammar",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_input() {
        assert!(!validate(""));
        assert!(!validate("   "));
        assert!(!validate_opt(None));
        assert!(!validate_opt(Some("")));
    }

    #[test]
    fn accepts_generated_shapes() {
        let expressions = [
            "30 0/5 * 1/1 * ? *",
            "0 15 0/2 1/1 * ? *",
            "0 30 14 1/3 * ? *",
            "0 30 14 ? * MON-FRI *",
            "0 0 9 ? * MON,WED,FRI *",
            "0 0 10 15W 1/1 ?",
            "0 0 10 LW 1/2 ? *",
            "0 0 10 ? 1/1 MON#1 *",
            "0 0 10 ? 3 FRIL *",
            "0 0 10 L 12 ? *",
            "0 05 09 03 07 ? 2025",
        ];
        for expression in expressions {
            assert!(validate(expression), "expected valid: {}", expression);
        }
    }

    #[test]
    fn accepts_common_quartz_expressions() {
        let expressions = [
            "0 0 12 * * ?",
            "0 15 10 ? * *",
            "0 15 10 * * ? 2005",
            "0 0/5 14,18 * * ?",
            "0 0-5 14 * * ?",
            "0 10,44 14 ? 3 WED",
            "0 15 10 L-2 * ? 2019",
            "0 15 10 ? * 6#3",
            "0 15 10 ? * 6L 2002-2005",
            "0 0 12 1/5 * ?",
            "0 11 11 11 11 ?",
            "0 0 12 ? JAN-MAR SUN",
            "*/10 * * * * ?",
        ];
        for expression in expressions {
            assert!(validate(expression), "expected valid: {}", expression);
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        let expressions = [
            "60 0 12 * * ?",
            "0 60 12 * * ?",
            "0 0 24 * * ?",
            "0 0 12 32 * ?",
            "0 0 12 * 13 ?",
            "0 0 12 ? * 8",
            "0 0 12 ? * MON#6",
            "0 0 12 * * ? 99",
            "0 12 * * ?",
            "0 0 12 * * ? * *",
            "hello world",
        ];
        for expression in expressions {
            assert!(!validate(expression), "expected invalid: {}", expression);
        }
    }

    #[test]
    fn validation_is_case_insensitive() {
        for expression in ["0 0 12 ? jan-mar sun", "0 0 9 ? * mon,wed,fri *", "0 0 10 lw 1/2 ?"] {
            assert_eq!(validate(expression), validate(&expression.to_uppercase()));
            assert!(validate(expression));
        }
    }

    #[test]
    fn field_count_with_seconds_and_years() {
        let options = CronOptions::default();
        assert!(check_field_count(Some("0 0 12 * * ? *"), &options).is_valid);

        let result = check_field_count(Some("0 0 12 * * ?"), &options);
        assert!(!result.is_valid);
        assert!(result.error_message.contains('7'));
    }

    #[test]
    fn field_count_rejects_missing_input() {
        let result = check_field_count(None, &CronOptions::default());
        assert!(!result.is_valid);
        assert_eq!(result.error_message, "Cron expression cannot be null");
    }

    #[test]
    fn grammar_check_restores_removed_seconds() {
        let options = CronOptions {
            remove_seconds: true,
            remove_years: true,
            ..CronOptions::default()
        };
        assert!(check_expression(Some("0/5 * 1/1 * ?"), &options).is_valid);

        let result = check_expression(Some("0/5 * 1/1 * X"), &options);
        assert!(!result.is_valid);
        assert!(result.error_message.contains("grammar"));
    }
}
