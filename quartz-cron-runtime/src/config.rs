use crate::error::Result;
use crate::options::CronOptions;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

/// The `[editor]` table of a configuration source
///
/// ```toml
/// [editor]
/// use_24_hour_time = false
/// default_time = "09:00:00"
/// cron = "${schedules.report:0 0 9 ? * MON-FRI *}"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    #[serde(flatten)]
    pub options: CronOptions,
    /// Expression used to seed the editor, may be a `${key:default}` placeholder
    pub cron: Option<String>,
}

fn environment() -> Environment {
    Environment::with_prefix("QUARTZ_CRON")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Load editor settings from a TOML file, overridable by `QUARTZ_CRON_*` env vars
pub fn load_toml_settings<P: AsRef<Path>>(path: P) -> Result<EditorSettings> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .add_source(environment())
        .build()?;
    settings_from_config(&config)
}

/// Load editor settings from a YAML file, overridable by `QUARTZ_CRON_*` env vars
pub fn load_yaml_settings<P: AsRef<Path>>(path: P) -> Result<EditorSettings> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Yaml))
        .add_source(environment())
        .build()?;
    settings_from_config(&config)
}

pub fn settings_from_str(content: &str, format: FileFormat) -> Result<EditorSettings> {
    let config = Config::builder()
        .add_source(File::from_str(content, format))
        .build()?;
    settings_from_config(&config)
}

/// Read the `[editor]` table, resolving a placeholder `cron` value.
/// A missing table yields the defaults.
pub fn settings_from_config(config: &Config) -> Result<EditorSettings> {
    let mut settings = match config.get::<EditorSettings>("editor") {
        Ok(settings) => settings,
        Err(ConfigError::NotFound(_)) => EditorSettings::default(),
        Err(e) => return Err(e.into()),
    };
    if let Some(cron) = settings.cron.take() {
        settings.cron = Some(resolve_config_value(&cron, config)?);
    }
    settings.options = settings.options.normalized();
    Ok(settings)
}

/// Resolve config placeholder like ${schedules.report} or ${schedules.report:0 0 12 * * ?}
pub fn resolve_config_value(value: &str, config: &Config) -> Result<String> {
    let Some(inner) = value
        .trim()
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
    else {
        return Ok(value.to_string());
    };

    match inner.split_once(':') {
        Some((key, default_value)) => match config.get_string(key) {
            Ok(resolved) => Ok(resolved),
            Err(_) => Ok(default_value.to_string()),
        },
        None => Ok(config.get_string(inner)?),
    }
}
