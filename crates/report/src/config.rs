use restock_forecasting::PlanningConfig;

pub const WEEKS_THRESHOLD_ENV: &str = "RESTOCK_WEEKS_THRESHOLD";
pub const TARGET_WEEKS_ENV: &str = "RESTOCK_TARGET_WEEKS";

/// Planning config from the process environment.
pub fn planning_config_from_env() -> PlanningConfig {
    planning_config_from(|key| std::env::var(key).ok())
}

/// Planning config from an arbitrary variable source.
///
/// Unset variables keep the default. Unparsable or out-of-range values are
/// logged and replaced by the default as well.
pub fn planning_config_from<F>(lookup: F) -> PlanningConfig
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = PlanningConfig::default();
    let config = PlanningConfig {
        weeks_threshold: read_weeks(&lookup, WEEKS_THRESHOLD_ENV, defaults.weeks_threshold),
        target_weeks: read_weeks(&lookup, TARGET_WEEKS_ENV, defaults.target_weeks),
    };

    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "invalid planning config; using defaults");
        return defaults;
    }
    config
}

fn read_weeks<F>(lookup: &F, key: &str, default: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "unparsable setting; using default");
            default
        }
    }
}
