//! Configuration for the built-in calendars.
//!
//! | variable             | meaning                                             |
//! |----------------------|-----------------------------------------------------|
//! | `TRADECAL_START_YEAR`| first year to compute (default 2000)                |
//! | `TRADECAL_END_YEAR`  | last year to compute, inclusive (default 2050)      |
//! | `ADDITIONAL_RULES`   | JSON object: family name -> array of holiday rules  |
//!
//! Years must lie within `1900..=2200`.
//!
//! ```json
//! {"NYSE": [{"Once": "2025-01-09"}]}
//! ```

use crate::error::CalendarError;
use crate::family::CalendarFamily;
use crate::rules::HolidayRule;
use std::collections::{BTreeMap, HashMap};
use std::env;

pub const DEFAULT_START_YEAR: i32 = 2000;
pub const DEFAULT_END_YEAR: i32 = 2050;

/// Bounds on configurable years, keeping calendar construction short.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2200;

pub const START_YEAR_VAR: &str = "TRADECAL_START_YEAR";
pub const END_YEAR_VAR: &str = "TRADECAL_END_YEAR";
pub const ADDITIONAL_RULES_VAR: &str = "ADDITIONAL_RULES";

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    pub start_year: i32,
    pub end_year: i32,
    /// Closure rules appended to a family's built-in rules
    pub extra_rules: BTreeMap<CalendarFamily, Vec<HolidayRule>>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            extra_rules: BTreeMap::new(),
        }
    }
}

impl CalendarConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<CalendarConfig, CalendarError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration from a fixed set of variables.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<CalendarConfig, CalendarError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup<F>(lookup: F) -> Result<CalendarConfig, CalendarError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CalendarConfig::default();
        if let Some(value) = lookup(START_YEAR_VAR) {
            config.start_year = parse_year(START_YEAR_VAR, &value)?;
        }
        if let Some(value) = lookup(END_YEAR_VAR) {
            config.end_year = parse_year(END_YEAR_VAR, &value)?;
        }
        if config.start_year > config.end_year {
            return Err(CalendarError::InvalidConfig(format!(
                "start year {} is after end year {}",
                config.start_year, config.end_year
            )));
        }
        if let Some(value) = lookup(ADDITIONAL_RULES_VAR) {
            config.extra_rules = parse_additional_rules(&value)?;
        }
        Ok(config)
    }

    /// Extra closure rules configured for `family`.
    pub fn rules_for(&self, family: CalendarFamily) -> &[HolidayRule] {
        self.extra_rules
            .get(&family)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn parse_year(var: &str, value: &str) -> Result<i32, CalendarError> {
    let year: i32 = value
        .trim()
        .parse()
        .map_err(|e| CalendarError::InvalidConfig(format!("{var}={value:?}: {e}")))?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::InvalidConfig(format!(
            "{var}={year} is outside {MIN_YEAR}..={MAX_YEAR}"
        )));
    }
    Ok(year)
}

fn parse_additional_rules(
    json: &str,
) -> Result<BTreeMap<CalendarFamily, Vec<HolidayRule>>, CalendarError> {
    let by_name: BTreeMap<String, Vec<HolidayRule>> = serde_json::from_str(json)
        .map_err(|e| CalendarError::InvalidConfig(format!("{ADDITIONAL_RULES_VAR}: {e}")))?;
    by_name
        .into_iter()
        .map(|(name, rules)| {
            let family = CalendarFamily::from_canonical_name(&name).ok_or_else(|| {
                CalendarError::InvalidConfig(format!(
                    "{ADDITIONAL_RULES_VAR}: unknown calendar family {name}"
                ))
            })?;
            for rule in &rules {
                rule.validate().map_err(|e| {
                    CalendarError::InvalidConfig(format!("{ADDITIONAL_RULES_VAR}: {name}: {e}"))
                })?;
            }
            Ok((family, rules))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ymd;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = CalendarConfig::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.start_year, 2000);
        assert_eq!(config.end_year, 2050);
        assert!(config.rules_for(CalendarFamily::Nyse).is_empty());
    }

    #[test]
    fn test_year_range() {
        let config = CalendarConfig::from_vars(&vars(&[
            (START_YEAR_VAR, "2010"),
            (END_YEAR_VAR, " 2030 "),
        ]))
        .unwrap();
        assert_eq!((config.start_year, config.end_year), (2010, 2030));

        let err = CalendarConfig::from_vars(&vars(&[(START_YEAR_VAR, "twenty")])).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidConfig(_)));

        let err = CalendarConfig::from_vars(&vars(&[
            (START_YEAR_VAR, "2040"),
            (END_YEAR_VAR, "2030"),
        ]))
        .unwrap_err();
        assert!(matches!(err, CalendarError::InvalidConfig(_)));
    }

    #[test]
    fn test_year_bounds() {
        let config = CalendarConfig::from_vars(&vars(&[
            (START_YEAR_VAR, "1900"),
            (END_YEAR_VAR, "2200"),
        ]))
        .unwrap();
        assert_eq!((config.start_year, config.end_year), (MIN_YEAR, MAX_YEAR));

        for (var, year) in [
            (START_YEAR_VAR, "-2147483648"),
            (END_YEAR_VAR, "2147483647"),
            (START_YEAR_VAR, "1899"),
            (END_YEAR_VAR, "2201"),
        ] {
            let err = CalendarConfig::from_vars(&vars(&[(var, year)])).unwrap_err();
            assert!(matches!(err, CalendarError::InvalidConfig(_)), "{var}={year}");
        }
    }

    #[test]
    fn test_additional_rules() {
        let config = CalendarConfig::from_vars(&vars(&[(
            ADDITIONAL_RULES_VAR,
            r#"{"NYSE": [{"Once": "2025-01-09"}], "LSE": []}"#,
        )]))
        .unwrap();
        assert_eq!(
            config.rules_for(CalendarFamily::Nyse),
            &[HolidayRule::Once(ymd(2025, 1, 9))]
        );
        assert!(config.rules_for(CalendarFamily::Lse).is_empty());
        assert!(config.rules_for(CalendarFamily::Cme).is_empty());
    }

    #[test]
    fn test_bad_additional_rules() {
        let err = CalendarConfig::from_vars(&vars(&[(ADDITIONAL_RULES_VAR, "[1, 2")])).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidConfig(_)));

        let err = CalendarConfig::from_vars(&vars(&[(ADDITIONAL_RULES_VAR, r#"{"XNYS": []}"#)]))
            .unwrap_err();
        assert!(err.to_string().contains("XNYS"));
    }

    #[test]
    fn test_additional_rules_with_bad_month() {
        let json = r#"{"NYSE": [{"NthWeekday": {"month": 4294967295, "weekday": "Mon",
            "nth": "Last", "first": null, "last": null, "half_check": null}}]}"#;
        let err = CalendarConfig::from_vars(&vars(&[(ADDITIONAL_RULES_VAR, json)])).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidConfig(_)));
        assert!(err.to_string().contains("NYSE"));

        let json = r#"{"LSE": [{"Fixed": {"month": 2, "day": 30}}]}"#;
        let err = CalendarConfig::from_vars(&vars(&[(ADDITIONAL_RULES_VAR, json)])).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidConfig(_)));
    }
}
