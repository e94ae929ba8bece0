use std::env;
use thiserror::Error;

use crate::services::{
    pricing_service::StayPricing,
    wizard_service::{BookingRules, MoveInRule},
};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const SMTP_PORT: u16 = 587;
const WHATSAPP_NUMBER: &str = "12029329201";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// SMTP relay settings. Any field may be absent; the notifier checks completeness.
#[derive(Debug, Clone, PartialEq)]
pub struct SmtpConfig {
    pub host: Option<String>,
    pub port: u16,
    /// Implicit TLS when true, STARTTLS otherwise.
    pub secure: bool,
    pub user: Option<String>,
    pub password: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: SMTP_PORT,
            secure: false,
            user: None,
            password: None,
            from: None,
            to: None,
        }
    }
}

impl SmtpConfig {
    /// All of host, credentials and both addresses are set, and none is a `your-…`
    /// placeholder left over from the sample env file.
    pub fn is_configured(&self) -> bool {
        [
            &self.host,
            &self.user,
            &self.password,
            &self.from,
            &self.to,
        ]
        .iter()
        .all(|value| {
            value
                .as_deref()
                .is_some_and(|v| !v.trim().is_empty() && !is_placeholder(v))
        })
    }
}

fn is_placeholder(value: &str) -> bool {
    value.contains("your-")
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub smtp: SmtpConfig,
    pub booking: BookingRules,
    /// Click-to-chat number for landing pages, digits only.
    pub whatsapp_number: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            smtp: SmtpConfig::default(),
            booking: BookingRules::default(),
            whatsapp_number: WHATSAPP_NUMBER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Unset or empty variables take
    /// their defaults; set but unparsable ones are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = parse_or(var("PORT"), "PORT", defaults.port)?;
        let smtp = SmtpConfig {
            host: var("SMTP_HOST"),
            port: parse_or(var("SMTP_PORT"), "SMTP_PORT", SMTP_PORT)?,
            secure: var("SMTP_SECURE").as_deref() == Some("true"),
            user: var("SMTP_USER"),
            password: var("SMTP_PASSWORD"),
            from: var("EMAIL_FROM"),
            to: var("EMAIL_TO"),
        };
        let booking = BookingRules {
            stay_pricing: parse_or(var("STAY_PRICING"), "STAY_PRICING", StayPricing::default())?,
            move_in_rule: parse_or(var("MOVE_IN_RULE"), "MOVE_IN_RULE", MoveInRule::default())?,
        };

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            smtp,
            booking,
            whatsapp_number: var("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn smtp_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USER", "mailer"),
            ("SMTP_PASSWORD", "hunter2"),
            ("EMAIL_FROM", "Coliville <noreply@example.com>"),
            ("EMAIL_TO", "leasing@example.com"),
        ]
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.smtp.port, 587);
        assert!(!config.smtp.is_configured());
    }

    #[test]
    fn test_reads_smtp_and_booking_rules() {
        let mut vars = smtp_vars();
        vars.extend([
            ("SMTP_PORT", "465"),
            ("SMTP_SECURE", "true"),
            ("STAY_PRICING", "flat_four_week"),
            ("MOVE_IN_RULE", "first_of_month"),
        ]);
        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();
        assert!(config.smtp.is_configured());
        assert!(config.smtp.secure);
        assert_eq!(config.smtp.port, 465);
        assert_eq!(config.booking.stay_pricing, StayPricing::FlatFourWeek);
        assert_eq!(config.booking.move_in_rule, MoveInRule::FirstOfMonth);
    }

    #[test]
    fn test_placeholder_values_are_unconfigured() {
        let mut vars = smtp_vars();
        vars[0] = ("SMTP_HOST", "your-smtp-server.com");
        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();
        assert!(!config.smtp.is_configured());

        let mut vars = smtp_vars();
        vars[2] = ("SMTP_PASSWORD", "your-smtp-password");
        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();
        assert!(!config.smtp.is_configured());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let result = AppConfig::from_lookup(lookup(&[("PORT", "eighty")]));
        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                name: "PORT",
                value: "eighty".to_string()
            })
        );
        assert!(AppConfig::from_lookup(lookup(&[("STAY_PRICING", "weekly")])).is_err());
    }
}
