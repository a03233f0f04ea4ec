// Default locale and currency, shared by every formatting call that does not
// pass its own.
//
// One reader/writer lock guards both values. Scoped overrides are not
// isolated from each other: two threads overriding at the same time each
// restore their own saved value, and the last restore wins.
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub locale: String,
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            locale: "en".to_string(),
            currency: "USD".to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

static SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| RwLock::new(Settings::default()));

/// Snapshot of the current defaults.
pub fn settings() -> Settings {
    SETTINGS.read().clone()
}

/// Replaces both defaults at once.
pub fn configure(settings: Settings) {
    tracing::debug!(locale = %settings.locale, currency = %settings.currency, "number defaults configured");
    *SETTINGS.write() = settings;
}

pub fn default_locale() -> String {
    SETTINGS.read().locale.clone()
}

pub fn default_currency() -> String {
    SETTINGS.read().currency.clone()
}

pub fn use_locale(locale: impl Into<String>) {
    let locale = locale.into();
    tracing::debug!(%locale, "default locale changed");
    SETTINGS.write().locale = locale;
}

pub fn use_currency(currency: impl Into<String>) {
    let currency = currency.into();
    tracing::debug!(%currency, "default currency changed");
    SETTINGS.write().currency = currency;
}

fn locale_slot(settings: &mut Settings) -> &mut String {
    &mut settings.locale
}

fn currency_slot(settings: &mut Settings) -> &mut String {
    &mut settings.currency
}

/// Puts the saved value back when dropped, including during a panic unwind.
struct Restore {
    slot: fn(&mut Settings) -> &mut String,
    previous: String,
}

impl Restore {
    fn install(slot: fn(&mut Settings) -> &mut String, value: String) -> Self {
        let previous = std::mem::replace(slot(&mut SETTINGS.write()), value);
        Restore { slot, previous }
    }
}

impl Drop for Restore {
    fn drop(&mut self) {
        let previous = std::mem::take(&mut self.previous);
        *(self.slot)(&mut SETTINGS.write()) = previous;
    }
}

/// Runs `callback` with `locale` as the default, then restores the old one.
pub fn with_locale<R>(locale: impl Into<String>, callback: impl FnOnce() -> R) -> R {
    let locale = locale.into();
    tracing::debug!(%locale, "scoped locale override");
    let _restore = Restore::install(locale_slot, locale);
    callback()
}

/// Runs `callback` with `currency` as the default, then restores the old one.
pub fn with_currency<R>(currency: impl Into<String>, callback: impl FnOnce() -> R) -> R {
    let currency = currency.into();
    tracing::debug!(%currency, "scoped currency override");
    let _restore = Restore::install(currency_slot, currency);
    callback()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global defaults are exercised in tests/defaults.rs, which runs in
    // its own process.

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.locale, "en");
        assert_eq!(settings.currency, "USD");
    }

    #[test]
    fn test_settings_from_json() {
        let settings = Settings::from_json(r#"{ "locale": "id", "currency": "IDR" }"#).unwrap();
        assert_eq!(
            settings,
            Settings {
                locale: "id".to_string(),
                currency: "IDR".to_string()
            }
        );

        let partial = Settings::from_json(r#"{ "currency": "EUR" }"#).unwrap();
        assert_eq!(partial.locale, "en");
        assert_eq!(partial.currency, "EUR");
    }

    #[test]
    fn test_settings_from_invalid_json() {
        let err = Settings::from_json("{ locale: id }").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
