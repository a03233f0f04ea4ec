// Process-wide number formatting defaults
pub mod settings;

pub use settings::{
    configure, default_currency, default_locale, settings, use_currency, use_locale,
    with_currency, with_locale, Settings,
};
