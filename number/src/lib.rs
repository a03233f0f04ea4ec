// Number formatting helpers.
//
// Functions that take an optional locale or currency fall back to the
// process-wide defaults in `config` when given `None`.

pub mod config;
pub mod error;
pub mod format;
pub mod humanize;
pub mod range;

pub use config::{
    configure, default_currency, default_locale, settings, use_currency, use_locale,
    with_currency, with_locale, Settings,
};
pub use error::{NumberError, Result};
pub use format::{currency, file_size, format, percentage, trim};
pub use humanize::{
    abbreviate, for_humans, ordinal, spell, spell_ordinal, summarize, ABBREVIATED_UNITS,
    FULL_UNITS,
};
pub use range::{clamp, pairs};
