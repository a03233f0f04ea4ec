// Locale aware rendering of plain numbers, currencies, percentages and file sizes.
use std::borrow::Cow;

use crate::config::{default_currency, default_locale};

const FILE_SIZE_UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

fn resolve_locale(locale: Option<&str>) -> Cow<'_, str> {
    match locale {
        Some(locale) => Cow::Borrowed(locale),
        None => Cow::Owned(default_locale()),
    }
}

/// Indonesian formatting uses a comma as the decimal separator.
fn uses_decimal_comma(locale: &str) -> bool {
    locale == "id" || locale.starts_with("id_")
}

fn currency_symbol(code: &str) -> Cow<'static, str> {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" | "CNY" => "¥".into(),
        "IDR" => "Rp".into(),
        "INR" => "₹".into(),
        "AUD" => "A$".into(),
        "CAD" => "C$".into(),
        other => format!("{other} ").into(),
    }
}

/// Formats a number for the given locale (the default locale when `None`).
///
/// `max_precision` takes priority over `precision`. Without either the
/// shortest representation that round-trips is used, so no trailing zeros.
pub fn format(
    number: f64,
    precision: Option<usize>,
    max_precision: Option<usize>,
    locale: Option<&str>,
) -> String {
    let formatted = match max_precision.or(precision) {
        Some(precision) => format!("{number:.precision$}"),
        None => number.to_string(),
    };

    if uses_decimal_comma(&resolve_locale(locale)) {
        formatted.replace('.', ",")
    } else {
        formatted
    }
}

/// Formats `number / 100` followed by a percent sign.
pub fn percentage(
    number: f64,
    precision: usize,
    max_precision: Option<usize>,
    locale: Option<&str>,
) -> String {
    let precision = max_precision.unwrap_or(precision);
    format!("{}%", format(number / 100.0, Some(precision), None, locale))
}

/// Formats an amount with its currency symbol.
///
/// `None` (or an empty code) uses the default currency; precision defaults to
/// two decimals. Codes without a known symbol are rendered as `"XYZ "`.
pub fn currency(
    number: f64,
    code: Option<&str>,
    locale: Option<&str>,
    precision: Option<usize>,
) -> String {
    let locale = resolve_locale(locale);
    let code = match code {
        Some(code) if !code.is_empty() => Cow::Borrowed(code),
        _ => Cow::Owned(default_currency()),
    };

    let formatted = format(number, Some(precision.unwrap_or(2)), None, Some(locale.as_ref()));
    let symbol = currency_symbol(&code);

    // Indonesian locales separate the symbol from the amount
    if locale.starts_with("id") {
        format!("{symbol} {formatted}")
    } else {
        format!("{symbol}{formatted}")
    }
}

/// Renders a byte count with a binary (1024) unit, e.g. `"1.50 KB"`.
pub fn file_size(bytes: f64, precision: usize, max_precision: Option<usize>) -> String {
    let mut size = bytes;
    let mut unit = 0;
    while size >= 1024.0 && unit < FILE_SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    let precision = max_precision.unwrap_or(precision);
    format!(
        "{} {}",
        format(size, Some(precision), None, None),
        FILE_SIZE_UNITS[unit]
    )
}

/// Removes trailing zero digits after the decimal point.
pub fn trim(number: f64) -> f64 {
    number.to_string().parse().unwrap_or(number)
}
