use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("UUID pattern is valid")
});

pub fn is_ascii(value: &str) -> bool {
    value.is_ascii()
}

pub fn is_json(value: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(value).is_ok()
}

/// Absolute URL with a host. A non-empty `protocols` list restricts the scheme.
pub fn is_url(value: &str, protocols: &[&str]) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    if !url.host_str().is_some_and(|host| !host.is_empty()) {
        return false;
    }
    protocols.is_empty() || protocols.iter().any(|protocol| protocol.eq_ignore_ascii_case(url.scheme()))
}

pub fn is_uuid(value: &str) -> bool {
    UUID.is_match(value)
}
