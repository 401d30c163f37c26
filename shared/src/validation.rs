use crate::types::{House, UnknownHouse};
use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Address used when a lookup or update has no usable email.
pub const DEFAULT_EMAIL: &str = "testuser@hogwarts.co.uk";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Parse a required house field. Missing and empty are both rejected.
pub fn parse_house(value: Option<&str>) -> Result<House, UnknownHouse> {
    match value {
        Some(s) if !s.is_empty() => s.parse(),
        _ => Err(UnknownHouse(String::new())),
    }
}

/// Current UTC time, e.g. `2024-05-01T09:30:00Z`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
