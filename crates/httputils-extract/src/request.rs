//! Typed values from URL paths and form fields.
//!
//! Paths are matched against two fixed patterns: an ID segment (`/23`) and a
//! date segment (`/2006-01-02`). The first match in the path wins.

use crate::FormValues;
use httputils_core::{Date, HttpUtilsError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Pattern for an ID path segment.
pub const ID_PATTERN: &str = r"/[0-9]+";

/// Pattern for a date path segment. Month and day ranges are checked by
/// the date parser, not by the pattern.
pub const DATE_PATTERN: &str = r"/[0-9]{4}-[0-9]{2}-[0-9]{2}";

fn id_regex() -> &'static Regex {
    static ID: OnceLock<Regex> = OnceLock::new();
    ID.get_or_init(|| Regex::new(ID_PATTERN).expect("valid regex"))
}

fn date_regex() -> &'static Regex {
    static DATE: OnceLock<Regex> = OnceLock::new();
    DATE.get_or_init(|| Regex::new(DATE_PATTERN).expect("valid regex"))
}

/// Returns the first `/<digits>` segment of `path` as an integer.
///
/// # Example
///
/// ```
/// use httputils_extract::get_id_from_url;
///
/// assert_eq!(get_id_from_url("/api/v1/todos/23").unwrap(), 23);
/// assert!(get_id_from_url("/api/v1/todos").is_err());
/// ```
pub fn get_id_from_url(path: &str) -> Result<i64> {
    let found = id_regex()
        .find(path)
        .ok_or(HttpUtilsError::NotFound { what: "an ID" })?;

    found.as_str()[1..]
        .parse()
        .map_err(|e| HttpUtilsError::parse("unable to parse the ID", e))
}

/// Returns the first `/YYYY-MM-DD` segment of `path` as a [`Date`].
///
/// # Example
///
/// ```
/// use httputils_extract::get_date_from_url;
///
/// let date = get_date_from_url("/api/v1/todos/2006-01-02").unwrap();
/// assert_eq!(date.to_string(), "2006-01-02");
/// ```
pub fn get_date_from_url(path: &str) -> Result<Date> {
    let found = date_regex()
        .find(path)
        .ok_or(HttpUtilsError::NotFound { what: "a date" })?;

    Date::parse(&found.as_str()[1..])
        .map_err(|e| HttpUtilsError::parse("unable to parse the date", e))
}

/// Returns the form value for `key` as an integer within `[min, max]`.
///
/// An absent or empty value is reported as [`HttpUtilsError::KeyMissing`],
/// which callers usually treat as "use the default" rather than as a bad
/// request.
///
/// # Example
///
/// ```
/// use httputils_extract::{get_int_form_value, FormValues};
///
/// let form = FormValues::from_query("limit=23");
/// assert_eq!(get_int_form_value(&form, "limit", 0, 100).unwrap(), 23);
///
/// let err = get_int_form_value(&form, "offset", 0, 100).unwrap_err();
/// assert!(err.is_key_missing());
/// ```
pub fn get_int_form_value(form: &FormValues, key: &str, min: i64, max: i64) -> Result<i64> {
    let value = required_value(form, key)?;

    let value: i64 = value
        .parse()
        .map_err(|e| HttpUtilsError::parse("value is incorrect", e))?;
    if value < min {
        return Err(HttpUtilsError::TooLess { value, min });
    }
    if value > max {
        return Err(HttpUtilsError::TooGreater { value, max });
    }

    Ok(value)
}

/// Returns the form value for `key` as a [`Date`].
pub fn get_date_form_value(form: &FormValues, key: &str) -> Result<Date> {
    let value = required_value(form, key)?;

    Date::parse(value).map_err(|e| HttpUtilsError::parse("unable to parse the date", e))
}

fn required_value<'a>(form: &'a FormValues, key: &str) -> Result<&'a str> {
    match form.get(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(HttpUtilsError::KeyMissing),
    }
}
