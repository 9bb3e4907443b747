//! Non-panicking checks behind every assertion.
//!
//! A path that locates nothing makes a check `false`; every other problem, such
//! as a document that is not JSON, is an error.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    JsonAssertionError,
    path::{find, parse_document},
    repr::representation,
};

/// Number of top-level entries when `json` is an object, `None` otherwise.
///
/// # Errors
///
/// Returns an error when `json` is not valid JSON.
pub fn object_len(json: Option<&str>) -> Result<Option<usize>, JsonAssertionError> {
    let Some(json) = json else {
        return Ok(None);
    };

    match parse_document(json)? {
        Value::Object(entries) => Ok(Some(entries.len())),
        _ => Ok(None),
    }
}

/// `true` iff `json` is an object with exactly `count` top-level entries.
///
/// # Errors
///
/// Returns an error when `json` is not valid JSON.
pub fn contains_exactly_key_value_pairs(
    json: Option<&str>,
    count: usize,
) -> Result<bool, JsonAssertionError> {
    Ok(object_len(json)? == Some(count))
}

/// Parses both documents; `None` stays `None`.
///
/// # Errors
///
/// Returns an error when either document is not valid JSON.
pub fn parse_pair(
    json: Option<&str>,
    expected: Option<&str>,
) -> Result<(Option<Value>, Option<Value>), JsonAssertionError> {
    let actual = json.map(parse_document).transpose()?;
    let expected = expected.map(parse_document).transpose()?;

    Ok((actual, expected))
}

/// `true` iff both documents are structurally equal.
///
/// Object key order is irrelevant, numbers and strings are never coerced into
/// each other, and no document only matches no document.
///
/// # Errors
///
/// Returns an error when either document is not valid JSON.
pub fn matches_json(json: Option<&str>, expected: Option<&str>) -> Result<bool, JsonAssertionError> {
    let (actual, expected) = parse_pair(json, expected)?;

    Ok(actual == expected)
}

/// The value located by `path`, or `None`.
///
/// # Errors
///
/// Returns an error when `json` is not valid JSON or `path` is not a valid query.
pub fn value_at(json: Option<&str>, path: &str) -> Result<Option<Value>, JsonAssertionError> {
    let Some(json) = json else {
        return Ok(None);
    };

    find(&parse_document(json)?, path)
}

/// `true` iff `path` locates a value, `null` included.
///
/// # Errors
///
/// Returns an error when `json` is not valid JSON or `path` is not a valid query.
pub fn contains_json_key(json: Option<&str>, path: &str) -> Result<bool, JsonAssertionError> {
    Ok(value_at(json, path)?.is_some())
}

/// `true` iff `path` locates a value equal to `expected` once encoded as JSON.
///
/// # Errors
///
/// Returns an error when `json` is not valid JSON, `path` is not a valid query,
/// or `expected` cannot be encoded.
pub fn contains_json_key_value<V>(
    json: Option<&str>,
    path: &str,
    expected: &V,
) -> Result<bool, JsonAssertionError>
where
    V: Serialize + ?Sized,
{
    let expected = serde_json::to_value(expected).map_err(JsonAssertionError::UnencodableValue)?;

    Ok(value_at(json, path)? == Some(expected))
}

/// The value located by `path`, decoded as `T`.
///
/// # Errors
///
/// Returns [`JsonAssertionError::MissingPath`] when nothing is located and
/// [`JsonAssertionError::UnexpectedType`] when the value is not a `T`.
pub fn value_of_type<T>(json: Option<&str>, path: &str) -> Result<T, JsonAssertionError>
where
    T: DeserializeOwned,
{
    let Some(value) = value_at(json, path)? else {
        return Err(JsonAssertionError::MissingPath {
            json: representation(json),
            path: path.to_owned(),
        });
    };

    let actual = value.to_string();

    serde_json::from_value(value).map_err(|_mismatch| JsonAssertionError::UnexpectedType {
        json: representation(json),
        path: path.to_owned(),
        expected: std::any::type_name::<T>(),
        actual,
    })
}
