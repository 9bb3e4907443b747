//! The matchers behind [`JsonAssertions`](crate::JsonAssertions).

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    JsonAssertionError, Matcher, MatcherResult,
    predicates::{object_len, parse_pair, value_at},
    repr::representation,
    resource::{default_resource_dir, load_resource},
};

fn tree(value: Option<&Value>) -> String {
    representation(value.map(Value::to_string).as_deref())
}

/// Holds when the document is an object with exactly `count` entries.
#[derive(Debug, Clone, Copy)]
pub struct ContainExactlyKeyValuePairs {
    count: usize,
}

/// Matcher for an object with exactly `count` top-level entries.
pub fn contain_exactly_key_value_pairs(count: usize) -> ContainExactlyKeyValuePairs {
    ContainExactlyKeyValuePairs { count }
}

impl Matcher for ContainExactlyKeyValuePairs {
    fn test(&self, json: Option<&str>) -> Result<MatcherResult, JsonAssertionError> {
        let actual = object_len(json)?;
        let found = actual.map_or_else(|| "null".to_owned(), |len| len.to_string());
        let json = representation(json);
        let expected = self.count;

        Ok(MatcherResult::new(
            actual == Some(expected),
            format!(
                "JSON object {json} should contain exactly {expected} key-value pairs but {found} found."
            ),
            format!(
                "JSON object {json} should not contain exactly {expected} key-value pairs but {found} found."
            ),
        ))
    }
}

/// Holds when the document is structurally equal to an expected one.
#[derive(Debug, Clone)]
pub struct MatchJson {
    expected: Option<String>,
}

/// Matcher for structural equality with `expected`; `None` expects no document.
pub fn match_json(expected: Option<&str>) -> MatchJson {
    MatchJson {
        expected: expected.map(ToOwned::to_owned),
    }
}

fn compare(json: Option<&str>, expected: Option<&str>) -> Result<MatcherResult, JsonAssertionError> {
    let (actual, expected) = parse_pair(json, expected)?;
    let (actual_tree, expected_tree) = (tree(actual.as_ref()), tree(expected.as_ref()));

    Ok(MatcherResult::new(
        actual == expected,
        format!("expected: {expected_tree} but was: {actual_tree}"),
        format!("expected not to match with: {expected_tree} but match: {actual_tree}"),
    ))
}

impl Matcher for MatchJson {
    fn test(&self, json: Option<&str>) -> Result<MatcherResult, JsonAssertionError> {
        compare(json, self.expected.as_deref())
    }
}

/// Holds when the document equals the one stored in a resource file.
#[derive(Debug, Clone)]
pub struct MatchJsonResource {
    dir: PathBuf,
    name: String,
}

/// Matcher for structural equality with the resource `name` under
/// [`default_resource_dir`].
pub fn match_json_resource(name: &str) -> MatchJsonResource {
    MatchJsonResource {
        dir: default_resource_dir(),
        name: name.to_owned(),
    }
}

impl MatchJsonResource {
    /// Looks the resource up in `dir` instead.
    #[must_use]
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = dir.as_ref().to_path_buf();
        self
    }
}

impl Matcher for MatchJsonResource {
    fn test(&self, json: Option<&str>) -> Result<MatcherResult, JsonAssertionError> {
        let expected = load_resource(&self.dir, &self.name)?;

        compare(json, Some(&expected))
    }
}

/// Holds when a path query locates a value.
#[derive(Debug, Clone)]
pub struct ContainJsonKey {
    path: String,
}

/// Matcher for a value located at `path`.
pub fn contain_json_key(path: &str) -> ContainJsonKey {
    ContainJsonKey {
        path: path.to_owned(),
    }
}

impl Matcher for ContainJsonKey {
    fn test(&self, json: Option<&str>) -> Result<MatcherResult, JsonAssertionError> {
        let passed = value_at(json, &self.path)?.is_some();
        let (json, path) = (representation(json), &self.path);

        Ok(MatcherResult::new(
            passed,
            format!("{json} should contain the path '{path}'"),
            format!("{json} should not contain the path '{path}'"),
        ))
    }
}

/// Holds when a path query locates a value equal to an expected one.
#[derive(Debug, Clone)]
pub struct ContainJsonKeyValue {
    path: String,
    expected: Value,
}

/// Matcher for `expected` located at `path`.
///
/// # Errors
///
/// Returns an error when `expected` cannot be encoded as JSON.
pub fn contain_json_key_value<V>(
    path: &str,
    expected: &V,
) -> Result<ContainJsonKeyValue, JsonAssertionError>
where
    V: serde::Serialize + ?Sized,
{
    Ok(ContainJsonKeyValue {
        path: path.to_owned(),
        expected: serde_json::to_value(expected).map_err(JsonAssertionError::UnencodableValue)?,
    })
}

impl Matcher for ContainJsonKeyValue {
    fn test(&self, json: Option<&str>) -> Result<MatcherResult, JsonAssertionError> {
        let actual = value_at(json, &self.path)?;
        let found = actual
            .as_ref()
            .map_or_else(|| "nothing".to_owned(), ToString::to_string);
        let (json, path, expected) = (representation(json), &self.path, &self.expected);

        Ok(MatcherResult::new(
            actual.as_ref() == Some(expected),
            format!("{json} should contain the element '{path}' = {expected} but found {found}"),
            format!("{json} should not contain the element '{path}' = {expected} but it does"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn key_value_pair_count_message_names_document() -> TestResult {
        let result = contain_exactly_key_value_pairs(3).test(Some(r#"{"ok":true}"#))?;

        assert!(!result.passed(), "one entry is not three");
        assert_eq!(
            result.failure_message(),
            r#"JSON object '{"ok":true}' should contain exactly 3 key-value pairs but 1 found."#
        );

        Ok(())
    }

    #[test]
    fn missing_document_is_reported_as_null() -> TestResult {
        let absent = contain_json_key("$.ok").test(None)?;
        let literal = contain_json_key("$.ok").test(Some("null"))?;

        assert_eq!(absent.failure_message(), "null should contain the path '$.ok'");
        assert_eq!(literal.failure_message(), "'null' should contain the path '$.ok'");

        Ok(())
    }

    #[test]
    fn long_documents_are_abbreviated_in_messages() -> TestResult {
        let long = format!(r#"{{"name":"{}"}}"#, "x".repeat(80));

        let result = contain_json_key("$.id").test(Some(&long))?;

        assert!(
            result.failure_message().contains("...' should contain"),
            "got {}",
            result.failure_message()
        );

        Ok(())
    }

    #[test]
    fn match_json_reports_both_trees() -> TestResult {
        let result = match_json(Some(r#"{"ok":true}"#)).test(Some(r#"{"ok":false}"#))?;

        assert_eq!(
            result.failure_message(),
            r#"expected: '{"ok":true}' but was: '{"ok":false}'"#
        );

        Ok(())
    }

    #[test]
    fn match_json_abbreviates_long_trees() -> TestResult {
        let long = format!("[{}]", "1,".repeat(40).trim_end_matches(','));
        let result = match_json(Some("[]")).test(Some(&long))?;

        assert_eq!(
            result.failure_message(),
            format!("expected: '[]' but was: '[{}...'", "1,".repeat(24) + "1")
        );

        Ok(())
    }

    #[test]
    fn key_value_reports_expected_and_actual() -> TestResult {
        let result = contain_json_key_value("$.type", &5)?.test(Some(r#"{"type":3}"#))?;

        assert!(!result.passed(), "3 is not 5");
        assert!(
            result.failure_message().contains("'$.type' = 5 but found 3"),
            "got {}",
            result.failure_message()
        );

        Ok(())
    }

    #[test]
    fn resource_lookup_honours_explicit_dir() {
        let result = match_json_resource("/ok.json")
            .in_dir("/definitely/not/here")
            .test(Some("{}"));

        assert!(
            matches!(result, Err(JsonAssertionError::Resource { .. })),
            "expected Resource error, got {result:?}"
        );
    }
}
