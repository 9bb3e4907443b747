//! JSON-path lookups.

use serde_json::Value;
use serde_json_path::JsonPath;

use crate::{JsonAssertionError, repr::representation};

/// Parses `json`, keeping the abbreviated text for error messages.
pub(crate) fn parse_document(json: &str) -> Result<Value, JsonAssertionError> {
    serde_json::from_str(json).map_err(|source| JsonAssertionError::InvalidJson {
        json: representation(Some(json)),
        source,
    })
}

/// Locates `path` in `document`.
///
/// Returns `None` when nothing matches. A query that can select several nodes
/// (wildcards, descendants, filters, slices, unions) always yields an array of
/// every match, in document order.
pub(crate) fn find(document: &Value, path: &str) -> Result<Option<Value>, JsonAssertionError> {
    let query = JsonPath::parse(path).map_err(|source| JsonAssertionError::InvalidPath {
        path: path.to_owned(),
        source,
    })?;

    let nodes = query.query(document).all();

    if is_singular(path) {
        return Ok(nodes.first().map(|node| (*node).clone()));
    }

    Ok((!nodes.is_empty()).then(|| Value::Array(nodes.into_iter().cloned().collect())))
}

/// Whether an already valid `path` can address at most one node.
///
/// Comparisons inside a filter only accept singular queries (name and index
/// segments, no descendants), so the parser itself decides.
fn is_singular(path: &str) -> bool {
    JsonPath::parse(&format!("$[?{path} == null]")).is_ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn finds_nested_values() -> TestResult {
        let document = json!({ "product": { "name": "Socks", "type": 5 } });

        assert_eq!(find(&document, "$.product.type")?, Some(json!(5)));

        Ok(())
    }

    #[test]
    fn missing_path_is_none() -> TestResult {
        let document = json!({ "ok": true });

        assert_eq!(find(&document, "$.product")?, None);

        Ok(())
    }

    #[test]
    fn null_value_is_found() -> TestResult {
        let document = json!({ "deleted_at": null });

        assert_eq!(find(&document, "$.deleted_at")?, Some(Value::Null));

        Ok(())
    }

    #[test]
    fn wildcards_collect_every_match() -> TestResult {
        let document = json!({ "products": [{ "id": 1 }] });

        assert_eq!(find(&document, "$.products[*].id")?, Some(json!([1])));

        Ok(())
    }

    #[test]
    fn bracket_names_with_selector_characters_stay_singular() -> TestResult {
        let document = json!({ "time:zone": "UTC", "a,b": 1, "x..y": 2, "w[*]": 3, "q[?": 4 });

        assert_eq!(find(&document, "$['time:zone']")?, Some(json!("UTC")));
        assert_eq!(find(&document, "$['a,b']")?, Some(json!(1)));
        assert_eq!(find(&document, "$['x..y']")?, Some(json!(2)));
        assert_eq!(find(&document, "$[\"w[*]\"]")?, Some(json!(3)));
        assert_eq!(find(&document, "$['q[?']")?, Some(json!(4)));

        Ok(())
    }

    #[test]
    fn singularity_follows_the_query_shape() {
        assert!(is_singular("$"));
        assert!(is_singular("$.product.name"));
        assert!(is_singular("$.products[0]['type']"));
        assert!(!is_singular("$.products[*]"));
        assert!(!is_singular("$..name"));
        assert!(!is_singular("$.products[0:2]"));
        assert!(!is_singular("$.products[0,1]"));
        assert!(!is_singular("$.products[?@.type == 5]"));
    }

    #[test]
    fn unions_and_slices_collect_every_match() -> TestResult {
        let document = json!({ "products": [{ "id": 1 }, { "id": 2 }, { "id": 3 }] });

        assert_eq!(find(&document, "$.products[0,2].id")?, Some(json!([1, 3])));
        assert_eq!(find(&document, "$.products[1:].id")?, Some(json!([2, 3])));
        assert_eq!(find(&document, "$..id")?, Some(json!([1, 2, 3])));

        Ok(())
    }

    #[test]
    fn invalid_path_is_an_error() {
        let result = find(&json!({}), "products[");

        assert!(
            matches!(result, Err(JsonAssertionError::InvalidPath { .. })),
            "expected InvalidPath, got {result:?}"
        );
    }

    #[test]
    fn invalid_document_is_an_error() {
        let result = parse_document("{\"ok\": ");

        assert!(
            matches!(result, Err(JsonAssertionError::InvalidJson { .. })),
            "expected InvalidJson, got {result:?}"
        );
    }
}
