//! Assertions over JSON-encoded strings.
//!
//! A JSON document under test is an `Option<&str>`: `None` means there is no
//! document at all, which is never the same thing as the JSON literal `null`.
//! Paths are RFC 9535 JSON-path queries such as `$.product.name`.
//!
//! ```
//! use eshop_json_assert::JsonAssertions as _;
//!
//! let body = r#"{"ok": true, "id": 7}"#;
//!
//! body.should_contain_json_key_value("$.id", 7);
//! body.should_not_contain_json_key("$.error");
//!
//! let id: i64 = body.should_contain_json_key_and_value_of_type("$.id");
//! assert_eq!(id, 7);
//! ```

mod assertions;
mod error;
mod matcher;
mod matchers;
mod path;
pub mod predicates;
mod repr;
mod resource;

pub use assertions::JsonAssertions;
pub use error::JsonAssertionError;
pub use matcher::{Matcher, MatcherResult, should, should_not};
pub use matchers::{
    ContainExactlyKeyValuePairs, ContainJsonKey, ContainJsonKeyValue, MatchJson,
    MatchJsonResource, contain_exactly_key_value_pairs, contain_json_key, contain_json_key_value,
    match_json, match_json_resource,
};
pub use repr::{abbreviate, representation};
pub use resource::{default_resource_dir, load_resource, resource_path};
