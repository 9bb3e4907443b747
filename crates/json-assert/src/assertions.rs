//! Assertion methods on anything that may hold a JSON document.

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    ContainJsonKeyValue, contain_exactly_key_value_pairs, contain_json_key,
    contain_json_key_value, match_json, match_json_resource,
    matcher::{fail, should, should_not},
    predicates::value_of_type,
};

fn expect_value<V: Serialize + ?Sized>(path: &str, expected: &V) -> ContainJsonKeyValue {
    contain_json_key_value(path, expected).unwrap_or_else(|error| fail(&error))
}

/// Assertions on a JSON document held as text.
///
/// Implemented for `str`, `String`, `Option<&str>` and `Option<String>`; the
/// `Option` forms let "no document" be asserted on directly. Every method
/// panics with a descriptive message when the assertion does not hold.
pub trait JsonAssertions {
    /// The document, or `None` when there is none.
    fn json_document(&self) -> Option<&str>;

    /// Asserts the document is an object with exactly `count` entries.
    #[track_caller]
    fn should_contain_exactly_key_value_pairs(&self, count: usize) {
        should(self.json_document(), &contain_exactly_key_value_pairs(count));
    }

    /// Asserts the document is not an object with exactly `count` entries.
    #[track_caller]
    fn should_not_contain_exactly_key_value_pairs(&self, count: usize) {
        should_not(self.json_document(), &contain_exactly_key_value_pairs(count));
    }

    /// Asserts structural equality with `expected`.
    #[track_caller]
    fn should_match_json(&self, expected: &str) {
        should(self.json_document(), &match_json(Some(expected)));
    }

    /// Asserts structural inequality with `expected`.
    #[track_caller]
    fn should_not_match_json(&self, expected: &str) {
        should_not(self.json_document(), &match_json(Some(expected)));
    }

    /// Asserts structural equality with the resource file `name`.
    #[track_caller]
    fn should_match_json_resource(&self, name: &str) {
        should(self.json_document(), &match_json_resource(name));
    }

    /// Asserts structural inequality with the resource file `name`.
    #[track_caller]
    fn should_not_match_json_resource(&self, name: &str) {
        should_not(self.json_document(), &match_json_resource(name));
    }

    /// Asserts `path` locates a value and returns it, compact-encoded.
    #[track_caller]
    fn should_contain_json_key(&self, path: &str) -> String {
        value_of_type::<serde_json::Value>(self.json_document(), path)
            .unwrap_or_else(|error| fail(&error))
            .to_string()
    }

    /// Asserts `path` locates nothing.
    #[track_caller]
    fn should_not_contain_json_key(&self, path: &str) {
        should_not(self.json_document(), &contain_json_key(path));
    }

    /// Asserts `path` locates a value equal to `expected`.
    #[track_caller]
    fn should_contain_json_key_value<V: Serialize>(&self, path: &str, expected: V) {
        should(self.json_document(), &expect_value(path, &expected));
    }

    /// Asserts `path` does not locate a value equal to `expected`.
    #[track_caller]
    fn should_not_contain_json_key_value<V: Serialize>(&self, path: &str, expected: V) {
        should_not(self.json_document(), &expect_value(path, &expected));
    }

    /// Asserts `path` locates a value of type `T` and returns it.
    ///
    /// A missing path and a value of another type fail with different messages.
    #[track_caller]
    fn should_contain_json_key_and_value_of_type<T: DeserializeOwned>(&self, path: &str) -> T {
        value_of_type(self.json_document(), path).unwrap_or_else(|error| fail(&error))
    }

    /// Asserts the document is an object with exactly one entry, located by `path`.
    #[track_caller]
    fn should_contain_only_json_key(&self, path: &str) -> String {
        self.should_contain_exactly_key_value_pairs(1);
        self.should_contain_json_key(path)
    }

    /// Asserts the document is an object whose only entry, located by `path`,
    /// is a `T`, and returns it.
    #[track_caller]
    fn should_contain_only_json_key_and_value_of_type<T: DeserializeOwned>(&self, path: &str) -> T {
        self.should_contain_exactly_key_value_pairs(1);
        self.should_contain_json_key_and_value_of_type(path)
    }
}

impl JsonAssertions for str {
    fn json_document(&self) -> Option<&str> {
        Some(self)
    }
}

impl JsonAssertions for String {
    fn json_document(&self) -> Option<&str> {
        Some(self)
    }
}

impl JsonAssertions for Option<&str> {
    fn json_document(&self) -> Option<&str> {
        *self
    }
}

impl JsonAssertions for Option<String> {
    fn json_document(&self) -> Option<&str> {
        self.as_deref()
    }
}
