//! Matcher abstraction and the `should` / `should_not` drivers.

use crate::JsonAssertionError;

/// Outcome of testing a document, with the message for either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherResult {
    passed: bool,
    failure_message: String,
    negated_failure_message: String,
}

impl MatcherResult {
    /// Creates a result from the outcome and both failure messages.
    pub fn new(
        passed: bool,
        failure_message: impl Into<String>,
        negated_failure_message: impl Into<String>,
    ) -> Self {
        Self {
            passed,
            failure_message: failure_message.into(),
            negated_failure_message: negated_failure_message.into(),
        }
    }

    /// Whether the matcher held.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Message used when a positive assertion fails.
    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }

    /// Message used when a negated assertion fails.
    pub fn negated_failure_message(&self) -> &str {
        &self.negated_failure_message
    }

    /// `Ok` when the matcher held, otherwise the failure message as an error.
    ///
    /// # Errors
    ///
    /// Returns [`JsonAssertionError::Mismatch`] when the matcher did not hold.
    pub fn into_result(self) -> Result<(), JsonAssertionError> {
        if self.passed {
            Ok(())
        } else {
            Err(JsonAssertionError::Mismatch(self.failure_message))
        }
    }

    /// `Ok` when the matcher did not hold, otherwise the negated message as an error.
    ///
    /// # Errors
    ///
    /// Returns [`JsonAssertionError::Mismatch`] when the matcher held.
    pub fn into_negated_result(self) -> Result<(), JsonAssertionError> {
        if self.passed {
            Err(JsonAssertionError::Mismatch(self.negated_failure_message))
        } else {
            Ok(())
        }
    }
}

/// A property of a JSON document, or of the absence of one.
pub trait Matcher {
    /// Tests `json`.
    ///
    /// # Errors
    ///
    /// Returns an error when the property cannot be evaluated at all, for example
    /// because `json` is not valid JSON. Such errors fail positive and negated
    /// assertions alike.
    fn test(&self, json: Option<&str>) -> Result<MatcherResult, JsonAssertionError>;
}

/// Asserts that `matcher` holds for `json`.
///
/// # Panics
///
/// Panics with the failure message when the matcher does not hold or cannot be
/// evaluated.
#[track_caller]
pub fn should<M: Matcher + ?Sized>(json: Option<&str>, matcher: &M) {
    if let Err(error) = matcher.test(json).and_then(MatcherResult::into_result) {
        fail(&error);
    }
}

/// Asserts that `matcher` does not hold for `json`.
///
/// # Panics
///
/// Panics with the negated failure message when the matcher holds, or when it
/// cannot be evaluated.
#[track_caller]
pub fn should_not<M: Matcher + ?Sized>(json: Option<&str>, matcher: &M) {
    if let Err(error) = matcher.test(json).and_then(MatcherResult::into_negated_result) {
        fail(&error);
    }
}

#[track_caller]
#[expect(
    clippy::panic,
    reason = "assertion failures are reported to the test harness by panicking"
)]
pub(crate) fn fail(error: &JsonAssertionError) -> ! {
    panic!("{error}")
}
