//! Shared test support for service-level tests.

pub(crate) mod helpers;

pub(crate) use context::TestContext;
