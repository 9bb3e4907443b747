//! Access token validation against the external auth service.

mod client;
mod errors;
mod service;

pub use client::{ACCESS_TOKEN_HEADER, AuthServiceClient, AuthServiceConfig, TokenStatus};
pub use errors::*;
pub use service::*;
