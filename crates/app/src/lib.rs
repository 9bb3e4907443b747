//! Product service domain, persistence, and auth service client.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod ids;
