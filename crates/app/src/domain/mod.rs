//! eShop Domain Concerns

pub mod products;
