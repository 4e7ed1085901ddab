//! Network layer: REST API calls, the push channel, and the repository
//! that reconciles both into the scene cache.

pub mod api;
pub mod channel;
pub mod repository;
pub mod types;
