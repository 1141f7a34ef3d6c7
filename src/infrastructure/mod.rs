//! Infrastructure layer - HTTP plumbing and vector index implementations

pub mod http;
pub mod index;
pub mod services;
