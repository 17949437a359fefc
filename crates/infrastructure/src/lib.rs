//! Reqcheck Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;
pub mod serialization;
pub mod testing;

pub use adapters::ReqwestHttpClient;
pub use persistence::{PropertiesEnvironmentRepository, TokioFileSystem};
pub use serialization::{SerializationError, to_json_stable};
pub use testing::TestRunner;
