//! Reqcheck Domain - Core harness types
//!
//! This crate defines the domain model for the reqcheck API test harness.
//! All types here are pure Rust with no I/O dependencies.

pub mod environment;
pub mod error;
pub mod request;
pub mod response;
pub mod testing;
pub mod users;

pub use environment::{BASE_URI_KEY, EnvironmentConfig, EnvironmentLabel, SuiteConfig};
pub use error::{DomainError, DomainResult};
pub use request::{QueryParam, QueryParams, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
pub use testing::{Assertion, AssertionResult, TestResults, TestSuite};
pub use users::{Support, User, UserPage};
