//! Reqcheck Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for HTTP, file system, configuration and
//!   response verification)
//! - Use case orchestration (environment setup, request execution,
//!   users listing checks)
//! - The fixed scenario data the harness iterates over

pub mod ports;
pub mod scenarios;
pub mod use_cases;

pub use ports::{
    EnvironmentError, EnvironmentRepository, FileSystem, FileSystemError, HttpClient,
    HttpClientError, HttpFuture, ResponseVerifier,
};
pub use scenarios::{PAGE_NUMBERS, USERS_ENDPOINT, users_page_suite, users_request};
pub use use_cases::{
    CheckError, CheckUsersPage, ConfigurationError, ConfigureEnvironment, ExecuteRequest,
    ExecuteRequestError,
};
