//! Use cases - Application business logic
//!
//! Each use case orchestrates domain logic and port interactions.

mod check_users_page;
mod configure_environment;
mod execute_request;

pub use check_users_page::{CheckError, CheckUsersPage};
pub use configure_environment::{ConfigurationError, ConfigureEnvironment};
pub use execute_request::{ExecuteRequest, ExecuteRequestError};
