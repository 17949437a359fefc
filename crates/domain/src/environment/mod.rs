//! Environment selection and configuration domain types

mod config;
mod label;
mod suite;

pub use config::{BASE_URI_KEY, EnvironmentConfig};
pub use label::EnvironmentLabel;
pub use suite::SuiteConfig;
