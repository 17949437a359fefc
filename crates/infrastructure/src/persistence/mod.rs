//! File-backed configuration adapters.

mod file_system;
mod properties_repository;

pub use file_system::TokioFileSystem;
pub use properties_repository::PropertiesEnvironmentRepository;
