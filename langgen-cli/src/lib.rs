//! CLI library for testing purposes

pub mod catalog;
pub mod generate;
pub mod inspect;
pub mod validation;

pub use catalog::load_catalog;
pub use generate::{GenerateOptions, run_generate_command};
pub use inspect::{run_keys_command, run_validate_command};
