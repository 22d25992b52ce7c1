pub mod config;
pub mod error;
pub mod page;
pub mod render;

pub use config::{Cli, Config, OutputMode};
pub use error::CliError;
pub use page::{exit_status, run_listing};
