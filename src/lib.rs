pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::fault::{NoFaultInjection, RandomFaultPolicy};
pub use adapters::http::ApiClient;
pub use adapters::notify::LogNotifier;
pub use config::{file::FileConfig, CliConfig};
pub use crate::core::console::VoyageConsole;
pub use crate::core::coordinator::SubmitOutcome;
pub use utils::error::{ConsoleError, Result};
