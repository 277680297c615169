pub mod config;
pub mod core;
pub mod utils;

pub use config::CliConfig;
pub use core::formatter::{format_at, format_named, generate, now_local, FormatTag, INVALID_FORMAT};
pub use utils::error::{Result, TimestampError};
