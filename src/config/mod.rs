use clap::Parser;

use crate::core::formatter::FormatTag;

#[derive(Debug, Clone, Parser)]
#[command(name = "tstamp")]
#[command(about = "Generate a timestamp for the current moment in one of several fixed formats")]
pub struct CliConfig {
    /// Output format for the timestamp
    #[arg(value_enum, default_value = "full")]
    pub format: FormatTag,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
