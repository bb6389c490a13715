use crate::domain::model::ZeroPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_exclusive_flags, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// JSON output keeps stdout machine-readable, so prompts move to stderr.
    pub fn prompts_on_stderr(self) -> bool {
        self == OutputFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "gcd-calc")]
#[command(about = "Reads two integers and prints their greatest common divisor")]
pub struct CliConfig {
    /// First operand; prompted for when omitted
    #[arg(long, allow_negative_numbers = true)]
    pub first: Option<i64>,

    /// Second operand; prompted for when omitted
    #[arg(long, allow_negative_numbers = true)]
    pub second: Option<i64>,

    /// Base case used once an operand reaches zero
    #[arg(long, value_enum, default_value_t = ZeroPolicy::Preserve)]
    pub zero_policy: ZeroPolicy,

    /// Result output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print every reduction step before the result
    #[arg(long)]
    pub trace: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_exclusive_flags(
            "trace",
            self.trace,
            self.format == OutputFormat::Json,
            "--trace cannot be combined with --format json; JSON output already includes the steps",
        )
    }
}
