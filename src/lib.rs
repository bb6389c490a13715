pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::console::{ConsolePrinter, ConsoleReader, PresetSource};
pub use config::{CliConfig, LogFormat, OutputFormat};
pub use crate::core::{
    calculator::{order_operands, GcdEngine},
    gcd::{gcd, gcd_traced, gcd_with_policy},
};
pub use domain::model::{GcdOutcome, OperandLabel, Operands, Step, ZeroPolicy};
pub use utils::error::{GcdError, Result};
