pub mod calculator;
pub mod gcd;

pub use crate::domain::model::{GcdOutcome, Operands, Step, ZeroPolicy};
pub use crate::domain::ports::{OperandSource, ResultSink};
pub use crate::utils::error::Result;
