use crate::domain::model::{GcdOutcome, OperandLabel};
use crate::utils::error::Result;

pub trait OperandSource {
    fn read_operand(&mut self, label: OperandLabel) -> Result<i64>;
}

pub trait ResultSink {
    fn emit(&mut self, outcome: &GcdOutcome) -> Result<()>;
}
