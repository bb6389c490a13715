use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two prompted values is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandLabel {
    First,
    Second,
}

impl fmt::Display for OperandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandLabel::First => f.write_str("first"),
            OperandLabel::Second => f.write_str("second"),
        }
    }
}

/// Base case applied once an operand reaches zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ZeroPolicy {
    /// Any zero operand yields 1. Historical behavior.
    #[default]
    Preserve,
    /// Textbook base case: gcd(a, 0) = |a|.
    Euclid,
}

/// The two values as entered, before ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operands {
    pub first: i64,
    pub second: i64,
}

/// One call of the recursive reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub a: i64,
    pub b: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdOutcome {
    pub operands: Operands,
    pub policy: ZeroPolicy,
    pub result: u64,
    pub steps: Vec<Step>,
}
