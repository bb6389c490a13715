use crate::core::gcd::gcd_traced;
use crate::core::{OperandSource, ResultSink};
use crate::domain::model::{GcdOutcome, OperandLabel, Operands, ZeroPolicy};
use crate::utils::error::Result;

/// Returns `(larger, smaller)`; ties keep `second` first.
pub fn order_operands(first: i64, second: i64) -> (i64, i64) {
    if first > second {
        (first, second)
    } else {
        (second, first)
    }
}

pub struct GcdEngine<S: OperandSource, K: ResultSink> {
    source: S,
    sink: K,
    policy: ZeroPolicy,
}

impl<S: OperandSource, K: ResultSink> GcdEngine<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self::with_policy(source, sink, ZeroPolicy::default())
    }

    pub fn with_policy(source: S, sink: K, policy: ZeroPolicy) -> Self {
        Self {
            source,
            sink,
            policy,
        }
    }

    pub fn run(&mut self) -> Result<GcdOutcome> {
        let first = self.source.read_operand(OperandLabel::First)?;
        let second = self.source.read_operand(OperandLabel::Second)?;
        tracing::debug!("Read operands: first={}, second={}", first, second);

        let (larger, smaller) = order_operands(first, second);
        tracing::debug!("Computing gcd({}, {}) with {:?} policy", larger, smaller, self.policy);

        let (result, steps) = gcd_traced(larger, smaller, self.policy);
        for step in &steps {
            tracing::debug!("step gcd({}, {})", step.a, step.b);
        }
        tracing::info!("Result {} after {} steps", result, steps.len());

        let outcome = GcdOutcome {
            operands: Operands { first, second },
            policy: self.policy,
            result,
            steps,
        };
        self.sink.emit(&outcome)?;

        Ok(outcome)
    }

    pub fn into_parts(self) -> (S, K) {
        (self.source, self.sink)
    }
}
