use crate::domain::model::{Step, ZeroPolicy};

/// Greatest common divisor by recursive remainder reduction, using the
/// historical base case: as soon as either operand is zero the result is 1.
///
/// Because every reduction ends with a zero operand, this always returns 1.
/// Use [`gcd_with_policy`] with [`ZeroPolicy::Euclid`] for the textbook result.
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_with_policy(a, b, ZeroPolicy::Preserve)
}

pub fn gcd_with_policy(a: i64, b: i64, policy: ZeroPolicy) -> u64 {
    reduce(a, b, policy, &mut |_| {})
}

/// Like [`gcd_with_policy`], also returning every `(a, b)` call in order,
/// the terminating one included.
pub fn gcd_traced(a: i64, b: i64, policy: ZeroPolicy) -> (u64, Vec<Step>) {
    let mut steps = Vec::new();
    let result = reduce(a, b, policy, &mut |step| steps.push(step));
    (result, steps)
}

fn reduce(a: i64, b: i64, policy: ZeroPolicy, on_step: &mut dyn FnMut(Step)) -> u64 {
    on_step(Step { a, b });
    tracing::trace!(a, b, "reduce");

    match policy {
        ZeroPolicy::Preserve => {
            if a == 0 || b == 0 {
                return 1;
            }
        }
        ZeroPolicy::Euclid => {
            if b == 0 {
                return a.unsigned_abs();
            }
            if a == 0 {
                return b.unsigned_abs();
            }
        }
    }

    // i64::MIN % -1 overflows; the true remainder is 0.
    reduce(b, a.wrapping_rem(b), policy, on_step)
}
