//! Step arithmetic of the Swing communication pattern.
//!
//! At step `s` every node talks to a partner at signed distance
//! `ρ(s) = Σ_{i=0..=s} (-2)^i = (1 - (-2)^(s+1)) / 3`, i.e. 1, -1, 3, -5, 11, -21, 43, ...
//! Even nodes move by `+ρ(s)`, odd nodes by `-ρ(s)`, so partners always pair up.

use crate::types::{TopoError, TopoResult, MAX_STEP};

/// Signed swing distance at `step`, computed with exact integer arithmetic.
///
/// Fails with [`TopoError::StepOutOfRange`] for `step > MAX_STEP`.
pub fn distance(step: u32) -> TopoResult<i64> {
    if step > MAX_STEP {
        return Err(TopoError::StepOutOfRange {
            step,
            max: MAX_STEP,
        });
    }
    // (-2)^64 still fits i128; 1 - (-2)^k is always divisible by 3.
    let value = (1 - (-2i128).pow(step + 1)) / 3;
    i64::try_from(value).map_err(|_| TopoError::StepOutOfRange {
        step,
        max: MAX_STEP,
    })
}

/// Partner of node `u` at `step` on a ring of `n` nodes, in `[0, n)`.
pub fn target(u: usize, step: u32, n: usize) -> TopoResult<usize> {
    if n == 0 {
        return Err(TopoError::invalid("n", "ring must have at least one node"));
    }
    let d = i128::from(distance(step)?);
    let offset = if u % 2 == 0 { d } else { -d };
    Ok(wrap(u as i128 + offset, n))
}

/// Reduce `value` onto a ring of `n > 0` nodes.
pub(crate) fn wrap(value: i128, n: usize) -> usize {
    value.rem_euclid(n as i128) as usize
}
