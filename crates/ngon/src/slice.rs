//! Slice-bound resolution against a finite produced length.
//!
//! Semantics follow the usual sequence-slicing rules: negative bounds count
//! from the end, out-of-bounds slice bounds clamp instead of failing (unlike
//! single-index access), and the defaults depend on the sign of the step.

use crate::error::Error;

/// Concrete slice bounds resolved against a length.
///
/// Invariants:
/// - `step != 0`.
/// - For `step > 0`: `cur` and `stop` lie in `[0, len]`.
/// - For `step < 0`: `cur` and `stop` lie in `[-1, len - 1]`.
///
/// Iterates the selected indices in slice order; every yielded index is a
/// valid position in the underlying sequence.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedSlice {
    cur: i64,
    stop: i64,
    step: i64,
}

/// Resolve `(start, stop, step)` against `len`.
///
/// `None` bounds take the default for the step direction (`0..len` forward,
/// `len-1..past-the-front` backward). `step == 0` fails.
pub fn resolve(
    start: Option<i64>,
    stop: Option<i64>,
    step: i64,
    len: usize,
) -> Result<ResolvedSlice, Error> {
    if step == 0 {
        return Err(Error::ZeroStep);
    }
    let len = len as i64;
    // Clamp ranges differ by direction: a backward slice may legally stop
    // one position before the front (-1) but never start past len - 1.
    let (lo, hi, default_start, default_stop) = if step > 0 {
        (0, len, 0, len)
    } else {
        (-1, len - 1, len - 1, -1)
    };
    let adjust = |bound: Option<i64>, default: i64| -> i64 {
        match bound {
            None => default,
            Some(mut v) => {
                if v < 0 {
                    v += len;
                }
                v.clamp(lo, hi)
            }
        }
    };
    Ok(ResolvedSlice {
        cur: adjust(start, default_start),
        stop: adjust(stop, default_stop),
        step,
    })
}

impl Iterator for ResolvedSlice {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let exhausted = if self.step > 0 {
            self.cur >= self.stop
        } else {
            self.cur <= self.stop
        };
        if exhausted {
            return None;
        }
        let index = self.cur as usize;
        self.cur += self.step;
        Some(index)
    }
}
