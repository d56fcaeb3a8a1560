use crate::lang::token::Operator;

/// ## Saturating 32-bit arithmetic
///
/// Results out of the `i32` range clamp to the nearest rail instead of
/// wrapping. Intermediates are computed in `i64`, which is wide enough
/// for every operator except exponentiation; that one falls back to a
/// sign test once `checked_pow` reports the magnitude has left even the
/// `i64` range. Division and modulus by zero never reach this code, the
/// runtime intercepts them first.

pub struct Operation {}

impl Operation {
    pub fn apply(operator: &Operator, lhs: i32, rhs: i32) -> i32 {
        use Operator::*;
        match operator {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Modulus => Operation::modulus(lhs, rhs),
            Caret => Operation::power(lhs, rhs),
        }
    }

    pub fn sum(lhs: i32, rhs: i32) -> i32 {
        clamp(lhs as i64 + rhs as i64)
    }

    pub fn subtract(lhs: i32, rhs: i32) -> i32 {
        clamp(lhs as i64 - rhs as i64)
    }

    pub fn multiply(lhs: i32, rhs: i32) -> i32 {
        clamp(lhs as i64 * rhs as i64)
    }

    pub fn divide(lhs: i32, rhs: i32) -> i32 {
        debug_assert!(rhs != 0, "Divisor zero must be intercepted upstream.");
        // the one overflowing quotient is MIN / -1
        clamp(lhs as i64 / rhs as i64)
    }

    /// Truncating remainder, except that an operand sitting exactly on a
    /// rail pins the result to that rail. MAX wins when both rails are
    /// present, matching the original.
    pub fn modulus(lhs: i32, rhs: i32) -> i32 {
        if lhs == i32::MAX || rhs == i32::MAX {
            return i32::MAX;
        }
        if lhs == i32::MIN || rhs == i32::MIN {
            return i32::MIN;
        }
        debug_assert!(rhs != 0, "Divisor zero must be intercepted upstream.");
        lhs % rhs
    }

    pub fn power(lhs: i32, rhs: i32) -> i32 {
        debug_assert!(rhs >= 0, "Negative exponents must be intercepted upstream.");
        match (lhs as i64).checked_pow(rhs as u32) {
            Some(result) => clamp(result),
            // overflowing i64 needs |base| >= 2, so only the sign of the
            // exact result is left to decide
            None => {
                if lhs > 0 || rhs % 2 == 0 {
                    i32::MAX
                } else {
                    i32::MIN
                }
            }
        }
    }
}

fn clamp(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        value as i32
    }
}
