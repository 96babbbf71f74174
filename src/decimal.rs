//! Process-wide numeric precision and significant-digit arithmetic.
//!
//! Computed coordinate values (compass conversions, fractional-minute
//! decomposition) round to a fixed number of significant digits after
//! every operation, so `122 + 22/60 + 30/60/60` renders as `122.375000`
//! rather than accumulating full-width intermediate digits. Literal
//! values taken straight from the input are never rounded.

use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::atomic::{AtomicU32, Ordering};

/// Default significant digits for computed coordinate values.
pub const DEFAULT_PRECISION: u32 = 9;

static PRECISION: AtomicU32 = AtomicU32::new(DEFAULT_PRECISION);

/// Set the global precision. Must be called before extraction starts;
/// the engine treats it as read-only afterwards.
pub fn set_precision(sig: u32) {
    PRECISION.store(sig.max(1), Ordering::Relaxed);
}

/// The current global precision in significant digits.
pub fn precision() -> u32 {
    PRECISION.load(Ordering::Relaxed)
}

/// Divide and round the result to the ambient precision.
pub fn div(a: Decimal, b: Decimal) -> Decimal {
    round_sig(a / b)
}

/// Add and round the result to the ambient precision.
pub fn add(a: Decimal, b: Decimal) -> Decimal {
    round_sig(a + b)
}

/// Multiply and round the result to the ambient precision.
pub fn mul(a: Decimal, b: Decimal) -> Decimal {
    round_sig(a * b)
}

/// Round to the ambient precision.
pub fn round_sig(value: Decimal) -> Decimal {
    round_to_sig(value, precision())
}

/// Round `value` to `sig` significant digits, banker's rounding at the
/// midpoint. Values already within the precision pass through unchanged,
/// keeping their scale (and therefore their trailing zeros).
pub fn round_to_sig(value: Decimal, sig: u32) -> Decimal {
    if value.is_zero() || sig == 0 {
        return value;
    }

    let digits = value.mantissa().unsigned_abs().to_string().len() as i64;
    let scale = value.scale() as i64;
    // Base-10 exponent of the leading significant digit.
    let lead = digits - 1 - scale;
    let keep = sig as i64 - 1 - lead;

    if keep >= scale {
        return value;
    }
    if keep >= 0 {
        return value.round_dp_with_strategy(keep as u32, RoundingStrategy::MidpointNearestEven);
    }

    // Rounding position is left of the decimal point. The exponent is
    // bounded by the 28-digit mantissa, so the shift always fits.
    let shift = Decimal::from_i128_with_scale(10i128.pow((-keep) as u32), 0);
    (value / shift).round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven) * shift
}
