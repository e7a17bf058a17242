//! Checked fixed-point math for rates and token amounts
//!
//! Rates are expressed as 18-decimal fixed-point numbers. Every helper
//! returns `None` instead of panicking so callers can map overflow to their
//! own contract error.

/// Number of decimals carried by a fixed-point rate.
pub const RATE_DECIMALS: u32 = 18;

/// `10^RATE_DECIMALS`, the fixed-point representation of `1.0`.
pub const RATE_SCALE: i128 = 1_000_000_000_000_000_000;

/// Checked arithmetic on i128 token amounts
pub struct SafeMath;

impl SafeMath {
    /// Add two amounts, `None` on overflow
    pub fn add(a: i128, b: i128) -> Option<i128> {
        a.checked_add(b)
    }

    /// Subtract `b` from `a`, `None` on overflow
    pub fn sub(a: i128, b: i128) -> Option<i128> {
        a.checked_sub(b)
    }

    /// Compute `a * b / c`, truncating toward zero.
    ///
    /// Returns `None` if `c` is zero or the intermediate product overflows.
    pub fn mul_div(a: i128, b: i128, c: i128) -> Option<i128> {
        if c == 0 {
            return None;
        }
        a.checked_mul(b)?.checked_div(c)
    }
}

/// Conversions between payment and sale amounts at a fixed-point rate
pub struct FixedPoint;

impl FixedPoint {
    /// Build a fixed-point rate from a whole part and a fractional numerator
    /// over `10^fraction_decimals`, e.g. `from_parts(0, 1, 1)` is `0.1`.
    pub fn from_parts(whole: i128, fraction: i128, fraction_decimals: u32) -> Option<i128> {
        if fraction_decimals > RATE_DECIMALS {
            return None;
        }
        let frac_scale = 10i128.checked_pow(RATE_DECIMALS - fraction_decimals)?;
        whole
            .checked_mul(RATE_SCALE)?
            .checked_add(fraction.checked_mul(frac_scale)?)
    }

    /// Sale-asset units bought by `payment` when one sale unit costs `rate`
    /// payment units: `payment * RATE_SCALE / rate`, truncated toward zero.
    ///
    /// # Arguments
    /// * `payment` - Payment-asset amount (raw units)
    /// * `rate` - Payment units per sale unit, 18-decimal fixed point
    ///
    /// # Returns
    /// `None` on a non-positive rate or overflow
    pub fn sale_amount_for(payment: i128, rate: i128) -> Option<i128> {
        if rate <= 0 {
            return None;
        }
        SafeMath::mul_div(payment, RATE_SCALE, rate)
    }
}
