use crate::amount::{AmountUnit, BASE_EXPONENT, HAO_PER_OMC};
use crate::util::{Error, Result};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// An amount of OMC in Hao
///
/// Use the tuple constructor for raw Hao and `from_float` for human entered
/// decimal amounts.
#[derive(Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Amount(pub i64);

impl Amount {
    /// Zero Hao
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from a float in OMC, or in Hao if `raw` is set
    ///
    /// Fails for NaN and infinities. The result is rounded half away from
    /// zero and is not checked against the total supply.
    pub fn from_float(value: f64, raw: bool) -> Result<Amount> {
        if value.is_nan() || value.is_infinite() {
            debug!("Rejecting amount {}", value);
            return Err(Error::InvalidAmount(value));
        }
        if raw {
            Ok(round(value))
        } else {
            Ok(round(value * HAO_PER_OMC as f64))
        }
    }

    /// Converts the amount to a float in the given unit
    pub fn to_unit(&self, unit: AmountUnit) -> f64 {
        self.0 as f64 / pow10(unit.0.saturating_add(BASE_EXPONENT))
    }

    /// Converts the amount to a float in OMC
    pub fn to_omc(&self) -> f64 {
        self.to_unit(AmountUnit::OMC)
    }

    /// Formats the amount in the given unit followed by the unit's label
    pub fn format(&self, unit: AmountUnit) -> String {
        let value = self.to_unit(unit);
        let precision = -(unit.0 as i64 + BASE_EXPONENT as i64);
        if precision < 0 || !value.is_finite() {
            // Shortest round trip form, or inf/NaN
            return format!("{} {}", value, unit);
        }
        // Runtime precision is capped at u16::MAX by core::fmt
        let capped = precision.min(MAX_PRECISION);
        let mut s = format!("{:.*}", capped as usize, value);
        s.extend(std::iter::repeat('0').take((precision - capped) as usize));
        format!("{} {}", s, unit)
    }

    /// Multiplies by a float, rounding half away from zero
    ///
    /// Handy for proportional calculations like a fee percentage.
    pub fn mul_f64(&self, f: f64) -> Amount {
        round(self.0 as f64 * f)
    }

    /// Adds two amounts, returning None on overflow
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Subtracts two amounts, returning None on overflow
    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Returns the absolute value
    pub fn abs(self) -> Amount {
        Amount(self.0.abs())
    }

    /// Returns whether the amount is below zero
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

const MAX_PRECISION: i64 = std::u16::MAX as i64;

/// Rounds half away from zero. Out of range values saturate.
fn round(f: f64) -> Amount {
    if f < 0. {
        Amount((f - 0.5) as i64)
    } else {
        Amount((f + 0.5) as i64)
    }
}

fn pow10(n: i32) -> f64 {
    if n >= 0 {
        10f64.powi(n)
    } else {
        // 10^-n is exact up to 1e22 so the division rounds once
        1. / 10f64.powi(n.saturating_neg())
    }
}

impl From<i64> for Amount {
    fn from(hao: i64) -> Amount {
        Amount(hao)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> i64 {
        amount.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        self.0 -= rhs.0;
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format(AmountUnit::OMC))
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&format!("{} Hao", self.0))
    }
}
