//! Conversions between OMC denominations
//!
//! An [`Amount`] counts Hao, the smallest unit. One OMC is 1e8 Hao. An
//! [`AmountUnit`] picks the denomination used when converting to a float or
//! formatting for display.
//!
//! [`Amount`]: struct.Amount.html
//! [`AmountUnit`]: struct.AmountUnit.html

mod amount;
mod unit;

pub use self::amount::Amount;
pub use self::unit::AmountUnit;

/// Symbol of the display coin
pub const COIN_SYMBOL: &str = "OMC";

/// Number of Hao in one OMC
pub const HAO_PER_OMC: i64 = 100_000_000;

/// Decimal exponent of one OMC relative to one Hao
pub const BASE_EXPONENT: i32 = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert!(HAO_PER_OMC == 10i64.pow(BASE_EXPONENT as u32));
        assert!(Amount(HAO_PER_OMC).to_string() == "1 OMC");
        assert!(AmountUnit(-BASE_EXPONENT) == AmountUnit::HAO);
    }
}
