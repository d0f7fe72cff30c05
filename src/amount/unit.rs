use crate::amount::COIN_SYMBOL;
use crate::util::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Denomination of an OMC amount
///
/// The value is the base 10 exponent of the unit relative to one OMC, so an
/// amount converts to this unit by dividing its Hao by `10^(exponent + 8)`.
/// Only a handful of exponents have names but every `i32` is a usable unit.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct AmountUnit(pub i32);

impl AmountUnit {
    /// One million OMC
    pub const MEGA_OMC: AmountUnit = AmountUnit(6);
    /// One thousand OMC
    pub const KILO_OMC: AmountUnit = AmountUnit(3);
    /// One OMC
    pub const OMC: AmountUnit = AmountUnit(0);
    /// One thousandth of an OMC
    pub const MILLI_OMC: AmountUnit = AmountUnit(-3);
    /// One millionth of an OMC
    pub const MICRO_OMC: AmountUnit = AmountUnit(-6);
    /// One hundred millionth of an OMC, the smallest unit
    pub const HAO: AmountUnit = AmountUnit(-8);

    /// Returns the exponent relative to one OMC
    pub fn exponent(&self) -> i32 {
        self.0
    }

    /// Returns the SI label for named units, "Hao" for the base unit, or
    /// "1eN OMC" for everything else
    pub fn label(&self) -> String {
        match *self {
            AmountUnit::MEGA_OMC => format!("M{}", COIN_SYMBOL),
            AmountUnit::KILO_OMC => format!("k{}", COIN_SYMBOL),
            AmountUnit::OMC => COIN_SYMBOL.to_string(),
            AmountUnit::MILLI_OMC => format!("m{}", COIN_SYMBOL),
            AmountUnit::MICRO_OMC => format!("μ{}", COIN_SYMBOL),
            AmountUnit::HAO => "Hao".to_string(),
            AmountUnit(e) => format!("1e{} {}", e, COIN_SYMBOL),
        }
    }

    /// Parses a unit from its label
    ///
    /// Labels are case sensitive since "MOMC" and "mOMC" differ. "uOMC" is
    /// accepted for micro.
    pub fn parse(s: &str) -> Result<AmountUnit> {
        let s = s.trim();
        let unit = match s {
            "MOMC" => AmountUnit::MEGA_OMC,
            "kOMC" => AmountUnit::KILO_OMC,
            "OMC" => AmountUnit::OMC,
            "mOMC" => AmountUnit::MILLI_OMC,
            "μOMC" | "uOMC" => AmountUnit::MICRO_OMC,
            "Hao" => AmountUnit::HAO,
            _ => {
                let exponent = s
                    .strip_prefix("1e")
                    .and_then(|rest| rest.strip_suffix(COIN_SYMBOL))
                    .map(|rest| rest.trim_end());
                match exponent {
                    Some(e) if !e.is_empty() => AmountUnit(e.parse::<i32>()?),
                    _ => {
                        debug!("Unrecognized amount unit {:?}", s);
                        let msg = format!("Unknown units: {}", s);
                        return Err(Error::BadArgument(msg));
                    }
                }
            }
        };
        Ok(unit)
    }
}

impl fmt::Display for AmountUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for AmountUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<AmountUnit> {
        AmountUnit::parse(s)
    }
}
