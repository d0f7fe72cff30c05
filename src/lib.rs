//! Fixed-point amounts for the OMC cryptocurrency.
//!
//! Amounts are stored as whole Hao and converted to floats in larger
//! denominations only for display or when accepting human input.
//!
//! ```
//! use omcutil::amount::{Amount, AmountUnit};
//!
//! let fee = Amount::from_float(0.25, false).unwrap().mul_f64(0.01);
//! assert_eq!(fee, Amount(250_000));
//! assert_eq!(fee.to_string(), "0.0025 OMC");
//! assert_eq!(fee.format(AmountUnit::MILLI_OMC), "2.5 mOMC");
//! ```

#[macro_use]
extern crate log;

pub mod amount;
pub mod util;
