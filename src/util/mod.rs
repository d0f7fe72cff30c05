//! Miscellaneous helpers

mod result;

pub use self::result::{Error, Result};
