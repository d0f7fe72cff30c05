use std::num::ParseIntError;

/// Standard error type used in the library
#[derive(Debug)]
pub enum Error {
    /// An argument provided is invalid
    BadArgument(String),
    /// The float cannot be represented as an amount
    InvalidAmount(f64),
    /// Error parsing an integer
    ParseIntError(ParseIntError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::BadArgument(s) => f.write_str(&format!("Bad argument: {}", s)),
            Error::InvalidAmount(v) => f.write_str(&format!("Invalid OMC amount: {}", v)),
            Error::ParseIntError(e) => f.write_str(&format!("ParseIntError: {}", e)),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ParseIntError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Self {
        Error::ParseIntError(e)
    }
}

/// Standard Result used in the library
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn display() {
        let e = Error::BadArgument("xyz".to_string());
        assert!(e.to_string() == "Bad argument: xyz");
        let e = Error::InvalidAmount(std::f64::NAN);
        assert!(e.to_string() == "Invalid OMC amount: NaN");
        let e = Error::InvalidAmount(std::f64::NEG_INFINITY);
        assert!(e.to_string() == "Invalid OMC amount: -inf");
    }

    #[test]
    fn source() {
        let e: Error = "x".parse::<i32>().unwrap_err().into();
        assert!(e.source().is_some());
        assert!(Error::InvalidAmount(1.).source().is_none());
    }
}
