use core::{error, fmt};

/// An error returned when a constructor function cannot take its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// A required argument was never supplied.
    Missing { index: usize, param: &'static str },
    /// A non-nullable argument was supplied as null.
    Null { index: usize, param: &'static str },
    /// The argument has a different type than the parameter.
    Mismatch {
        index: usize,
        param: &'static str,
        expected: &'static str,
    },
}

impl ConstructError {
    /// Returns the name of the offending parameter.
    pub const fn param(&self) -> &'static str {
        match self {
            Self::Missing { param, .. } | Self::Null { param, .. } | Self::Mismatch { param, .. } => {
                param
            }
        }
    }
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { index, param } => {
                write!(f, "no value supplied for parameter `{param}` (#{index})")
            }
            Self::Null { index, param } => {
                write!(f, "null supplied for non-nullable parameter `{param}` (#{index})")
            }
            Self::Mismatch {
                index,
                param,
                expected,
            } => write!(
                f,
                "argument for parameter `{param}` (#{index}) is not a `{expected}`"
            ),
        }
    }
}

impl error::Error for ConstructError {}
