use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum JuliaError {
    ZeroMaxIterationsError,
    InvalidScaleError { scale: f64 },
}

impl fmt::Display for JuliaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidScaleError { scale } => {
                write!(f, "View scale must be positive and finite, got {}", scale)
            }
        }
    }
}

impl Error for JuliaError {}
