/// Interpolation at a single point using Lagrange's formula
pub mod lagrange;
/// Solving for all coefficients in the monomial basis
pub mod vandermonde;

use std::fmt::{self, Display};

use rug::Integer;
use thiserror::Error;

use crate::algebra::rat::RatError;

/// An interpolation point, i.e. one share
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Point {
    /// Share index
    pub x: Integer,
    /// Share value
    pub y: Integer,
}

impl Point {
    pub fn new(x: impl Into<Integer>, y: impl Into<Integer>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum RecError {
    #[error("No unique solution: the points do not have pairwise distinct x values")]
    SingularSystem,
    #[error(transparent)]
    Rat(RatError),
}

impl From<RatError> for RecError {
    fn from(err: RatError) -> Self {
        match err {
            RatError::DivideByZero | RatError::InverseOfZero => {
                RecError::SingularSystem
            }
            err => RecError::Rat(err),
        }
    }
}
