use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use num_traits::Inv;
use rug::{ops::NegAssign, Integer};
use thiserror::Error;

use crate::traits::{One, Zero};

/// Exact rational number over arbitrary-precision integers
///
/// The representation is always canonical: the denominator is
/// positive and coprime to the numerator. Zero is stored as `0/1`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rat {
    num: Integer,
    den: Integer,
}

#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum RatError {
    #[error("Invalid fraction: zero denominator")]
    InvalidFraction,
    #[error("Division by zero")]
    DivideByZero,
    #[error("Inverse of zero")]
    InverseOfZero,
    #[error("Failed to parse rational number from '{0}'")]
    Parse(String),
}

impl Rat {
    /// Construct the reduced fraction `num/den`
    ///
    /// Fails if `den` is zero.
    pub fn from_num_den(num: Integer, den: Integer) -> Result<Self, RatError> {
        if den.is_zero() {
            return Err(RatError::InvalidFraction);
        }
        Ok(Self::from_nonzero_den(num, den))
    }

    pub(crate) fn from_num_den_unchecked(num: Integer, den: Integer) -> Self {
        debug_assert!(den > 0);
        debug_assert!(Integer::from(num.gcd_ref(&den)).is_one());
        Self { num, den }
    }

    fn from_nonzero_den(mut num: Integer, mut den: Integer) -> Self {
        debug_assert!(!den.is_zero());
        if den < 0 {
            num.neg_assign();
            den.neg_assign();
        }
        // gcd(0, den) == den, so zero ends up as 0/1
        let gcd = Integer::from(num.gcd_ref(&den));
        if !gcd.is_one() {
            num.div_exact_mut(&gcd);
            den.div_exact_mut(&gcd);
        }
        Self { num, den }
    }

    pub fn num(&self) -> &Integer {
        &self.num
    }

    pub fn den(&self) -> &Integer {
        &self.den
    }

    pub fn into_num_den(self) -> (Integer, Integer) {
        (self.num, self.den)
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Exact division, failing if `rhs` is zero
    pub fn checked_div(&self, rhs: &Rat) -> Result<Rat, RatError> {
        if rhs.is_zero() {
            return Err(RatError::DivideByZero);
        }
        let num = Integer::from(&self.num * &rhs.den);
        let den = Integer::from(&self.den * &rhs.num);
        Ok(Self::from_nonzero_den(num, den))
    }
}

impl Default for Rat {
    fn default() -> Self {
        Zero::zero()
    }
}

impl Zero for Rat {
    fn zero() -> Self {
        Self {
            num: Zero::zero(),
            den: One::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rat {
    fn one() -> Self {
        Self {
            num: One::one(),
            den: One::one(),
        }
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

impl From<Integer> for Rat {
    fn from(num: Integer) -> Self {
        Self {
            num,
            den: One::one(),
        }
    }
}

impl From<&Integer> for Rat {
    fn from(num: &Integer) -> Self {
        num.clone().into()
    }
}

macro_rules! impl_from_primitive {
    ( $( $x:ty ),* ) => {
        $(
            impl From<$x> for Rat {
                fn from(num: $x) -> Self {
                    Integer::from(num).into()
                }
            }
        )*
    };
}

impl_from_primitive!(i32, i64, u32, u64);

impl Inv for &Rat {
    type Output = Result<Rat, RatError>;

    fn inv(self) -> Self::Output {
        if self.is_zero() {
            return Err(RatError::InverseOfZero);
        }
        // already coprime, only the sign has to move
        let mut num = self.den.clone();
        let mut den = self.num.clone();
        if den < 0 {
            num.neg_assign();
            den.neg_assign();
        }
        Ok(Rat::from_num_den_unchecked(num, den))
    }
}

impl Inv for Rat {
    type Output = Result<Rat, RatError>;

    fn inv(self) -> Self::Output {
        (&self).inv()
    }
}

impl<'a> Add<&'a Rat> for &Rat {
    type Output = Rat;

    fn add(self, rhs: &'a Rat) -> Rat {
        if self.den == rhs.den {
            let num = Integer::from(&self.num + &rhs.num);
            return Rat::from_nonzero_den(num, self.den.clone());
        }
        let mut num = Integer::from(&self.num * &rhs.den);
        num += Integer::from(&rhs.num * &self.den);
        let den = Integer::from(&self.den * &rhs.den);
        Rat::from_nonzero_den(num, den)
    }
}

impl<'a> Sub<&'a Rat> for &Rat {
    type Output = Rat;

    fn sub(self, rhs: &'a Rat) -> Rat {
        if self.den == rhs.den {
            let num = Integer::from(&self.num - &rhs.num);
            return Rat::from_nonzero_den(num, self.den.clone());
        }
        let mut num = Integer::from(&self.num * &rhs.den);
        num -= Integer::from(&rhs.num * &self.den);
        let den = Integer::from(&self.den * &rhs.den);
        Rat::from_nonzero_den(num, den)
    }
}

impl<'a> Mul<&'a Rat> for &Rat {
    type Output = Rat;

    fn mul(self, rhs: &'a Rat) -> Rat {
        let num = Integer::from(&self.num * &rhs.num);
        let den = Integer::from(&self.den * &rhs.den);
        Rat::from_nonzero_den(num, den)
    }
}

macro_rules! forward_binop {
    ( $( $op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident );* ) => {
        $(
            impl $op for Rat {
                type Output = Rat;

                fn $fn(self, rhs: Rat) -> Rat {
                    (&self).$fn(&rhs)
                }
            }

            impl<'a> $op<&'a Rat> for Rat {
                type Output = Rat;

                fn $fn(self, rhs: &'a Rat) -> Rat {
                    (&self).$fn(rhs)
                }
            }

            impl $op<Rat> for &Rat {
                type Output = Rat;

                fn $fn(self, rhs: Rat) -> Rat {
                    self.$fn(&rhs)
                }
            }

            impl<'a> $op_assign<&'a Rat> for Rat {
                fn $fn_assign(&mut self, rhs: &'a Rat) {
                    *self = (&*self).$fn(rhs);
                }
            }

            impl $op_assign for Rat {
                fn $fn_assign(&mut self, rhs: Rat) {
                    *self = (&*self).$fn(&rhs);
                }
            }
        )*
    };
}

forward_binop!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign
);

impl Neg for Rat {
    type Output = Rat;

    fn neg(mut self) -> Rat {
        self.num.neg_assign();
        self
    }
}

impl Neg for &Rat {
    type Output = Rat;

    fn neg(self) -> Rat {
        -self.clone()
    }
}

impl Ord for Rat {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive
        let lhs = Integer::from(&self.num * &other.den);
        let rhs = Integer::from(&other.num * &self.den);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Rat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl FromStr for Rat {
    type Err = RatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |s: &str| {
            s.trim()
                .parse::<Integer>()
                .map_err(|_| RatError::Parse(s.to_owned()))
        };
        match s.split_once('/') {
            Some((num, den)) => Rat::from_num_den(parse(num)?, parse(den)?),
            None => parse(s).map(Rat::from),
        }
    }
}
