use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

use itertools::Itertools;
use log::{debug, warn};
use rug::Integer;
use thiserror::Error;

use crate::{
    algebra::{poly::Poly, rat::Rat},
    digits::{decode, DigitError},
    rec::{lagrange::LagrangeRec, vandermonde::VandermondeRec, Point, RecError},
    traits::{Eval, Rec},
};

#[cfg(feature = "json")]
use serde::{Deserialize, Deserializer};

/// Number of shares provided and reconstruction threshold
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "json", derive(Deserialize))]
pub struct Keys {
    #[cfg_attr(feature = "json", serde(deserialize_with = "number_or_string"))]
    pub n: usize,
    #[cfg_attr(feature = "json", serde(deserialize_with = "number_or_string"))]
    pub k: usize,
}

/// A share value as a string of digits in some base
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "json", derive(Deserialize))]
pub struct RawShare {
    #[cfg_attr(feature = "json", serde(deserialize_with = "number_or_string"))]
    pub base: u32,
    pub value: String,
}

/// All shares, keyed by their base-10 index
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "json", derive(Deserialize))]
pub struct ShareSet {
    pub keys: Keys,
    #[cfg_attr(feature = "json", serde(flatten))]
    pub shares: BTreeMap<String, RawShare>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Threshold {k} exceeds the number of shares ({available})")]
    NotEnoughShares { k: usize, available: usize },
    #[error("Failed to decode share {index}: {source}")]
    Share {
        index: String,
        #[source]
        source: DigitError,
    },
    #[error(transparent)]
    Rec(#[from] RecError),
    #[cfg(feature = "json")]
    #[error("Failed to parse input: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShareSet {
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    #[cfg(feature = "json")]
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Decode all shares
    pub fn points(&self) -> Result<Vec<Point>, Error> {
        self.shares
            .iter()
            .map(|(index, share)| -> Result<Point, Error> {
                let x = index.trim().parse::<Integer>().map_err(|_| {
                    Error::InvalidInput(format!("share index '{index}' is not an integer"))
                })?;
                let y = decode(&share.value, share.base).map_err(|source| {
                    Error::Share {
                        index: index.to_owned(),
                        source,
                    }
                })?;
                Ok(Point { x, y })
            })
            .collect()
    }

    /// Decode the shares and reconstruct from the first `k` by index
    pub fn reconstruct(&self) -> Result<Reconstruction, Error> {
        let Keys { n, k } = self.keys;
        let pts = self.points()?;
        if n != pts.len() {
            warn!("Expected {n} shares, found {}", pts.len());
        }
        reconstruct(pts, k)
    }
}

/// Outcome of a reconstruction
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reconstruction {
    used: Vec<Point>,
    poly: Poly,
    secret: Rat,
    common_den: Integer,
    integer_coeffs: Vec<Integer>,
    inconsistent: Vec<Integer>,
}

impl Reconstruction {
    /// The points the polynomial was reconstructed from
    pub fn used(&self) -> &[Point] {
        &self.used
    }

    pub fn degree(&self) -> usize {
        self.poly.degree().unwrap_or_default()
    }

    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    /// The value at zero
    pub fn secret(&self) -> &Rat {
        &self.secret
    }

    /// Least common multiple of all coefficient denominators
    pub fn common_den(&self) -> &Integer {
        &self.common_den
    }

    /// Coefficients of the polynomial times `common_den()`
    pub fn integer_coeffs(&self) -> &[Integer] {
        &self.integer_coeffs
    }

    /// Indices of unused shares that do not lie on the polynomial
    pub fn inconsistent(&self) -> &[Integer] {
        &self.inconsistent
    }
}

/// Reconstruct the polynomial through the `k` points with the smallest x
///
/// The remaining points are only checked for consistency.
pub fn reconstruct(mut pts: Vec<Point>, k: usize) -> Result<Reconstruction, Error> {
    if k == 0 {
        return Err(Error::InvalidInput("threshold has to be positive".to_owned()));
    }
    if k > pts.len() {
        return Err(Error::NotEnoughShares {
            k,
            available: pts.len(),
        });
    }
    pts.sort_by(|a, b| a.x.cmp(&b.x));
    let unused = pts.split_off(k);
    debug!("Reconstructing from {}", pts.iter().format(", "));

    let poly = pts.rec(VandermondeRec::new())?;
    let secret = pts.rec(LagrangeRec::at_zero())?;
    debug_assert_eq!(poly.constant(), secret);

    let inconsistent: Vec<_> = unused
        .into_iter()
        .filter(|pt| poly.eval(&pt.x) != Rat::from(&pt.y))
        .map(|pt| pt.x)
        .collect();
    if !inconsistent.is_empty() {
        warn!(
            "Shares not on the reconstructed polynomial: {}",
            inconsistent.iter().format(", ")
        );
    }

    let (common_den, integer_coeffs) = poly.to_integer_coeffs();
    Ok(Reconstruction {
        used: pts,
        poly,
        secret,
        common_den,
        integer_coeffs,
        inconsistent,
    })
}

impl Display for Reconstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Points used: {}", self.used.iter().format(", "))?;
        writeln!(f, "Degree: {}", self.degree())?;
        let coeffs = self
            .poly
            .coeff()
            .iter()
            .enumerate()
            .format_with(", ", |(i, c), g| g(&format_args!("a{i} = {c}")));
        writeln!(f, "Coefficients: {coeffs}")?;
        writeln!(f, "Polynomial: f(x) = {}", self.poly)?;
        writeln!(f, "Secret: f(0) = {}", self.secret)?;
        writeln!(f, "Common denominator: {}", self.common_den)?;
        writeln!(f, "Integer coefficients: [{}]", self.integer_coeffs.iter().format(", "))?;
        if !self.inconsistent.is_empty() {
            writeln!(
                f,
                "Shares not on the polynomial: {}",
                self.inconsistent.iter().format(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(feature = "json")]
fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + std::str::FromStr,
{
    use serde::de::Error as _;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(u64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => T::try_from(n)
            .map_err(|_| D::Error::custom(format!("{n} is out of range"))),
        NumOrStr::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("'{s}' is not a number"))),
    }
}
