use std::fmt::{self, Display};

use itertools::Itertools;
use rug::Integer;

use crate::{
    algebra::rat::Rat,
    traits::{Eval, One, WithVars, Zero},
};

/// Univariate polynomial with rational coefficients in the monomial basis
///
/// The coefficient of `x^i` is stored at position `i`. Unlike a
/// normalised polynomial, trailing zero coefficients are kept, so the
/// number of coefficients is the number of interpolation points used.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Poly {
    coeff: Vec<Rat>,
}

impl Poly {
    pub fn new() -> Self {
        Self { coeff: Vec::new() }
    }

    pub fn from_coeff(coeff: Vec<Rat>) -> Self {
        Self { coeff }
    }

    pub fn coeff(&self) -> &[Rat] {
        &self.coeff
    }

    pub fn into_coeff(self) -> Vec<Rat> {
        self.coeff
    }

    pub fn len(&self) -> usize {
        self.coeff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeff.is_empty()
    }

    /// Nominal degree, i.e. the number of coefficients minus one
    pub fn degree(&self) -> Option<usize> {
        self.coeff.len().checked_sub(1)
    }

    /// Value at zero, the constant coefficient
    pub fn constant(&self) -> Rat {
        self.coeff.first().cloned().unwrap_or_default()
    }

    /// Rescale to integer coefficients
    ///
    /// Returns the least common multiple `d` of all coefficient
    /// denominators together with the coefficients of `d * p(x)`.
    pub fn to_integer_coeffs(&self) -> (Integer, Vec<Integer>) {
        let mut lcm = Integer::one();
        for c in &self.coeff {
            lcm.lcm_mut(c.den());
        }
        let coeff = self
            .coeff
            .iter()
            .map(|c| {
                let mut res = Integer::from(&lcm / c.den());
                res *= c.num();
                res
            })
            .collect();
        (lcm, coeff)
    }
}

impl Eval<Rat> for Poly {
    type Output = Rat;

    fn eval(&self, x: &Rat) -> Rat {
        self.coeff
            .iter()
            .rev()
            .fold(Zero::zero(), |acc: Rat, c| acc * x + c)
    }
}

impl Eval<Integer> for Poly {
    type Output = Rat;

    fn eval(&self, x: &Integer) -> Rat {
        self.eval(&Rat::from(x))
    }
}

impl<'a, 'b, S: Display + 'b> WithVars<'a, &'b [S; 1]> for Poly {
    type Output = FmtUniPoly<'a, 'b, S>;

    fn with_vars(&'a self, vars: &'b [S; 1]) -> Self::Output {
        FmtUniPoly::new(self, vars)
    }
}

impl Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.with_vars(&["x"]))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FmtUniPoly<'a, 'b, V: Display> {
    poly: &'a Poly,
    var: &'b [V],
}

impl<'a, 'b, V: Display> FmtUniPoly<'a, 'b, V> {
    fn new(poly: &'a Poly, var: &'b [V]) -> Self {
        Self { poly, var }
    }
}

impl<'a, 'b, V: Display> Display for FmtUniPoly<'a, 'b, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut terms = self
            .poly
            .coeff
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .peekable();
        if terms.peek().is_none() {
            return write!(f, "0");
        }
        let var = &self.var[0];
        let terms = terms.map(|(pow, coeff)| {
            let coeff = if coeff.is_integer() && *coeff.num() > 0 {
                format!("{coeff}")
            } else {
                format!("({coeff})")
            };
            match pow {
                0 => coeff.trim_matches(|c| c == '(' || c == ')').to_owned(),
                1 if coeff == "1" => format!("{var}"),
                1 => format!("{coeff}*{var}"),
                _ if coeff == "1" => format!("{var}^{pow}"),
                _ => format!("{coeff}*{var}^{pow}"),
            }
        });
        write!(f, "{}", terms.format(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(s: &str) -> Rat {
        s.parse().unwrap()
    }

    fn poly(coeff: &[&str]) -> Poly {
        Poly::from_coeff(coeff.iter().map(|c| rat(c)).collect())
    }

    #[test]
    fn eval() {
        let p = poly(&["2", "2"]);
        assert_eq!(p.eval(&Integer::from(3)), rat("8"));
        let p = poly(&["1/2", "-1", "1/3"]);
        assert_eq!(p.eval(&Integer::from(3)), rat("1/2"));
        assert_eq!(p.eval(&rat("1/2")), rat("1/12"));
        assert_eq!(Poly::new().eval(&Integer::from(5)), Zero::zero());
    }

    #[test]
    fn degree() {
        assert_eq!(Poly::new().degree(), None);
        assert_eq!(poly(&["1", "0", "0"]).degree(), Some(2));
        assert_eq!(poly(&["7", "0"]).constant(), rat("7"));
        assert_eq!(Poly::new().constant(), Zero::zero());
    }

    #[test]
    fn integer_coeffs() {
        let (den, coeff) = poly(&["2", "2"]).to_integer_coeffs();
        assert_eq!(den, 1);
        assert_eq!(coeff, [2, 2]);

        let (den, coeff) = poly(&["1/2", "-2/3", "0", "5"]).to_integer_coeffs();
        assert_eq!(den, 6);
        assert_eq!(coeff, [3, -4, 0, 30]);

        let (den, coeff) = Poly::new().to_integer_coeffs();
        assert_eq!(den, 1);
        assert!(coeff.is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(poly(&["2", "2"]).to_string(), "2 + 2*x");
        assert_eq!(poly(&["0", "1", "-1/2"]).to_string(), "x + (-1/2)*x^2");
        assert_eq!(poly(&["-3", "0", "1"]).with_vars(&["y"]).to_string(), "-3 + y^2");
        assert_eq!(poly(&["0", "0"]).to_string(), "0");
    }
}
