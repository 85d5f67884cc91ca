use log::{debug, trace};
use rug::Integer;

use crate::{
    algebra::rat::Rat,
    rec::{Point, RecError},
    traits::{One, Rec, Zero},
};

/// Evaluate the interpolating polynomial at a single point
///
/// Uses Lagrange's formula, so the coefficients of the polynomial
/// are never computed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LagrangeRec {
    x: Integer,
}

impl LagrangeRec {
    /// Evaluate at `x`
    pub fn at(x: impl Into<Integer>) -> Self {
        Self { x: x.into() }
    }

    /// Evaluate at zero, i.e. recover the secret
    pub fn at_zero() -> Self {
        Self::default()
    }

    pub fn x(&self) -> &Integer {
        &self.x
    }

    pub fn rec_from_pts(&self, pts: &[Point]) -> Result<Rat, RecError> {
        eval_at(pts, &self.x)
    }
}

impl Rec<LagrangeRec> for [Point] {
    type Output = Result<Rat, RecError>;

    fn rec(&self, reconstructor: LagrangeRec) -> Self::Output {
        reconstructor.rec_from_pts(self)
    }
}

/// The value at zero of the polynomial through all points
///
/// f(0) = Σ_i y_i Π_{j≠i} (-x_j) / (x_i - x_j)
pub fn eval_at_zero(pts: &[Point]) -> Result<Rat, RecError> {
    eval_at(pts, &Integer::new())
}

/// The value at `x` of the polynomial through all points
///
/// Fails with `RecError::SingularSystem` if two points share the same x.
pub fn eval_at(pts: &[Point], x: &Integer) -> Result<Rat, RecError> {
    debug!("Lagrange interpolation at {x} from {} points", pts.len());
    let mut res = Rat::zero();
    for (i, pt) in pts.iter().enumerate() {
        let mut num = Integer::one();
        let mut den = Integer::one();
        for (j, other) in pts.iter().enumerate() {
            if i == j {
                continue;
            }
            num *= Integer::from(x - &other.x);
            den *= Integer::from(&pt.x - &other.x);
        }
        let basis = Rat::from(num).checked_div(&Rat::from(den))?;
        trace!("Basis polynomial {i} at {x}: {basis}");
        res += basis * Rat::from(&pt.y);
    }
    debug!("Result: {res}");
    Ok(res)
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand_xoshiro::rand_core::SeedableRng;

    use super::*;
    use crate::{
        _test_util::{gen_poly, gen_pts},
        digits::decode,
        rec::vandermonde::VandermondeRec,
        traits::Eval,
    };

    fn log_init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn line() {
        log_init();
        let pts = [Point::new(1, 4), Point::new(2, 6)];
        assert_eq!(eval_at_zero(&pts), Ok(Rat::from(2)));
        assert_eq!(pts.rec(LagrangeRec::at(5)), Ok(Rat::from(12)));
    }

    #[test]
    fn mixed_bases() {
        log_init();
        let pts = [
            Point::new(1, decode("1c", 16).unwrap()),
            Point::new(2, decode("111", 2).unwrap()),
            Point::new(3, decode("12", 10).unwrap()),
        ];
        let secret = pts.rec(LagrangeRec::at_zero()).unwrap();
        assert_eq!(secret, Rat::from(75));
        let poly = pts.rec(VandermondeRec::new()).unwrap();
        assert_eq!(poly.constant(), secret);
    }

    #[test]
    fn rational_value() {
        // f(x) = (x - 1) / 2
        let pts = [Point::new(1, 0), Point::new(3, 1)];
        assert_eq!(eval_at_zero(&pts), Ok("-1/2".parse::<Rat>().unwrap()));
    }

    #[test]
    fn trivial() {
        assert_eq!(eval_at_zero(&[]), Ok(Rat::zero()));
        assert_eq!(eval_at_zero(&[Point::new(7, 3)]), Ok(Rat::from(3)));
    }

    #[test]
    fn duplicate_x() {
        let pts = [Point::new(1, 4), Point::new(1, 5)];
        assert_eq!(eval_at_zero(&pts), Err(RecError::SingularSystem));
        let pts = [Point::new(2, 4), Point::new(3, 5), Point::new(2, 4)];
        assert_eq!(eval_at_zero(&pts), Err(RecError::SingularSystem));
    }

    #[test]
    fn agrees_with_solver() {
        log_init();

        const NTESTS: u32 = 50;
        const MAX_DEG: usize = 12;
        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(2);

        for _ in 0..NTESTS {
            let poly = gen_poly(MAX_DEG, &mut rng);
            let pts = gen_pts(&poly, poly.len(), &mut rng);
            let secret = pts.rec(LagrangeRec::at_zero()).unwrap();
            assert_eq!(secret, poly.constant());
            let coeff = pts.rec(VandermondeRec::new()).unwrap();
            assert_eq!(secret, coeff.constant());

            let x = Integer::from(rng.gen_range(-1000..=1000));
            let val = pts.rec(LagrangeRec::at(x.clone())).unwrap();
            assert_eq!(val, poly.eval(&x));
        }
    }
}
