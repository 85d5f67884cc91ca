use std::collections::BTreeSet;

use rand::Rng;
use rug::Integer;

use crate::{
    algebra::{poly::Poly, rat::Rat},
    digits::{MAX_BASE, MIN_BASE},
    rec::Point,
    traits::Eval,
};

/// Random integer with up to `bits` bits and random sign
pub fn gen_integer(bits: u32, mut rng: impl Rng) -> Integer {
    let mut res = Integer::new();
    let mut nbits = 0;
    while nbits < bits {
        res <<= 64u32;
        res += rng.gen::<u64>();
        nbits += 64;
    }
    res >>= nbits - bits;
    if rng.gen() {
        -res
    } else {
        res
    }
}

/// Random polynomial with integer coefficients of at most `max_deg`
///
/// The coefficients have up to 256 bits.
pub fn gen_poly(max_deg: usize, mut rng: impl Rng) -> Poly {
    let len = rng.gen_range(1..=max_deg + 1);
    let coeff = (0..len)
        .map(|_| {
            let bits = rng.gen_range(1..=256);
            Rat::from(gen_integer(bits, &mut rng))
        })
        .collect();
    Poly::from_coeff(coeff)
}

/// `npts` points on `poly` with distinct positive x values
///
/// The polynomial has to have integer coefficients.
pub fn gen_pts(poly: &Poly, npts: usize, mut rng: impl Rng) -> Vec<Point> {
    let max_x = 10 * npts as u64 + 10;
    let mut xs = BTreeSet::new();
    while xs.len() < npts {
        xs.insert(rng.gen_range(1..=max_x));
    }
    xs.into_iter()
        .map(|x| {
            let x = Integer::from(x);
            let (y, den) = poly.eval(&x).into_num_den();
            assert_eq!(den, 1);
            Point { x, y }
        })
        .collect()
}

/// A random base together with the digits of `n` in that base
pub fn gen_digits(n: &Integer, mut rng: impl Rng) -> (u32, String) {
    let base = rng.gen_range(MIN_BASE..=MAX_BASE);
    let mut digits = n.to_string_radix(base as i32);
    if rng.gen() {
        digits.make_ascii_uppercase();
    }
    (base, digits)
}
