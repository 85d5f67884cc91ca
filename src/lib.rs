//! Exact reconstruction of polynomials and threshold-shared secrets
//!
//! Shares are points `(x, y)` on a polynomial, where `y` is given as a
//! string of digits in some base between 2 and 36. From any `k` shares
//! of a polynomial of degree `k - 1` we can recover all coefficients by
//! solving a linear system, or the secret `f(0)` directly by Lagrange
//! interpolation. All arithmetic is exact.
//!
//! ```
//! use secrec::{rec::{lagrange::LagrangeRec, Point}, traits::Rec, Rat};
//!
//! let pts = [Point::new(1, 4), Point::new(2, 6)];
//! let secret = pts.rec(LagrangeRec::at_zero()).unwrap();
//! assert_eq!(secret, Rat::from(2));
//! ```

/// Utilities for tests and benchmarks
#[doc(hidden)]
pub mod _test_util;
mod matrix;
pub mod traits;

/// Exact rational numbers and polynomials
pub mod algebra;

/// Conversion of digit strings in arbitrary bases
pub mod digits;

/// Polynomial reconstruction algorithms
pub mod rec;

/// Reconstruction from sets of encoded shares
pub mod shares;

pub use algebra::{poly::Poly, rat::Rat};
pub use rug::Integer;
pub use shares::{reconstruct, Error, Reconstruction, ShareSet};
