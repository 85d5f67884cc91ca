use log::{debug, trace};
use num_traits::Inv;
use rug::Integer;

use crate::{
    algebra::{poly::Poly, rat::Rat},
    matrix::Matrix,
    rec::{Point, RecError},
    traits::{One, Rec, Zero},
};

/// Reconstruct all polynomial coefficients by solving the Vandermonde system
///
/// For `k` points with distinct x values this yields the unique
/// polynomial of nominal degree `k - 1` through all of them.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VandermondeRec {}

impl VandermondeRec {
    pub fn new() -> Self {
        Self {}
    }

    pub fn rec_from_pts(&self, pts: &[Point]) -> Result<Poly, RecError> {
        let ncoeffs = pts.len();
        debug!("Polynomial reconstruction from {ncoeffs} points");
        if ncoeffs == 0 {
            return Ok(Poly::new());
        }
        // augmented matrix: row i is x_i^0 ... x_i^(k-1) | y_i
        let mut eqs = Vec::with_capacity(ncoeffs * (ncoeffs + 1));
        for Point { x, y } in pts {
            let mut x_to_i = Integer::one();
            for _ in 0..ncoeffs {
                eqs.push(Rat::from(&x_to_i));
                x_to_i *= x;
            }
            eqs.push(Rat::from(y));
        }
        let eqs = Matrix::from_vec(ncoeffs, eqs);
        trace!("Solving system\n{eqs}");
        let coeff = gauss_jordan(eqs)?;
        let res = Poly::from_coeff(coeff);
        debug!("Reconstructed {res}");
        Ok(res)
    }
}

impl Rec<VandermondeRec> for [Point] {
    type Output = Result<Poly, RecError>;

    fn rec(&self, reconstructor: VandermondeRec) -> Self::Output {
        reconstructor.rec_from_pts(self)
    }
}

/// Solve a linear system given as an augmented `n x (n + 1)` matrix
///
/// Returns the solution vector, or `RecError::SingularSystem` if
/// no unique solution exists.
pub(crate) fn gauss_jordan(mut eqs: Matrix<Rat>) -> Result<Vec<Rat>, RecError> {
    let nrows = eqs.nrows();
    debug_assert_eq!(eqs.ncols(), nrows + 1);
    for col in 0..nrows {
        let pivot = (col..nrows)
            .find(|&row| !eqs[(row, col)].is_zero())
            .ok_or(RecError::SingularSystem)?;
        if pivot != col {
            trace!("Swapping rows {col} and {pivot}");
            eqs.swap_rows(col, pivot);
        }
        let inv_pivot = (&eqs[(col, col)]).inv()?;
        for e in &mut eqs.row_mut(col)[col..] {
            *e *= &inv_pivot;
        }
        debug_assert!(eqs[(col, col)].is_one());
        for row in (0..nrows).filter(|&row| row != col) {
            let fact = std::mem::take(&mut eqs[(row, col)]);
            if fact.is_zero() {
                continue;
            }
            let (row, pivot_row) = eqs.row_pair_mut(row, col);
            for (e, p) in row[col + 1..].iter_mut().zip(&pivot_row[col + 1..]) {
                *e -= &fact * p;
            }
        }
        trace!("Eliminated column {col}\n{eqs}");
    }
    Ok(eqs.into_column(nrows))
}
