use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

/// Dense row-major matrix
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub(crate) struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    elem: Vec<T>,
}

impl<T> Matrix<T> {
    pub(crate) fn from_vec(nrows: usize, elem: Vec<T>) -> Self {
        assert!(elem.is_empty() || elem.len() % nrows == 0);
        let ncols = if elem.is_empty() {
            0
        } else {
            elem.len() / nrows
        };
        Self { nrows, ncols, elem }
    }

    pub(crate) fn nrows(&self) -> usize {
        self.nrows
    }

    pub(crate) fn ncols(&self) -> usize {
        self.ncols
    }

    pub(crate) fn row(&self, r: usize) -> &[T] {
        let start_idx = r * self.ncols;
        &self.elem[start_idx..(start_idx + self.ncols)]
    }

    pub(crate) fn row_mut(&mut self, r: usize) -> &mut [T] {
        let start_idx = r * self.ncols;
        &mut self.elem[start_idx..(start_idx + self.ncols)]
    }

    /// Mutable access to row `i` together with shared access to row `j`
    pub(crate) fn row_pair_mut(&mut self, i: usize, j: usize) -> (&mut [T], &[T]) {
        assert_ne!(i, j);
        let row_length = self.ncols;
        if i < j {
            let (head, tail) = self.elem.split_at_mut(j * row_length);
            (&mut head[i * row_length..(i + 1) * row_length], &tail[..row_length])
        } else {
            let (head, tail) = self.elem.split_at_mut(i * row_length);
            (&mut tail[..row_length], &head[j * row_length..(j + 1) * row_length])
        }
    }

    pub(crate) fn swap_rows(&mut self, mut i: usize, mut j: usize) {
        if i == j {
            return;
        }
        if i > j {
            std::mem::swap(&mut i, &mut j);
        }
        let row_length = self.ncols();
        let elems = &mut self.elem[i * row_length..];
        let (first_row, rest) = elems.split_at_mut(row_length);
        let second_row_idx = (j - i - 1) * row_length;
        let second_row =
            &mut rest[second_row_idx..(second_row_idx + row_length)];
        first_row.swap_with_slice(second_row)
    }

    /// Consume the matrix and return the entries of one column
    pub(crate) fn into_column(self, col: usize) -> Vec<T> {
        assert!(col < self.ncols);
        self.elem
            .into_iter()
            .skip(col)
            .step_by(self.ncols)
            .collect()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        &self.elem[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        &mut self.elem[row * self.ncols + col]
    }
}

impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.nrows() {
            0 => writeln!(f, "[]"),
            1 => {
                write!(f, "[")?;
                for e in &self.elem {
                    write!(f, " {e}")?;
                }
                writeln!(f, " ]")
            }
            _ => {
                for row in 0..self.nrows() {
                    write!(f, "|")?;
                    for e in self.row(row) {
                        write!(f, " {e}")?;
                    }
                    writeln!(f, " |")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap() {
        let mut m = Matrix::from_vec(3, (0..6).collect());
        assert_eq!(m.ncols(), 2);
        m.swap_rows(2, 0);
        assert_eq!(m.row(0), [4, 5]);
        assert_eq!(m.row(2), [0, 1]);
        m.swap_rows(1, 1);
        assert_eq!(m.row(1), [2, 3]);
    }

    #[test]
    fn row_pair() {
        let mut m = Matrix::from_vec(3, (0..6).collect());
        let (dst, src) = m.row_pair_mut(2, 0);
        dst[1] += src[1];
        assert_eq!(m[(2, 1)], 6);
        let (dst, src) = m.row_pair_mut(0, 1);
        dst[0] -= src[0];
        assert_eq!(m[(0, 0)], -2);
    }

    #[test]
    fn column() {
        let m = Matrix::from_vec(3, (0..9).collect());
        assert_eq!(m.into_column(2), [2, 5, 8]);
    }

    #[test]
    fn display() {
        let m = Matrix::from_vec(2, vec![1, -1, 1, 1]);
        assert_eq!(m.to_string(), "| 1 -1 |\n| 1 1 |\n");
    }
}
