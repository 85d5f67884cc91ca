/// Polynomials with rational coefficients
pub mod poly;
/// Exact rational numbers
pub mod rat;
