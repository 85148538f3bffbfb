// Copyright © 2024 Marvin Beckmann
//
// This file is part of qFALL-svp.
//
// qFALL-svp is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains a basis construction that encodes simultaneous
//! Diophantine approximation as a shortest vector instance: short vectors
//! of the constructed lattice correspond to good rational approximations of
//! all target values with one common denominator.

use qfall_math::{
    integer::{MatZ, Z},
    rational::{MatQ, Q},
    traits::{MatrixDimensions, MatrixGetEntry, MatrixSetEntry, Pow},
};

/// Builds the `(n + 1) x (n + 1)` lattice basis whose short vectors encode
/// simultaneous rational approximations of the `n` target values in `v`.
///
/// The basis consists of a scaled identity block, the negated and scaled
/// targets in the last column, and `1` in the lower-right corner; every
/// scaled entry is divided by `eps^(n + 1)` and truncated toward zero.
/// A lattice vector combining the last column `d` times and the `i`-th
/// column `c_i` times is short iff `c_i / d` approximates `v_i` well for
/// all `i` simultaneously.
///
/// It takes in both a column vector or a row vector of targets.
///
/// Parameters:
/// - `v`: the vector of target values to approximate
/// - `eps`: the approximation quality parameter; smaller values scale the
///   identity block up and force better approximations
///
/// Returns the approximation lattice basis as a [`MatZ`].
///
/// # Examples
/// ```
/// use qfall_svp::utils::approximation::approximation_basis;
/// use qfall_math::{integer::MatZ, rational::{MatQ, Q}};
/// use std::str::FromStr;
///
/// let targets = MatQ::from_str("[[3/2],[2/3]]").unwrap();
///
/// let basis = approximation_basis(&targets, &Q::from((1, 10)));
///
/// let cmp = MatZ::from_str("[[1000, 0, -1500],[0, 1000, -666],[0, 0, 1]]").unwrap();
/// assert_eq!(cmp, basis);
/// ```
///
/// # Panics ...
/// - if the provided matrix is not a vector.
/// - if `eps` is zero.
pub fn approximation_basis(v: &MatQ, eps: &Q) -> MatZ {
    let v = if v.is_column_vector() {
        v.clone()
    } else if v.is_row_vector() {
        v.transpose()
    } else {
        panic!("The input must be a vector.")
    };
    if eps == &Q::from(0) {
        panic!("The approximation parameter must not be zero.")
    }

    let n = v.get_num_rows();
    let scale = eps.pow(n + 1).unwrap();

    let mut out = MatZ::new(n + 1, n + 1);
    for i in 0..n {
        let target: Q = v.get_entry(i, 0).unwrap();

        out.set_entry(i, i, &truncate(&(Q::from(1) / &scale))).unwrap();
        out.set_entry(i, n, &truncate(&(-1 * (target / &scale))))
            .unwrap();
    }
    out.set_entry(n, n, Z::ONE).unwrap();

    out
}

/// Truncates a rational toward zero, matching the integer conversion used
/// by the original construction.
///
/// Parameters:
/// - `value`: the rational to truncate
///
/// Returns the truncated value as a [`Z`].
fn truncate(value: &Q) -> Z {
    if value >= &Q::from(0) {
        value.floor()
    } else {
        value.ceil()
    }
}

#[cfg(test)]
mod test_approximation_basis {
    use super::approximation_basis;
    use qfall_math::{
        integer::MatZ,
        rational::{MatQ, Q},
    };
    use std::str::FromStr;

    /// Ensure that the construction matches a manually computed basis,
    /// including the truncation of the scaled entries toward zero.
    #[test]
    fn matches_manual_computation() {
        let targets = MatQ::from_str("[[3/2],[2/3]]").unwrap();

        let basis = approximation_basis(&targets, &Q::from((1, 10)));

        let cmp =
            MatZ::from_str("[[1000, 0, -1500],[0, 1000, -666],[0, 0, 1]]").unwrap();
        assert_eq!(cmp, basis);
    }

    /// Ensure that row and column vectors yield the same basis.
    #[test]
    fn row_and_column_vector_agree() {
        let column = MatQ::from_str("[[1/3],[5/7]]").unwrap();
        let row = MatQ::from_str("[[1/3, 5/7]]").unwrap();

        assert_eq!(
            approximation_basis(&column, &Q::from((1, 2))),
            approximation_basis(&row, &Q::from((1, 2)))
        );
    }

    /// Ensure that the construction panics if a matrix is provided.
    #[test]
    #[should_panic]
    fn not_vector() {
        let matrix = MatQ::from_str("[[1, 2],[3, 4]]").unwrap();

        let _ = approximation_basis(&matrix, &Q::from((1, 2)));
    }

    /// Ensure that the construction panics for `eps = 0`.
    #[test]
    #[should_panic]
    fn zero_eps() {
        let targets = MatQ::from_str("[[1/2]]").unwrap();

        let _ = approximation_basis(&targets, &Q::from(0));
    }
}

#[cfg(test)]
mod test_truncate {
    use super::truncate;
    use qfall_math::{integer::Z, rational::Q};

    /// Ensure that positive values are rounded down and negative values are
    /// rounded up, i.e. always toward zero.
    #[test]
    fn truncates_toward_zero() {
        assert_eq!(Z::from(2), truncate(&Q::from((8, 3))));
        assert_eq!(Z::from(-2), truncate(&Q::from((-8, 3))));
        assert_eq!(Z::from(3), truncate(&Q::from(3)));
        assert_eq!(Z::ZERO, truncate(&Q::from(0)));
    }
}
