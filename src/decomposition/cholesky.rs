// Copyright © 2024 Niklas Siemer
//
// This file is part of qFALL-svp.
//
// qFALL-svp is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the Cholesky decomposition of a symmetric positive
//! definite matrix `G` into an upper triangular factor `R` with `R^t * R = G`.
//!
//! All arithmetic is performed over exact rationals. The only approximation
//! in the decomposition are the square roots on the diagonal, whose
//! precision is chosen by the caller.

use crate::error::SVPError;
use qfall_math::{
    integer::Z,
    rational::{MatQ, Q},
    traits::{MatrixDimensions, MatrixGetEntry, MatrixSetEntry, Pow},
};

/// The square-root precision used whenever the caller does not specify one.
pub(crate) const DEFAULT_SQRT_PRECISION: i64 = 1_000_000_000;

/// Decomposes a symmetric positive definite matrix `g` into an upper
/// triangular factor `r` with `r^t * r = g` using the default
/// square-root precision.
///
/// Use [`cholesky_precision`] to control the precision of the diagonal
/// square roots explicitly.
///
/// Parameters:
/// - `g`: specifies the symmetric positive definite matrix to decompose,
///   e.g. the Gram matrix of a lattice basis
///
/// Returns the upper triangular Cholesky factor of `g` as a [`MatQ`] with
/// strictly positive diagonal entries or a [`SVPError`]
/// if `g` is not square or not positive definite.
///
/// # Examples
/// ```
/// use qfall_svp::decomposition::cholesky;
/// use qfall_math::rational::{MatQ, Q};
/// use qfall_math::traits::MatrixGetEntry;
/// use std::str::FromStr;
///
/// let gram = MatQ::from_str("[[4, 2],[2, 3]]").unwrap();
///
/// let r = cholesky(&gram).unwrap();
///
/// // the factor is upper triangular
/// assert_eq!(Q::from(0), r.get_entry(1, 0).unwrap());
/// ```
///
/// # Errors and Failures
/// - Returns a [`SVPError`] of type
///   [`MismatchingMatrixDimension`](SVPError::MismatchingMatrixDimension)
///   if `g` is not square.
/// - Returns a [`SVPError`] of type
///   [`NotPositiveDefinite`](SVPError::NotPositiveDefinite)
///   if a non-positive pivot appears during the elimination, i.e. `g` is
///   singular or not positive definite.
pub fn cholesky(g: &MatQ) -> Result<MatQ, SVPError> {
    cholesky_precision(g, &Z::from(DEFAULT_SQRT_PRECISION))
}

/// Decomposes a symmetric positive definite matrix `g` into an upper
/// triangular factor `r` with `r^t * r = g`.
///
/// The decomposition uses a column-major elimination: for column `j` the
/// diagonal entry is `r[j][j] = sqrt(g[j][j] - Σ_{k<j} r[k][j]^2)` and the
/// remaining entries of the row are
/// `r[j][i] = (g[j][i] - Σ_{k<j} r[k][i] * r[k][j]) / r[j][j]` for `i > j`.
/// Apart from the diagonal square roots every operation is exact.
///
/// Parameters:
/// - `g`: specifies the symmetric positive definite matrix to decompose
/// - `precision`: specifies the precision that is forwarded to
///   [`Q::sqrt_precision`] for every diagonal square root
///
/// Returns the upper triangular Cholesky factor of `g` as a [`MatQ`] with
/// strictly positive diagonal entries or a [`SVPError`]
/// if `g` is not square or not positive definite.
///
/// # Examples
/// ```
/// use qfall_svp::decomposition::cholesky_precision;
/// use qfall_math::{integer::Z, rational::MatQ};
/// use std::str::FromStr;
///
/// let gram = MatQ::from_str("[[9, 3],[3, 5]]").unwrap();
/// let precision = Z::from(i64::MAX);
///
/// let r = cholesky_precision(&gram, &precision).unwrap();
/// ```
///
/// # Errors and Failures
/// - Returns a [`SVPError`] of type
///   [`MismatchingMatrixDimension`](SVPError::MismatchingMatrixDimension)
///   if `g` is not square.
/// - Returns a [`SVPError`] of type
///   [`NotPositiveDefinite`](SVPError::NotPositiveDefinite)
///   if a non-positive pivot appears during the elimination, i.e. `g` is
///   singular or not positive definite.
pub fn cholesky_precision(g: &MatQ, precision: &Z) -> Result<MatQ, SVPError> {
    let n = g.get_num_rows();
    if g.get_num_columns() != n {
        return Err(SVPError::MismatchingMatrixDimension(format!(
            "as a {} x {} matrix was provided, but the Cholesky decomposition \
            is only defined for square matrices.",
            n,
            g.get_num_columns()
        )));
    }

    // The elimination is carried out exactly over the rationals: instead of
    // the factor entries `r[j][i]` themselves it tracks the pivots
    // `d_j = r[j][j]^2` and the products `e[j][i] = r[j][i] * r[j][j]`,
    // which satisfy `r[k][i] * r[k][j] = e[k][i] * e[k][j] / d_k`. This
    // keeps the positivity test exact; the approximate square roots only
    // enter the returned factor.
    let mut pivots: Vec<Q> = Vec::new();
    let mut e = MatQ::new(n, n);
    for j in 0..n {
        let mut pivot: Q = g.get_entry(j, j).unwrap();
        for k in 0..j {
            let e_kj: Q = e.get_entry(k, j).unwrap();
            pivot = pivot - e_kj.pow(2).unwrap() / &pivots[k as usize];
        }

        if pivot <= Q::from(0) {
            return Err(SVPError::NotPositiveDefinite(format!(
                "as the pivot in column {j} is {pivot}, but all pivots \
                must be strictly positive."
            )));
        }

        for i in (j + 1)..n {
            let mut entry: Q = g.get_entry(j, i).unwrap();
            for k in 0..j {
                let e_ki: Q = e.get_entry(k, i).unwrap();
                let e_kj: Q = e.get_entry(k, j).unwrap();
                entry = entry - e_ki * e_kj / &pivots[k as usize];
            }
            e.set_entry(j, i, &entry).unwrap();
        }
        pivots.push(pivot);
    }

    let mut r = MatQ::new(n, n);
    for j in 0..n {
        // the pivot was checked to be positive, hence the square root exists
        let r_jj = pivots[j as usize].sqrt_precision(precision).unwrap();
        r.set_entry(j, j, &r_jj).unwrap();

        for i in (j + 1)..n {
            let entry = e.get_entry(j, i).unwrap() / &r_jj;
            r.set_entry(j, i, &entry).unwrap();
        }
    }

    Ok(r)
}
