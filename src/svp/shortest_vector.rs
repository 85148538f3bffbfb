// Copyright © 2024 Niklas Siemer
//
// This file is part of qFALL-svp.
//
// qFALL-svp is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the orchestration of a shortest vector computation:
//! Gram matrix, Cholesky decomposition, and radius-pruned enumeration.

use crate::decomposition::{cholesky_precision, DEFAULT_SQRT_PRECISION};
use crate::enumeration::SphereDecoder;
use crate::error::SVPError;
use qfall_math::{
    integer::{MatZ, Z},
    rational::{MatQ, Q},
    traits::{MatrixDimensions, MatrixGetEntry},
};

/// Computes the integer coordinate vector `x` such that `basis * x` is the
/// shortest nonzero lattice vector with squared norm strictly below
/// `radius_sqrd`, using the default square-root precision.
///
/// Use [`find_shortest_vector_precision`] to control the precision of the
/// decomposition's square roots explicitly.
///
/// Parameters:
/// - `basis`: specifies the lattice basis; its columns generate the lattice
/// - `radius_sqrd`: specifies the squared search radius, or `None` for an
///   unbounded search
///
/// Returns the coordinates of the shortest nonzero lattice vector found as
/// a [`MatZ`] column vector, the all-zero vector if no nonzero lattice
/// vector lies within the radius, or a [`SVPError`] if the basis is
/// degenerate. The lattice vector itself is recovered as
/// `basis * coordinates`.
///
/// # Examples
/// ```
/// use qfall_svp::svp::find_shortest_vector;
/// use qfall_math::{integer::{MatZ, Z}, rational::Q};
///
/// let basis = MatZ::identity(3, 3);
///
/// let coordinates = find_shortest_vector(&basis, Some(&Q::from(2))).unwrap();
///
/// let vector = &basis * &coordinates;
/// assert_eq!(Z::ONE, vector.norm_eucl_sqrd().unwrap());
/// ```
///
/// # Errors and Failures
/// - Returns a [`SVPError`] of type
///   [`NotPositiveDefinite`](SVPError::NotPositiveDefinite)
///   if the basis is degenerate, i.e. its columns are linearly dependent.
pub fn find_shortest_vector(basis: &MatZ, radius_sqrd: Option<&Q>) -> Result<MatZ, SVPError> {
    find_shortest_vector_precision(basis, radius_sqrd, &Z::from(DEFAULT_SQRT_PRECISION))
}

/// Computes the integer coordinate vector `x` such that `basis * x` is the
/// shortest nonzero lattice vector with squared norm strictly below
/// `radius_sqrd`.
///
/// The Gram matrix `basis^t * basis` is computed exactly over the integers.
/// It is unaffected by zero-padding a basis with fewer rows than columns to
/// a square matrix, so no padding is materialized; such presentations are
/// degenerate and rejected by the decomposition. For an unbounded search
/// the radius is initialized to the squared norm of the shortest basis
/// column plus one, which admits at least this column itself.
///
/// Parameters:
/// - `basis`: specifies the lattice basis; its columns generate the lattice
/// - `radius_sqrd`: specifies the squared search radius, or `None` for an
///   unbounded search
/// - `precision`: specifies the precision that is forwarded to
///   [`Q::sqrt_precision`] for the square roots of the decomposition
///
/// Returns the coordinates of the shortest nonzero lattice vector found as
/// a [`MatZ`] column vector, the all-zero vector if no nonzero lattice
/// vector lies within the radius, or a [`SVPError`] if the basis is
/// degenerate.
///
/// # Examples
/// ```
/// use qfall_svp::svp::find_shortest_vector_precision;
/// use qfall_math::integer::{MatZ, Z};
/// use std::str::FromStr;
///
/// let basis = MatZ::from_str("[[2, 1],[0, 1]]").unwrap();
/// let precision = Z::from(i64::MAX);
///
/// let coordinates = find_shortest_vector_precision(&basis, None, &precision).unwrap();
///
/// let vector = &basis * &coordinates;
/// assert_eq!(Z::from(2), vector.norm_eucl_sqrd().unwrap());
/// ```
///
/// # Errors and Failures
/// - Returns a [`SVPError`] of type
///   [`NotPositiveDefinite`](SVPError::NotPositiveDefinite)
///   if the basis is degenerate, i.e. its columns are linearly dependent.
pub fn find_shortest_vector_precision(
    basis: &MatZ,
    radius_sqrd: Option<&Q>,
    precision: &Z,
) -> Result<MatZ, SVPError> {
    let gram = basis.transpose() * basis;
    let factor = cholesky_precision(&MatQ::from(&gram), precision)?;

    let radius_sqrd = match radius_sqrd {
        Some(radius_sqrd) => radius_sqrd.clone(),
        None => unbounded_radius_sqrd(&gram),
    };

    match SphereDecoder::new(&factor, radius_sqrd).solve() {
        Some(result) => Ok(result.coordinates),
        None => Ok(MatZ::new(basis.get_num_columns(), 1)),
    }
}

/// Computes the squared radius for an unbounded search from the diagonal of
/// the Gram matrix: the squared norm of the shortest basis column plus one.
/// The shortest lattice vector is never longer than the shortest column, so
/// this bound keeps the column itself inside the strict search radius.
///
/// Parameters:
/// - `gram`: the Gram matrix of the basis
///
/// Returns the initial squared search radius as a [`Q`].
fn unbounded_radius_sqrd(gram: &MatZ) -> Q {
    let mut min_col_norm_sqrd: Z = gram.get_entry(0, 0).unwrap();
    for j in 1..gram.get_num_rows() {
        let col_norm_sqrd: Z = gram.get_entry(j, j).unwrap();
        if col_norm_sqrd < min_col_norm_sqrd {
            min_col_norm_sqrd = col_norm_sqrd;
        }
    }

    Q::from(&(min_col_norm_sqrd + Z::ONE))
}

#[cfg(test)]
mod test_find_shortest_vector {
    use super::{find_shortest_vector, find_shortest_vector_precision};
    use crate::error::SVPError;
    use qfall_math::{
        integer::{MatZ, Z},
        rational::Q,
        traits::Pow,
    };
    use std::str::FromStr;

    /// Ensure that an unbounded search on a badly reduced basis returns a
    /// lattice vector far shorter than both basis columns.
    #[test]
    fn reduces_badly_conditioned_basis() {
        let basis = MatZ::from_str("[[999999, -367880],[0, 1]]").unwrap();

        let coordinates = find_shortest_vector(&basis, None).unwrap();

        let vector = &basis * &coordinates;
        let norm_sqrd = vector.norm_eucl_sqrd().unwrap();
        assert!(norm_sqrd > Z::ZERO);
        // both columns have a squared norm of at least 367880^2
        assert!(norm_sqrd < Z::from(367880).pow(2).unwrap());
    }

    /// Ensure that a radius excluding every nonzero vector yields the
    /// all-zero coordinate vector.
    #[test]
    fn no_vector_within_radius() {
        let basis = MatZ::identity(3, 3);

        let coordinates = find_shortest_vector(&basis, Some(&Q::from((1, 2)))).unwrap();

        assert_eq!(MatZ::new(3, 1), coordinates);
    }

    /// Ensure that a unit coordinate vector is returned for the integer
    /// lattice and a squared radius of `2`.
    #[test]
    fn unit_vector_in_integer_lattice() {
        let basis = MatZ::identity(3, 3);

        let coordinates = find_shortest_vector(&basis, Some(&Q::from(2))).unwrap();

        assert_eq!(Z::ONE, coordinates.norm_eucl_sqrd().unwrap());
    }

    /// Ensure that a one-dimensional lattice yields its generator with a
    /// deterministic sign and never the zero vector.
    #[test]
    fn one_dimensional_basis() {
        let basis = MatZ::from_str("[[5]]").unwrap();

        let first = find_shortest_vector(&basis, None).unwrap();
        let second = find_shortest_vector(&basis, None).unwrap();

        assert_eq!(MatZ::from_str("[[1]]").unwrap(), first);
        assert_eq!(first, second);
    }

    /// Ensure that two searches with identical inputs return identical
    /// coordinate vectors.
    #[test]
    fn deterministic_result() {
        let basis = MatZ::from_str("[[999999, -367880],[0, 1]]").unwrap();

        let first = find_shortest_vector(&basis, None).unwrap();
        let second = find_shortest_vector(&basis, None).unwrap();

        assert_eq!(first, second);
    }

    /// Ensure that a basis with linearly dependent columns is rejected
    /// instead of silently returning a zero vector.
    #[test]
    fn degenerate_basis_rejected() {
        let basis = MatZ::from_str("[[1, 1],[1, 1]]").unwrap();

        let result = find_shortest_vector(&basis, None);

        assert!(matches!(result, Err(SVPError::NotPositiveDefinite(_))));
    }

    /// Ensure that a basis with fewer rows than columns is rejected, as its
    /// Gram matrix is singular.
    #[test]
    fn wide_basis_rejected() {
        let basis = MatZ::from_str("[[2, 3]]").unwrap();

        let result = find_shortest_vector(&basis, None);

        assert!(matches!(result, Err(SVPError::NotPositiveDefinite(_))));
    }

    /// Ensure that the returned coordinate vector has one entry per basis
    /// column.
    #[test]
    fn coordinate_vector_dimensions() {
        use qfall_math::traits::MatrixDimensions;

        let basis = MatZ::from_str("[[2, 0],[1, 1]]").unwrap();

        let coordinates = find_shortest_vector(&basis, None).unwrap();

        assert_eq!(2, coordinates.get_num_rows());
        assert_eq!(1, coordinates.get_num_columns());
    }

    /// Ensure that an explicitly chosen precision computes the same
    /// coordinates as the default precision on an exact instance.
    #[test]
    fn explicit_precision_consistent() {
        let basis = MatZ::from_str("[[2, 1],[0, 1]]").unwrap();

        let default_precision = find_shortest_vector(&basis, None).unwrap();
        let high_precision =
            find_shortest_vector_precision(&basis, None, &Z::from(i64::MAX)).unwrap();

        assert_eq!(
            (&basis * &default_precision).norm_eucl_sqrd().unwrap(),
            (&basis * &high_precision).norm_eucl_sqrd().unwrap()
        );
    }
}
