// Copyright © 2024 Marvin Beckmann
//
// This file is part of qFALL-svp.
//
// qFALL-svp is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains a sphere decoder performing a Schnorr-Euchner
//! enumeration: a recursive branch-and-bound search over integer coordinate
//! vectors that visits the candidates of each level nearest-to-center first
//! and prunes every branch whose partial squared distance already reaches
//! the current search radius.
//!
//! The main references are listed in the following:
//! - \[1\] Schnorr, Claus-Peter and Euchner, Martin (1994).
//! Lattice basis reduction: Improved practical algorithms and solving
//! subset sum problems.
//! In: Mathematical Programming 66.
//! <https://doi.org/10.1007/BF01581144>
//! - \[2\] Agrell, Erik et al. (2002).
//! Closest point search in lattices.
//! In: IEEE Transactions on Information Theory 48.8.
//! <https://doi.org/10.1109/TIT.2002.800499>

use qfall_math::{
    integer::{MatZ, Z},
    rational::{MatQ, Q},
    traits::{MatrixDimensions, MatrixGetEntry, MatrixSetEntry, Pow},
};
use serde::{Deserialize, Serialize};

/// This struct holds the state of one enumeration: the borrowed read-only
/// triangular factor together with the mutable coordinate vector, the
/// shrinking squared search radius, and the best result found so far.
/// Each instance must only be used for a single search.
///
/// Attributes:
/// - `r`: the upper triangular factor of the Gram matrix with strictly
///   positive diagonal entries, shared read-only for the whole search
/// - `n`: the number of enumeration levels, i.e. the dimension of `r`
/// - `radius_sqrd`: the squared search radius, only ever tightened when a
///   better candidate is accepted
/// - `x`: the coordinate vector along the single active search path
/// - `best_x`: the coordinates of the best nonzero candidate accepted so far
/// - `num_solutions`: the number of accepted nonzero candidates
///
/// # Examples
/// ```
/// use qfall_svp::enumeration::SphereDecoder;
/// use qfall_math::rational::{MatQ, Q};
///
/// let r = MatQ::identity(2, 2);
///
/// let result = SphereDecoder::new(&r, Q::from(2)).solve().unwrap();
///
/// assert_eq!(Q::from(1), result.norm_sqrd);
/// ```
pub struct SphereDecoder<'a> {
    r: &'a MatQ,
    n: i64,
    radius_sqrd: Q,
    x: MatZ,
    best_x: MatZ,
    num_solutions: u64,
}

/// This struct holds the outcome of a successful enumeration.
///
/// Attributes:
/// - `coordinates`: the integer coordinate vector of the shortest nonzero
///   lattice vector found within the search radius
/// - `norm_sqrd`: the squared norm achieved by `coordinates`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct EnumerationResult {
    pub coordinates: MatZ,
    pub norm_sqrd: Q,
}

impl<'a> SphereDecoder<'a> {
    /// Instantiates a new [`SphereDecoder`] for the provided triangular
    /// factor and squared search radius.
    ///
    /// Parameters:
    /// - `r`: specifies the upper triangular factor of the Gram matrix,
    ///   e.g. computed by [`cholesky`](crate::decomposition::cholesky)
    /// - `radius_sqrd`: specifies the initial squared search radius
    ///
    /// Returns a [`SphereDecoder`] ready for a single search.
    ///
    /// # Examples
    /// ```
    /// use qfall_svp::enumeration::SphereDecoder;
    /// use qfall_math::rational::{MatQ, Q};
    ///
    /// let r = MatQ::identity(3, 3);
    ///
    /// let decoder = SphereDecoder::new(&r, Q::from(2));
    /// ```
    ///
    /// # Panics ...
    /// - if the provided matrix is not square.
    pub fn new(r: &'a MatQ, radius_sqrd: Q) -> Self {
        let n = r.get_num_columns();
        if r.get_num_rows() != n {
            panic!("The triangular factor must be square.");
        }

        Self {
            r,
            n,
            radius_sqrd,
            x: MatZ::new(n, 1),
            best_x: MatZ::new(n, 1),
            num_solutions: 0,
        }
    }

    /// Searches the lattice described by the triangular factor for the
    /// nonzero integer coordinate vector of minimal squared norm strictly
    /// below the search radius.
    ///
    /// The search proceeds level by level from `n - 1` down to `0`. At each
    /// level the real-valued center of the remaining sphere slice is
    /// computed from the already-fixed coordinates above, and the integer
    /// candidates are visited in the zig-zag order `center`, `center + 1`,
    /// `center - 1`, `center + 2`, ... Every accepted complete vector
    /// tightens the radius to its squared norm, so the bound is
    /// monotonically non-increasing over one search.
    ///
    /// Termination is guaranteed as the diagonal entries of the factor are
    /// strictly positive: each level's squared contribution grows without
    /// bound in the offset from the center, so every level's candidate loop
    /// exhausts once a whole offset stays outside the radius on both signs.
    ///
    /// When two candidates reach the pruning boundary with exactly equal
    /// distance, the one visited earlier wins, as later candidates are
    /// compared strictly against the tightened radius. In particular,
    /// `center + delta` is preferred over `center - delta`.
    ///
    /// Returns the coordinates and squared norm of the shortest nonzero
    /// vector found as an [`EnumerationResult`], or `None` if no nonzero
    /// vector lies strictly within the initial radius.
    ///
    /// # Examples
    /// ```
    /// use qfall_svp::enumeration::SphereDecoder;
    /// use qfall_math::rational::{MatQ, Q};
    ///
    /// let r = MatQ::identity(2, 2);
    ///
    /// // the shortest nonzero vector of the integer lattice has norm 1
    /// let result = SphereDecoder::new(&r, Q::from(2)).solve().unwrap();
    /// assert_eq!(Q::from(1), result.norm_sqrd);
    ///
    /// // a squared radius of 1/2 excludes every nonzero vector
    /// let result = SphereDecoder::new(&r, Q::from((1, 2))).solve();
    /// assert!(result.is_none());
    /// ```
    pub fn solve(mut self) -> Option<EnumerationResult> {
        self.search_level(self.n - 1, &Q::from(0));

        if self.num_solutions > 0 {
            Some(EnumerationResult {
                coordinates: self.best_x,
                norm_sqrd: self.radius_sqrd,
            })
        } else {
            None
        }
    }

    /// Enumerates all candidates of level `k` given the accumulated squared
    /// distance `dist_above` of the levels `k + 1` to `n - 1`.
    ///
    /// Parameters:
    /// - `k`: the level whose coordinate is chosen next
    /// - `dist_above`: the sum of the squared contributions of all levels
    ///   above `k` along the current search path
    fn search_level(&mut self, k: i64, dist_above: &Q) {
        let r_kk: Q = self.r.get_entry(k, k).unwrap();

        // center of the remaining sphere slice given the fixed coordinates
        let mut projection = Q::from(0);
        for j in (k + 1)..self.n {
            let r_kj: Q = self.r.get_entry(k, j).unwrap();
            let x_j: Z = self.x.get_entry(j, 0).unwrap();
            projection = projection + r_kj * Q::from(&x_j);
        }
        let center_real: Q = -1 * (projection / &r_kk);
        let center = center_real.round();

        let mut offset = Z::ZERO;
        loop {
            let candidates = if offset == Z::ZERO {
                vec![center.clone()]
            } else {
                vec![&center + &offset, &center - &offset]
            };

            let mut any_alive = false;
            for candidate in candidates {
                let term = (Q::from(&candidate) - &center_real) * &r_kk;
                let dist = dist_above + term.pow(2).unwrap();

                if dist < self.radius_sqrd {
                    any_alive = true;
                    self.x.set_entry(k, 0, &candidate).unwrap();

                    if k == 0 {
                        if self.x != MatZ::new(self.n, 1) {
                            self.best_x = self.x.clone();
                            self.num_solutions += 1;
                            self.radius_sqrd = dist;
                        }
                    } else {
                        self.search_level(k - 1, &dist);
                    }
                }
            }

            // a whole offset without a live candidate exhausts this level,
            // as the contribution only grows with larger offsets
            if offset > Z::ZERO && !any_alive {
                break;
            }
            offset = offset + Z::ONE;
        }
    }
}
