// Copyright © 2024 Marvin Beckmann
//
// This file is part of qFALL-svp.
//
// qFALL-svp is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains this crate's error enum. This enum can hold all
//! errors that can arise when computing a shortest vector.

use thiserror::Error;

/// [`SVPError`] defines this crate's error enum, which can hold all types
/// of errors that can occur while decomposing a Gram matrix or solving a
/// shortest vector instance.
///
/// # Examples
/// ```
/// use qfall_svp::error::SVPError;
///
/// fn invalid_gram_matrix() -> Result<(), SVPError> {
///     Err(SVPError::MismatchingMatrixDimension(String::from(
///         "The Gram matrix must be square.",
///     )))
/// }
/// ```
#[derive(Debug, Error)]
pub enum SVPError {
    /// Error if a matrix with mismatching dimensions was provided,
    /// e.g. a non-square Gram matrix was passed to the decomposition.
    #[error("the matrix dimensions are mismatching {0}")]
    MismatchingMatrixDimension(String),

    /// Error if a non-positive value appears where a square root has to be
    /// taken during the decomposition, i.e. the provided matrix is singular
    /// or not positive definite. For Gram matrices this signals a
    /// degenerate basis with linearly dependent columns.
    #[error("the matrix is not positive definite {0}")]
    NotPositiveDefinite(String),
}

#[cfg(test)]
mod test_svp_error {
    use super::SVPError;

    /// Ensure that the error messages contain the provided description.
    #[test]
    fn description_included() {
        let err_dim = SVPError::MismatchingMatrixDimension(String::from("3 x 2"));
        let err_pd = SVPError::NotPositiveDefinite(String::from("in column 1"));

        assert!(err_dim.to_string().contains("3 x 2"));
        assert!(err_pd.to_string().contains("in column 1"));
    }
}
