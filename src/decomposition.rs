// Copyright © 2024 Niklas Siemer
//
// This file is part of qFALL-svp.
//
// qFALL-svp is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains matrix factorizations used to prepare a lattice
//! basis for enumeration. At the moment this is the Cholesky decomposition
//! of a symmetric positive definite Gram matrix.

mod cholesky;

pub(crate) use cholesky::DEFAULT_SQRT_PRECISION;
pub use cholesky::{cholesky, cholesky_precision};
