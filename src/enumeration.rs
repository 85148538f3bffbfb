// Copyright © 2024 Marvin Beckmann
//
// This file is part of qFALL-svp.
//
// qFALL-svp is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the radius-pruned enumeration of lattice points.
//! It searches a triangular factor of a Gram matrix for the integer
//! coordinate vector of minimal squared norm within a shrinking bound.

mod sphere_decoder;

pub use sphere_decoder::{EnumerationResult, SphereDecoder};
