// Copyright © 2024 Niklas Siemer
//
// This file is part of qFALL-svp.
//
// qFALL-svp is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This crate provides an exact-arithmetic solver for the radius-bounded
//! shortest vector problem (SVP) on integer lattices. It combines a
//! Cholesky decomposition of the basis's Gram matrix with a radius-pruned
//! Schnorr-Euchner enumeration (sphere decoding) over integer coordinate
//! vectors and is intended as a primitive for basis-quality evaluation and
//! attack simulation in lattice-based cryptography.

pub mod decomposition;
pub mod enumeration;
pub mod error;
pub mod svp;
pub mod utils;
