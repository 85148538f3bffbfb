// Copyright © 2024 Niklas Siemer
//
// This file is part of qFALL-svp.
//
// qFALL-svp is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the user-facing solver for the shortest vector
//! problem. It builds the Gram matrix of a basis, decomposes it, and drives
//! the enumeration to the shortest nonzero lattice vector within a radius.

mod shortest_vector;

pub use shortest_vector::{find_shortest_vector, find_shortest_vector_precision};
