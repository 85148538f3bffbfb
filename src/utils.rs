// Copyright © 2024 Marvin Beckmann
//
// This file is part of qFALL-svp.
//
// qFALL-svp is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains common functions that are used to set up inputs for
//! the shortest vector solver.
//!
//! This can include specialized basis constructions that encode other
//! problems, such as simultaneous Diophantine approximation, as lattices.

pub mod approximation;
