// Copyright © 2024 Niklas Siemer
//
// This file is part of qFALL-svp.
//
// qFALL-svp is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! A small demonstration of the shortest vector solver: searches the
//! lattice of a badly reduced basis without a radius bound and prints the
//! basis, the coordinates of the shortest vector found, and the vector
//! itself.

use qfall_math::integer::MatZ;
use qfall_svp::svp::find_shortest_vector;
use std::str::FromStr;

fn main() {
    let basis = MatZ::from_str("[[999999, -367880],[0, 1]]").unwrap();
    println!("basis (columns generate the lattice): {basis}");

    let coordinates = find_shortest_vector(&basis, None).unwrap();
    println!("coordinates of the shortest vector: {coordinates}");

    let vector = &basis * &coordinates;
    println!("shortest vector: {vector}");
    println!("squared norm: {}", vector.norm_eucl_sqrd().unwrap());
}
