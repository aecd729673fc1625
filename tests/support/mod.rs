//! Test support library
//! Provides fixture lookup & tolerance helpers for tests.

#![allow(dead_code)]

use geodome::{Mesh, float_types::Real, io::load_obj};
use std::path::PathBuf;

/// Path of a mesh under the crate's `meshes/` directory.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("meshes").join(name)
}

/// Load a fixture mesh, panicking with the loader error if it fails.
pub fn load_fixture(name: &str) -> Mesh {
    load_obj(fixture(name)).unwrap_or_else(|e| panic!("loading {name}: {e}"))
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// True when `value` is within `eps` of any of `targets`.
pub fn approx_any(value: Real, targets: &[Real], eps: Real) -> bool {
    targets.iter().any(|&target| approx_eq(value, target, eps))
}
