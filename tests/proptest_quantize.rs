//! Property-based tests for quantization and edge enumeration.
//!
//! - Quantization is idempotent and monotonic, and moves a value by less
//!   than one grid step
//! - Edge enumeration yields the three winding-order edges and restarts cleanly

use geodome::{
    float_types::Real,
    mesh::edges::{canonical, enum_edges, rotate_to},
    quantize::{Quantizer, limit_resolution},
};
use proptest::prelude::*;

/// Resolutions in the range actually used for metres and radians.
fn resolution() -> impl Strategy<Value = Real> {
    prop_oneof![Just(1e-4), Just(1e-3), Just(1e-2), 1e-5..1e-1]
}

proptest! {
    #[test]
    fn prop_quantize_is_idempotent(x in -100.0..100.0, res in resolution()) {
        let once = limit_resolution(x, res).unwrap();
        prop_assert_eq!(limit_resolution(once, res).unwrap(), once);
    }

    #[test]
    fn prop_quantize_truncates_toward_zero(x in -100.0..100.0, res in resolution()) {
        let q = limit_resolution(x, res).unwrap();
        // Values within roundoff of a grid line may snap up onto it.
        let slack = x.abs() * 1e-8;
        prop_assert!(q.abs() <= x.abs() + slack);
        prop_assert!((x - q).abs() < res + slack);
        prop_assert!(q == 0.0 || q.signum() == x.signum());
    }

    #[test]
    fn prop_quantize_is_monotonic(a in -100.0..100.0, b in -100.0..100.0, res in resolution()) {
        let quantizer = Quantizer::new(res).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(quantizer.key(lo).unwrap() <= quantizer.key(hi).unwrap());
    }

    #[test]
    fn prop_enum_edges_follows_winding(a in 0usize..1000, b in 0usize..1000, c in 0usize..1000) {
        let edges = enum_edges([a, b, c]);
        let first: Vec<_> = edges.clone().collect();
        prop_assert_eq!(&first, &vec![(a, b), (b, c), (c, a)]);
        prop_assert_eq!(first, edges.collect::<Vec<_>>());
    }

    #[test]
    fn prop_rotation_keeps_edge_cycle(a in 0usize..1000, b in 1000usize..2000, c in 2000usize..3000) {
        let facet = [a, b, c];
        let mut expected: Vec<_> = enum_edges(facet).map(canonical).collect();
        expected.sort_unstable();
        for pivot in facet {
            let rotated = rotate_to(facet, pivot).unwrap();
            prop_assert_eq!(rotated[0], pivot);
            let mut edges: Vec<_> = enum_edges(rotated).map(canonical).collect();
            edges.sort_unstable();
            prop_assert_eq!(&edges, &expected);
        }
    }
}
