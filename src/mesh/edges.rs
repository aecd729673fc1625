//! Edge enumeration over triangular facets.

use crate::mesh::{Edge, Facet};

/// The three directed edges of `facet` in winding order:
/// `(a, b)`, `(b, c)`, `(c, a)`.
///
/// The iterator owns a copy of the facet, so it can be cloned to restart and
/// the function can be called again at no cost.
///
/// ```
/// use geodome::mesh::edges::enum_edges;
/// let edges: Vec<_> = enum_edges([4, 7, 1]).collect();
/// assert_eq!(edges, vec![(4, 7), (7, 1), (1, 4)]);
/// ```
pub fn enum_edges(facet: Facet) -> impl Iterator<Item = Edge> + Clone {
    facet
        .into_iter()
        .zip(facet.into_iter().cycle().skip(1))
}

/// Undirected form of an edge, smaller index first.
#[inline]
pub const fn canonical((a, b): Edge) -> Edge {
    if a < b { (a, b) } else { (b, a) }
}

/// Cyclically rotate `facet` until `pivot` comes first, keeping the winding.
///
/// Returns `None` when `pivot` is not a corner of the facet.
pub fn rotate_to(facet: Facet, pivot: usize) -> Option<Facet> {
    let position = facet.iter().position(|&index| index == pivot)?;
    let mut rotated = facet;
    rotated.rotate_left(position);
    Some(rotated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_edges_is_restartable() {
        let edges = enum_edges([0, 1, 2]);
        let first: Vec<_> = edges.clone().collect();
        let second: Vec<_> = edges.collect();
        assert_eq!(first, vec![(0, 1), (1, 2), (2, 0)]);
        assert_eq!(first, second);
        assert_eq!(enum_edges([0, 1, 2]).count(), 3);
    }

    #[test]
    fn canonical_orders_pair() {
        assert_eq!(canonical((5, 2)), (2, 5));
        assert_eq!(canonical((2, 5)), (2, 5));
        assert_eq!(canonical((3, 3)), (3, 3));
    }

    #[test]
    fn rotate_preserves_winding() {
        assert_eq!(rotate_to([3, 4, 5], 3), Some([3, 4, 5]));
        assert_eq!(rotate_to([3, 4, 5], 4), Some([4, 5, 3]));
        assert_eq!(rotate_to([3, 4, 5], 5), Some([5, 3, 4]));
        assert_eq!(rotate_to([3, 4, 5], 6), None);
    }
}
