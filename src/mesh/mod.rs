//! `Mesh` struct: an indexed triangle soup loaded once and never mutated.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::edges::{canonical, enum_edges};
use hashbrown::HashMap;
use nalgebra::Point3;

pub mod edges;

/// Three vertex indices in authored (counter-clockwise) winding order.
pub type Facet = [usize; 3];

/// A pair of vertex indices. Directed while walking a facet, canonical
/// (smaller index first) when used as a key.
pub type Edge = (usize, usize);

/// Vertices and triangular facets of a polyhedral surface.
///
/// Every facet index is guaranteed to be in `0..vertices.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3<Real>>,
    facets: Vec<Facet>,
}

impl Mesh {
    /// Build a mesh, checking that every facet references an existing vertex.
    pub fn new(vertices: Vec<Point3<Real>>, facets: Vec<Facet>) -> Result<Self, ValidationError> {
        let vertex_count = vertices.len();
        for facet in &facets {
            if let Some(&index) = facet.iter().find(|&&index| index >= vertex_count) {
                return Err(ValidationError::FacetIndexOutOfRange {
                    facet: *facet,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(Self::from_checked(vertices, facets))
    }

    /// Caller has already range-checked the facets.
    pub(crate) const fn from_checked(vertices: Vec<Point3<Real>>, facets: Vec<Facet>) -> Self {
        Mesh { vertices, facets }
    }

    pub fn vertices(&self) -> &[Point3<Real>] {
        &self.vertices
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Euclidean length of an edge.
    pub fn edge_length(&self, (a, b): Edge) -> Real {
        (self.vertices[b] - self.vertices[a]).norm()
    }

    /// Number of facets sharing each canonical edge.
    pub fn edge_incidence(&self) -> HashMap<Edge, usize> {
        let mut counts: HashMap<Edge, usize> = HashMap::new();
        for &facet in &self.facets {
            for edge in enum_edges(facet) {
                *counts.entry(canonical(edge)).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Number of distinct canonical edges.
    pub fn edge_count(&self) -> usize {
        self.edge_incidence().len()
    }

    /// Checks if the mesh is a closed surface
    ///
    /// ### Returns
    /// Returns `true` if every edge is shared by exactly 2 facets. An empty
    /// mesh is not closed.
    pub fn is_closed(&self) -> bool {
        let counts = self.edge_incidence();
        !counts.is_empty() && counts.values().all(|&count| count == 2)
    }
}
