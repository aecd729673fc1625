//! Whole-mesh classification: vertex degrees and edge lengths.

use crate::errors::ValidationError;
use crate::mesh::edges::{canonical, enum_edges};
use crate::mesh::{Edge, Mesh};
use crate::quantize::{QuantizedHistogram, Quantizer};
use std::collections::{BTreeMap, BTreeSet};

/// Vertex indices grouped by degree (number of incident facets).
pub type DegreeHistogram = BTreeMap<usize, BTreeSet<usize>>;

/// Canonical edges grouped by quantized length.
pub type LengthHistogram = QuantizedHistogram<Edge>;

/// Group every vertex by the number of facets it belongs to.
///
/// Vertices that no facet uses land in bucket `0`, so bucket sizes always add
/// up to the vertex count.
pub fn degree_histogram(mesh: &Mesh) -> DegreeHistogram {
    let mut degrees = vec![0usize; mesh.vertex_count()];
    for facet in mesh.facets() {
        for &index in facet {
            degrees[index] += 1;
        }
    }

    let mut histogram = DegreeHistogram::new();
    for (index, degree) in degrees.into_iter().enumerate() {
        histogram.entry(degree).or_default().insert(index);
    }
    histogram
}

/// Group every canonical edge by its quantized length.
pub fn length_histogram(mesh: &Mesh, quantizer: &Quantizer) -> Result<LengthHistogram, ValidationError> {
    let mut histogram = LengthHistogram::new(*quantizer);
    for &facet in mesh.facets() {
        for edge in enum_edges(facet) {
            histogram.insert(mesh.edge_length(edge), canonical(edge))?;
        }
    }
    Ok(histogram)
}

/// Degree and length statistics of one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSummary {
    pub vertex_count: usize,
    pub facet_count: usize,
    /// Distinct canonical edges.
    pub edge_count: usize,
    /// Every edge is shared by exactly two facets.
    pub closed: bool,
    pub degrees: DegreeHistogram,
    pub lengths: LengthHistogram,
}

impl MeshSummary {
    pub fn new(mesh: &Mesh, quantizer: &Quantizer) -> Result<Self, ValidationError> {
        let summary = MeshSummary {
            vertex_count: mesh.vertex_count(),
            facet_count: mesh.facet_count(),
            edge_count: mesh.edge_count(),
            closed: mesh.is_closed(),
            degrees: degree_histogram(mesh),
            lengths: length_histogram(mesh, quantizer)?,
        };
        tracing::debug!(
            vertices = summary.vertex_count,
            facets = summary.facet_count,
            edges = summary.edge_count,
            length_classes = summary.lengths.len(),
            "classified mesh"
        );
        Ok(summary)
    }
}
