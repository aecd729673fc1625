//! Validation errors

use crate::float_types::Real;
use crate::io::IoError;
use crate::mesh::Facet;

/// All the possible validation issues we might encounter while analysing a mesh
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (FacetIndexOutOfRange) A facet names a vertex that does not exist
    #[error("(FacetIndexOutOfRange) Facet {facet:?} index {index} is out of range (vertices.len = {vertex_count})")]
    FacetIndexOutOfRange {
        facet: Facet,
        index: usize,
        vertex_count: usize,
    },
    /// (PivotOutOfRange) The pivot index does not name a vertex
    #[error("(PivotOutOfRange) Pivot {pivot} is out of range (vertices.len = {vertex_count})")]
    PivotOutOfRange { pivot: usize, vertex_count: usize },
    /// (PivotNotInFacet) A facet does not contain the pivot
    #[error("(PivotNotInFacet) Facet {facet:?} does not contain pivot {pivot}")]
    PivotNotInFacet { facet: Facet, pivot: usize },
    /// (TooFewVertices) A barycenter needs at least one vertex besides the pivot
    #[error("(TooFewVertices) Need at least {required} vertices, mesh has {found}")]
    TooFewVertices { required: usize, found: usize },
    /// (ZeroLengthVector) A direction was requested for a zero vector
    #[error("(ZeroLengthVector) Zero vector cannot be normalized ({context})")]
    ZeroLengthVector { context: &'static str },
    /// (NonPositiveDot) The two pivot edges of a facet are perpendicular or reflex
    #[error("(NonPositiveDot) Edges of facet {facet:?} have non-positive dot product {dot}")]
    NonPositiveDot { facet: Facet, dot: Real },
    /// (InvalidResolution) Quantization resolution must be finite and positive
    #[error("(InvalidResolution) Resolution {0} must be finite and positive")]
    InvalidResolution(Real),
    /// (Unquantizable) A measurement is non-finite or too large for the grid
    #[error("(Unquantizable) Value {value} cannot be indexed on a grid of resolution {resolution}")]
    Unquantizable { value: Real, resolution: Real },
    /// (NonFiniteVector) A direction was requested for a vector with NaN or infinite components
    #[error("(NonFiniteVector) Non-finite vector cannot be normalized ({context})")]
    NonFiniteVector { context: &'static str },
    /// (UnexpectedLengthClasses) A strut listing needs exactly two edge lengths
    #[error("(UnexpectedLengthClasses) Expected 2 edge length classes, found {0}")]
    UnexpectedLengthClasses(usize),
    /// (HubCountMismatch) Hub counts do not add up to the vertex count
    #[error("(HubCountMismatch) {hexagons} hexagons + {pentagons} pentagons != {vertex_count} vertices")]
    HubCountMismatch {
        hexagons: usize,
        pentagons: usize,
        vertex_count: usize,
    },
    /// (InvariantViolation) A measurement does not match what the caller expected
    #[error("(InvariantViolation) {0}")]
    InvariantViolation(String),
}

/// Anything [`analyze`](crate::analysis::analyze) can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
