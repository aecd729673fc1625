//! Hub and strut counts for documenting a dome build.

use crate::analysis::classify::MeshSummary;
use crate::errors::ValidationError;
use crate::float_types::Real;

/// Number of hexagonal and pentagonal hubs the caller expects in a mesh.
///
/// Hub type cannot be read off the vertex degree for a dome with a boundary
/// (a rim hub of a hexagon has degree 3 or 4), so it is supplied from the
/// design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubCounts {
    pub hexagons: usize,
    pub pentagons: usize,
}

/// Parts needed to build one mesh: hubs plus struts of the two lengths of a
/// 2V dome.
#[derive(Debug, Clone, PartialEq)]
pub struct PartListing {
    pub hubs: HubCounts,
    pub long_struts: usize,
    pub short_struts: usize,
    pub long_length: Real,
    pub short_length: Real,
}

impl PartListing {
    /// Derive the listing from a summary.
    ///
    /// Requires exactly two edge-length classes and hub counts that add up to
    /// the vertex count.
    pub fn from_summary(summary: &MeshSummary, hubs: HubCounts) -> Result<Self, ValidationError> {
        let classes: Vec<_> = summary.lengths.iter().collect();
        let [(short_length, short), (long_length, long)] = classes[..] else {
            return Err(ValidationError::UnexpectedLengthClasses(classes.len()));
        };

        if hubs.hexagons + hubs.pentagons != summary.vertex_count {
            return Err(ValidationError::HubCountMismatch {
                hexagons: hubs.hexagons,
                pentagons: hubs.pentagons,
                vertex_count: summary.vertex_count,
            });
        }

        Ok(PartListing {
            hubs,
            long_struts: long.len(),
            short_struts: short.len(),
            long_length,
            short_length,
        })
    }
}
