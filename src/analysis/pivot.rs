//! Angular analysis of the facets fanned around a single hub vertex.
//!
//! Given a cap mesh in which every facet shares one vertex (the pivot), the
//! analysis estimates the surface normal at the pivot and measures
//!
//! - the **off-plane** angle of every strut leaving the pivot, i.e. how far it
//!   dips below the tangent plane, and
//! - the **in-plane** angle each facet spans at the pivot.
//!
//! Both are quantized and grouped, so a regular hub shows up as a handful of
//! classes. On a 2V geodesic sphere a pentagonal hub has one class of each,
//! while a hexagonal hub has two.

use crate::errors::ValidationError;
use crate::float_types::{FRAC_PI_2, Real};
use crate::mesh::edges::{enum_edges, rotate_to};
use crate::mesh::{Edge, Facet, Mesh};
use crate::quantize::{QuantizedHistogram, Quantizer};
use nalgebra::{Matrix3, Point3, Vector3};

/// How facet directions are compared when measuring in-plane angles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InPlaneStrategy {
    /// Project both edge directions onto the tangent plane first. In-plane
    /// angles of a complete fan then sum to a full turn.
    #[default]
    Projected,
    /// Use the raw 3D edge directions. Kept to reproduce older numbers; the
    /// angles around a hub sum to less than a full turn on a curved surface.
    Raw,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PivotOptions {
    pub quantizer: Quantizer,
    pub strategy: InPlaneStrategy,
}

/// Result of [`pivot_analysis`].
#[derive(Debug, Clone, PartialEq)]
pub struct PivotAnalysis {
    pub pivot: usize,
    /// Mean of all vertices except the pivot.
    pub barycenter: Point3<Real>,
    /// Unit vector from the barycenter towards the pivot.
    pub normal: Vector3<Real>,
    /// Directed edges `(pivot, other)` by off-plane angle in radians.
    pub offplane: QuantizedHistogram<Edge>,
    /// Facets, rotated so the pivot comes first, by in-plane angle in radians.
    pub inplane: QuantizedHistogram<Facet>,
}

impl PivotAnalysis {
    /// Sum of the in-plane angles of every facet around the pivot.
    pub fn total_inplane_angle(&self) -> Real {
        self.inplane.weighted_total()
    }
}

fn normalize(vector: Vector3<Real>, context: &'static str) -> Result<Vector3<Real>, ValidationError> {
    if !vector.iter().all(|component| component.is_finite()) {
        return Err(ValidationError::NonFiniteVector { context });
    }
    vector
        .try_normalize(0.0)
        .ok_or(ValidationError::ZeroLengthVector { context })
}

fn check_preconditions(mesh: &Mesh, pivot: usize) -> Result<(), ValidationError> {
    let vertex_count = mesh.vertex_count();
    if pivot >= vertex_count {
        return Err(ValidationError::PivotOutOfRange {
            pivot,
            vertex_count,
        });
    }
    if vertex_count < 2 {
        return Err(ValidationError::TooFewVertices {
            required: 2,
            found: vertex_count,
        });
    }
    if let Some(&facet) = mesh.facets().iter().find(|facet| !facet.contains(&pivot)) {
        return Err(ValidationError::PivotNotInFacet { facet, pivot });
    }
    Ok(())
}

/// Measure off-plane and in-plane angles around `pivot`.
///
/// Every facet must contain `pivot`; this is checked before anything is
/// computed. Zero-length edges and facets whose two pivot edges are
/// perpendicular or worse are reported as errors, never skipped.
pub fn pivot_analysis(
    mesh: &Mesh,
    pivot: usize,
    options: &PivotOptions,
) -> Result<PivotAnalysis, ValidationError> {
    check_preconditions(mesh, pivot)?;

    let vertices = mesh.vertices();
    let apex = vertices[pivot];
    let others = (vertices.len() - 1) as Real;
    let sum = vertices
        .iter()
        .fold(Vector3::zeros(), |acc, vertex| acc + vertex.coords);
    let barycenter = Point3::from((sum - apex.coords) / others);
    let normal = normalize(apex - barycenter, "pivot normal")?;
    tracing::debug!(
        pivot,
        apex = ?apex.coords.as_slice(),
        barycenter = ?barycenter.coords.as_slice(),
        normal = ?normal.as_slice(),
        "pivot frame"
    );

    // Off-plane: the raw arccosine is the angle from the normal, the tangent
    // plane sits a right angle away from it.
    let mut offplane = QuantizedHistogram::new(options.quantizer);
    for &facet in mesh.facets() {
        for edge in enum_edges(facet).filter(|&(start, _)| start == pivot) {
            let direction = normalize(vertices[edge.1] - apex, "pivot edge")?;
            let angle = normal.dot(&direction).clamp(-1.0, 1.0).acos() - FRAC_PI_2;
            offplane.insert(angle, edge)?;
        }
    }

    let projector = Matrix3::identity() - normal * normal.transpose();
    let mut inplane = QuantizedHistogram::new(options.quantizer);
    for &facet in mesh.facets() {
        let rotated = rotate_to(facet, pivot).ok_or(ValidationError::PivotNotInFacet { facet, pivot })?;
        let [a, b, c] = rotated.map(|index| vertices[index].coords);
        let (ab, ac) = match options.strategy {
            InPlaneStrategy::Projected => (projector * (b - a), projector * (c - a)),
            InPlaneStrategy::Raw => (b - a, c - a),
        };
        let dot = normalize(ab, "in-plane edge")?.dot(&normalize(ac, "in-plane edge")?);
        if dot.is_nan() || dot <= 0.0 {
            return Err(ValidationError::NonPositiveDot {
                facet: rotated,
                dot,
            });
        }
        inplane.insert(dot.clamp(-1.0, 1.0).acos(), rotated)?;
    }

    tracing::debug!(
        pivot,
        offplane_classes = offplane.len(),
        inplane_classes = inplane.len(),
        "pivot analysis done"
    );
    Ok(PivotAnalysis {
        pivot,
        barycenter,
        normal,
        offplane,
        inplane,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::{PI, TAU};

    /// Hexagonal pyramid: apex 0 at height `h` above a unit hexagon on z = 0.
    /// Every other facet is authored with the pivot last.
    fn pyramid(h: Real) -> Mesh {
        let mut vertices = vec![Point3::new(0.0, 0.0, h)];
        for k in 0..6 {
            let theta = k as Real * TAU / 6.0;
            vertices.push(Point3::new(theta.cos(), theta.sin(), 0.0));
        }
        let facets = (0..6)
            .map(|k| {
                let (b, c) = (1 + k, 1 + (k + 1) % 6);
                if k % 2 == 0 { [0, b, c] } else { [b, c, 0] }
            })
            .collect();
        Mesh::new(vertices, facets).unwrap()
    }

    #[test]
    fn pyramid_has_one_class_each() {
        let analysis = pivot_analysis(&pyramid(1.0), 0, &PivotOptions::default()).unwrap();

        assert!((analysis.normal - Vector3::z()).norm() < 1e-12);
        assert_eq!(analysis.offplane.len(), 1);
        assert_eq!(analysis.offplane.item_count(), 6);
        let offplane = analysis.offplane.values().next().unwrap();
        assert!((offplane - PI / 4.0).abs() < 1e-3);

        assert_eq!(analysis.inplane.len(), 1);
        let inplane = analysis.inplane.values().next().unwrap();
        assert!((inplane - PI / 3.0).abs() < 1e-3);
        assert!((analysis.total_inplane_angle() - TAU).abs() < 1e-2);
    }

    #[test]
    fn inplane_facets_start_at_pivot() {
        let analysis = pivot_analysis(&pyramid(1.0), 0, &PivotOptions::default()).unwrap();
        for (_, facets) in analysis.inplane.iter() {
            for facet in facets {
                assert_eq!(facet[0], 0);
            }
        }
        assert!(analysis.inplane.iter().any(|(_, facets)| facets.contains(&[0, 2, 3])));
    }

    #[test]
    fn flat_fan_has_zero_offplane_angle() {
        // Flat hub; the extra vertex below it fixes the normal.
        let mut vertices = vec![Point3::new(0.0, 0.0, 0.0)];
        for k in 0..6 {
            let theta = k as Real * TAU / 6.0;
            vertices.push(Point3::new(theta.cos(), theta.sin(), 0.0));
        }
        vertices.push(Point3::new(0.0, 0.0, -6.0));
        let facets = (0..6).map(|k| [0, 1 + k, 1 + (k + 1) % 6]).collect();
        let mesh = Mesh::new(vertices, facets).unwrap();

        let analysis = pivot_analysis(&mesh, 0, &PivotOptions::default()).unwrap();
        assert_eq!(analysis.offplane.len(), 1);
        assert!(analysis.offplane.values().next().unwrap().abs() < 1e-3);
        assert!((analysis.total_inplane_angle() - TAU).abs() < 1e-2);
    }

    #[test]
    fn raw_strategy_undercounts_on_curved_hub() {
        let mesh = pyramid(1.0);
        let projected = pivot_analysis(&mesh, 0, &PivotOptions::default()).unwrap();
        let raw = pivot_analysis(
            &mesh,
            0,
            &PivotOptions {
                strategy: InPlaneStrategy::Raw,
                ..PivotOptions::default()
            },
        )
        .unwrap();
        // cos(angle) = 3/4 between the raw 3D directions.
        assert!((raw.inplane.values().next().unwrap() - (0.75 as Real).acos()).abs() < 1e-3);
        assert!(raw.total_inplane_angle() < projected.total_inplane_angle() - 0.5);
    }

    #[test]
    fn pivot_missing_from_facet_fails_first() {
        let mut vertices = pyramid(1.0).vertices().to_vec();
        vertices.push(Point3::new(9.0, 9.0, 9.0));
        let mesh = Mesh::new(vertices, vec![[0, 1, 2], [1, 2, 7]]).unwrap();
        assert_eq!(
            pivot_analysis(&mesh, 0, &PivotOptions::default()),
            Err(ValidationError::PivotNotInFacet {
                facet: [1, 2, 7],
                pivot: 0
            })
        );
    }

    #[test]
    fn pivot_out_of_range() {
        assert!(matches!(
            pivot_analysis(&pyramid(1.0), 7, &PivotOptions::default()),
            Err(ValidationError::PivotOutOfRange {
                pivot: 7,
                vertex_count: 7
            })
        ));
    }

    #[test]
    fn pivot_at_barycenter_has_no_normal() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
        ];
        let mesh = Mesh::new(vertices, vec![[0, 1, 2], [0, 3, 4]]).unwrap();
        assert_eq!(
            pivot_analysis(&mesh, 0, &PivotOptions::default()).unwrap_err(),
            ValidationError::ZeroLengthVector {
                context: "pivot normal"
            }
        );
    }

    #[test]
    fn non_finite_vertex_is_rejected() {
        for bad in [Real::INFINITY, Real::NAN] {
            let mut vertices = pyramid(1.0).vertices().to_vec();
            vertices[3] = Point3::new(bad, 0.0, 0.0);
            let mesh = Mesh::new(vertices, pyramid(1.0).facets().to_vec()).unwrap();
            assert_eq!(
                pivot_analysis(&mesh, 0, &PivotOptions::default()).unwrap_err(),
                ValidationError::NonFiniteVector {
                    context: "pivot normal"
                },
                "{bad}"
            );
        }
    }

    #[test]
    fn non_finite_direction_is_not_normalized() {
        let nan = Vector3::new(Real::NAN, 0.0, 0.0);
        assert_eq!(
            normalize(nan, "pivot edge"),
            Err(ValidationError::NonFiniteVector { context: "pivot edge" })
        );
        assert!(normalize(Vector3::new(0.0, Real::NEG_INFINITY, 1.0), "pivot edge").is_err());
        let unit = normalize(Vector3::new(0.0, 3.0, 4.0), "pivot edge").unwrap();
        assert!((unit - Vector3::new(0.0, 0.6, 0.8)).norm() < 1e-12);
    }

    #[test]
    fn duplicate_vertex_is_degenerate_edge() {
        let mut vertices = pyramid(1.0).vertices().to_vec();
        vertices[1] = vertices[0];
        let mesh = Mesh::new(vertices, vec![[0, 1, 2], [0, 3, 4]]).unwrap();
        assert!(matches!(
            pivot_analysis(&mesh, 0, &PivotOptions::default()),
            Err(ValidationError::ZeroLengthVector { .. })
        ));
    }

    #[test]
    fn reflex_facet_is_rejected() {
        // Rim vertices on opposite sides of the pivot give an obtuse facet.
        let vertices = vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.1, 0.0),
            Point3::new(-1.0, 0.1, 0.0),
            Point3::new(0.0, -1.0, 0.0),
        ];
        let mesh = Mesh::new(vertices, vec![[0, 1, 2], [0, 2, 3], [0, 3, 1]]).unwrap();
        assert!(matches!(
            pivot_analysis(&mesh, 0, &PivotOptions::default()),
            Err(ValidationError::NonPositiveDot { facet: [0, 1, 2], .. })
        ));
    }
}
