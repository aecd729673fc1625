//! Plain text rendering of analysis results.
//!
//! Console summaries follow the `** <count> with <property>` layout, part
//! listings come in two table flavours: a fixed-width one pasted into the
//! CAD drawing, and a markdown one for the readme.

use crate::analysis::{MeshSummary, PartListing, PivotAnalysis};
use crate::float_types::to_degrees;

/// Layout of a part listing table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableStyle {
    /// Fixed-width, `=` underlined header.
    #[default]
    Cad,
    /// Markdown with right aligned counts.
    Readme,
}

/// Degree and edge-length breakdown of a mesh.
pub fn render_summary(summary: &MeshSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} vertices\n", summary.vertex_count));
    for (degree, vertices) in &summary.degrees {
        out.push_str(&format!("** {} with degree {degree}\n", vertices.len()));
    }
    out.push_str(&format!("{} facets\n", summary.facet_count));
    out.push_str(&format!(
        "{} edges ({})\n",
        summary.lengths.item_count(),
        if summary.closed { "closed" } else { "open" }
    ));
    for (length, edges) in summary.lengths.iter() {
        out.push_str(&format!("** {} with length {length:0.4}m\n", edges.len()));
    }
    out
}

/// Angle classes around a pivot, in degrees.
pub fn render_pivot(analysis: &PivotAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} off-plane angles\n", analysis.offplane.len()));
    for (angle, edges) in analysis.offplane.iter() {
        out.push_str(&format!("** {:.2}° x{}\n", to_degrees(angle), edges.len()));
    }
    out.push_str(&format!("{} in-plane angles\n", analysis.inplane.len()));
    for (angle, facets) in analysis.inplane.iter() {
        out.push_str(&format!("** {:.2}° x{}\n", to_degrees(angle), facets.len()));
    }
    out.push_str(&format!(
        "total_around_pivot {:.2}°\n",
        to_degrees(analysis.total_inplane_angle())
    ));
    out
}

/// Hub and strut counts of several meshes, one row per `(name, listing)`.
pub fn render_parts(rows: &[(String, PartListing)], style: TableStyle) -> String {
    let mut out = String::new();
    match style {
        TableStyle::Cad => {
            let header = format!("{:6} | Hex | Pen |   o |  oo |", "");
            out.push_str(&format!("{header}\n{}\n", "=".repeat(header.chars().count())));
            for (name, listing) in rows {
                out.push_str(&format!(
                    "{name:>6} | {:3} | {:3} | {:3} | {:3} |\n",
                    listing.hubs.hexagons,
                    listing.hubs.pentagons,
                    listing.long_struts,
                    listing.short_struts
                ));
            }
        },
        TableStyle::Readme => {
            out.push_str(&format!("| {:6} | Hex | Pen | A   | B   |\n", ""));
            out.push_str("|:-------|----:|----:|----:|----:|\n");
            for (name, listing) in rows {
                out.push_str(&format!(
                    "| {name:<6} | {:3} | {:3} | {:3} | {:3} |\n",
                    listing.hubs.hexagons,
                    listing.hubs.pentagons,
                    listing.long_struts,
                    listing.short_struts
                ));
            }
        },
    }
    out
}
