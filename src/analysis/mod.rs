//! Analyses run over a loaded [`Mesh`], and the one-call [`analyze`] entry
//! point that loads a file and runs them.

use crate::errors::Error;
use crate::io::load_obj;
use crate::mesh::Mesh;
use crate::quantize::Quantizer;
use std::path::{Path, PathBuf};

pub mod classify;
pub mod expect;
pub mod parts;
pub mod pivot;

pub use classify::{DegreeHistogram, LengthHistogram, MeshSummary, degree_histogram, length_histogram};
pub use expect::{AngleExpectation, check_total};
pub use parts::{HubCounts, PartListing};
pub use pivot::{InPlaneStrategy, PivotAnalysis, PivotOptions, pivot_analysis};

/// What [`analyze`] computes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyzeOptions {
    pub quantizer: Quantizer,
    /// Also run a pivot analysis around this vertex.
    pub pivot: Option<usize>,
    pub strategy: InPlaneStrategy,
}

impl AnalyzeOptions {
    pub const fn pivot_options(&self) -> PivotOptions {
        PivotOptions {
            quantizer: self.quantizer,
            strategy: self.strategy,
        }
    }
}

/// Everything known about one mesh file.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub path: PathBuf,
    pub summary: MeshSummary,
    pub pivot: Option<PivotAnalysis>,
}

impl Report {
    /// Run the analyses selected by `options` on an already loaded mesh.
    pub fn from_mesh(path: PathBuf, mesh: &Mesh, options: &AnalyzeOptions) -> Result<Self, Error> {
        let summary = MeshSummary::new(mesh, &options.quantizer)?;
        let pivot = options
            .pivot
            .map(|pivot| pivot_analysis(mesh, pivot, &options.pivot_options()))
            .transpose()?;
        Ok(Report {
            path,
            summary,
            pivot,
        })
    }
}

/// Load `path` and analyse it.
pub fn analyze(path: impl AsRef<Path>, options: &AnalyzeOptions) -> Result<Report, Error> {
    let path = path.as_ref();
    let mesh = load_obj(path)?;
    Report::from_mesh(path.to_path_buf(), &mesh, options)
}
