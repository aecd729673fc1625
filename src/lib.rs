//! Geometric invariant checks for triangulated **geodesic dome** meshes.
//!
//! A CAD export of a dome (or of a single hub cap) is loaded from a small
//! Wavefront OBJ subset and summarised:
//!
//! - vertex degree histogram and edge-length classes of the whole mesh
//!   ([`analysis::classify`]),
//! - off-plane and in-plane angle classes around a hub vertex
//!   ([`analysis::pivot`]),
//! - hub and strut counts for the parts list ([`analysis::parts`]).
//!
//! ```no_run
//! use geodome::analysis::{AnalyzeOptions, analyze};
//!
//! let options = AnalyzeOptions { pivot: Some(0), ..AnalyzeOptions::default() };
//! let report = analyze("meshes/dome_pentagon.obj", &options)?;
//! println!("{}", geodome::report::render_summary(&report.summary));
//! # Ok::<(), geodome::errors::Error>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod analysis;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod quantize;
pub mod report;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use analysis::{AnalyzeOptions, Report, analyze};
pub use mesh::Mesh;
