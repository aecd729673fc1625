//! Mesh file input.

pub mod obj;

pub use obj::{load_obj, parse_obj};

/// Generic I/O and parsing errors raised while loading a mesh.
///
/// The loader is strict: the first bad line aborts the load and is reported
/// with its 1-based line number.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),
    #[error("Could not parse float: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
    #[error("Could not parse index: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Input is malformed at line {line}: \"{text}\"")]
    MalformedInput { line: usize, text: String },
    #[error("Facet index {index} at line {line} is out of range (1..={vertex_count})")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        vertex_count: usize,
    },
}
