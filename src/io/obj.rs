//! Strict reader for the small Wavefront OBJ subset exported by the dome CAD
//! model.
//!
//! Recognised lines:
//!
//! | Prefix | Meaning |
//! |--------|---------|
//! | `#`, `o`, `vt`, `s` | metadata, ignored |
//! | `v x y z` | vertex, three decimals such as `-1.250000` |
//! | `f a/t b/t c/t` | facet, only the first index of each pair is used |
//! | `f a b c` | facet with bare indices |
//!
//! Blank lines are skipped. Anything else aborts the load with
//! [`IoError::MalformedInput`]. Matching is anchored at the start of the line
//! only, trailing text after the recognised fields is tolerated.

use crate::float_types::Real;
use crate::io::IoError;
use crate::mesh::{Facet, Mesh};
use nalgebra::Point3;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, space1},
    combinator::{map, opt, recognize, value},
    sequence::{pair, preceded, separated_pair, terminated, tuple},
};
use std::path::Path;

/// A single classified line, still holding the raw numeric fields.
#[derive(Debug, Clone, PartialEq)]
enum Line<'a> {
    Ignored,
    Vertex([&'a str; 3]),
    Facet([&'a str; 3]),
}

/// `-?\d+\.\d+`
fn decimal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((opt(char('-')), digit1, char('.'), digit1)))(input)
}

/// `\d+/\d+`, keeping the vertex index
fn index_pair(input: &str) -> IResult<&str, &str> {
    map(separated_pair(digit1, char('/'), digit1), |(index, _)| index)(input)
}

/// Three whitespace separated fields produced by `field`.
fn triple<'a, F>(field: F) -> impl FnMut(&'a str) -> IResult<&'a str, [&'a str; 3]>
where
    F: FnMut(&'a str) -> IResult<&'a str, &'a str> + Copy,
{
    map(
        tuple((terminated(field, space1), terminated(field, space1), field)),
        |(a, b, c)| [a, b, c],
    )
}

fn comment(input: &str) -> IResult<&str, Line<'_>> {
    value(
        Line::Ignored,
        alt((tag("#"), tag("o"), tag("vt"), tag("s"))),
    )(input)
}

fn vertex(input: &str) -> IResult<&str, Line<'_>> {
    map(preceded(pair(char('v'), space1), triple(decimal)), Line::Vertex)(input)
}

fn facet(input: &str) -> IResult<&str, Line<'_>> {
    map(
        preceded(
            pair(char('f'), space1),
            alt((triple(index_pair), triple(digit1))),
        ),
        Line::Facet,
    )(input)
}

/// Classify one line, `None` when it matches no known pattern.
fn classify(line: &str) -> Option<Line<'_>> {
    if line.trim().is_empty() {
        return Some(Line::Ignored);
    }
    alt((comment, vertex, facet))(line)
        .ok()
        .map(|(_, parsed)| parsed)
}

/// Parse OBJ text into a [`Mesh`].
///
/// Facet indices are 1-based in the text and 0-based in the result. They are
/// checked against the final vertex count, so facets may precede the
/// vertices they reference.
///
/// ```
/// let mesh = geodome::io::parse_obj("v 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 1.0 0.0\nf 1 2 3\n").unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.facets(), &[[0, 1, 2]]);
/// ```
pub fn parse_obj(text: &str) -> Result<Mesh, IoError> {
    let mut vertices = Vec::new();
    let mut raw_facets: Vec<(usize, [&str; 3])> = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let line_number = number + 1;
        match classify(line) {
            Some(Line::Ignored) => {},
            Some(Line::Vertex([x, y, z])) => {
                let vertex = Point3::new(x.parse::<Real>()?, y.parse::<Real>()?, z.parse::<Real>()?);
                // Long enough digit strings overflow to infinity.
                if !vertex.coords.iter().all(|c| c.is_finite()) {
                    tracing::error!(line = line_number, text = line, "non-finite OBJ vertex");
                    return Err(IoError::MalformedInput {
                        line: line_number,
                        text: line.to_string(),
                    });
                }
                vertices.push(vertex);
            },
            Some(Line::Facet(fields)) => raw_facets.push((line_number, fields)),
            None => {
                tracing::error!(line = line_number, text = line, "unrecognised OBJ line");
                return Err(IoError::MalformedInput {
                    line: line_number,
                    text: line.to_string(),
                });
            },
        }
    }

    let vertex_count = vertices.len();
    let mut facets: Vec<Facet> = Vec::with_capacity(raw_facets.len());
    for (line, fields) in raw_facets {
        let mut facet = [0; 3];
        for (slot, field) in facet.iter_mut().zip(fields) {
            let index: usize = field.parse()?;
            if index == 0 || index > vertex_count {
                return Err(IoError::IndexOutOfRange {
                    line,
                    index,
                    vertex_count,
                });
            }
            *slot = index - 1;
        }
        facets.push(facet);
    }

    tracing::debug!(
        vertices = vertex_count,
        facets = facets.len(),
        "parsed OBJ mesh"
    );
    Ok(Mesh::from_checked(vertices, facets))
}

/// Read and parse an OBJ file from disk.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, IoError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading OBJ mesh");
    let text = std::fs::read_to_string(path)?;
    parse_obj(&text)
}
