//! Triangle mesh loading from Wavefront OBJ text.
//!
//! Only a small subset of OBJ is understood:
//!
//! ```text
//! v x y z            # vertex position (a trailing w is ignored)
//! f a b c            # triangle, 1-based indices
//! f a b c d          # quad, split into two triangles
//! f a/t/n b/t/n ...  # texture/normal references after '/' are discarded
//! ```
//!
//! Every other record (`vt`, `vn`, `o`, `g`, `#` comments, blank lines) is
//! skipped. Parsing is strict: the first malformed number or index aborts
//! the whole load with the offending line number.
//!
//! After parsing, vertices are centered on their centroid, scaled by
//! [`LoadOptions::scale`] and turned by [`LoadOptions::orientation`].
//!
//! Quads are fan-triangulated from their first corner, `(0,1,2)` and
//! `(0,2,3)`. Non-planar or concave quads come out wrong; nothing smarter is
//! attempted.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::math::vec3::Vec3;
use crate::transform::{self, Orientation};

/// Scale applied to centered vertices so typical models fill the viewport.
pub const DEFAULT_NORMALIZE_SCALE: f32 = 30.0;

// This struct represents a triangle defined by three vertices.
// The members a, b, and c are zero-based indices into the vertex array
// of the mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }

    /// A face that repeats a corner has zero area.
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b || self.b == self.c || self.a == self.c
    }
}

/// Why a single OBJ line was rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("vertex needs 3 coordinates, found {0}")]
    MissingCoordinate(usize),
    #[error("invalid coordinate `{0}`")]
    InvalidCoordinate(String),
    #[error("invalid face index `{0}`")]
    InvalidIndex(String),
    #[error("face has {0} corners, expected 3 or 4")]
    UnsupportedCornerCount(usize),
    #[error("face index {index} is out of range for {count} vertices")]
    IndexOutOfRange { index: i64, count: usize },
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// Errors that can occur while loading a mesh. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not open {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read mesh data: {0}")]
    Read(#[from] io::Error),
    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    #[error("mesh has no vertices")]
    EmptyMesh,
}

impl LoadError {
    fn parse(line: usize, kind: ParseErrorKind) -> Self {
        LoadError::Parse { line, kind }
    }
}

/// Normalization applied while loading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadOptions {
    /// Multiplier applied after centering.
    pub scale: f32,
    /// Static orientation applied after scaling.
    pub orientation: Orientation,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_NORMALIZE_SCALE,
            orientation: Orientation::default(),
        }
    }
}

/// A face record as written in the file, before index translation.
enum RawFace {
    Triangle([i64; 3]),
    Quad([i64; 4]),
}

/// Normalized vertex positions plus zero-based triangle faces.
///
/// Immutable once loaded; per-frame rotation works on a
/// [`VertexBuffer`](crate::buffer::VertexBuffer) expanded from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    centroid: Vec3,
}

impl Mesh {
    /// Load and normalize a mesh from an OBJ file.
    pub fn from_obj(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let mesh = Self::parse_obj(BufReader::new(file), options)?;
        tracing::info!(
            path = %path.display(),
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            centroid = ?mesh.centroid,
            "mesh loaded"
        );
        Ok(mesh)
    }

    /// Parse and normalize OBJ text from any buffered reader.
    pub fn parse_obj<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Self, LoadError> {
        let mut raw_vertices = Vec::new();
        let mut raw_faces = Vec::new();
        let mut skipped = 0usize;

        // Bytes, not `lines()`, so invalid UTF-8 carries a line number.
        for (number, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let line_number = number + 1;
            let line = std::str::from_utf8(&bytes)
                .map_err(|_| LoadError::parse(line_number, ParseErrorKind::InvalidUtf8))?;
            // `split_whitespace` also drops a trailing `\r`.
            let mut tokens = line.split_whitespace();

            match tokens.next() {
                Some("v") => {
                    let vertex =
                        parse_vertex(tokens).map_err(|k| LoadError::parse(line_number, k))?;
                    raw_vertices.push(vertex);
                }
                Some("f") => {
                    let face = parse_face(tokens).map_err(|k| LoadError::parse(line_number, k))?;
                    raw_faces.push((line_number, face));
                }
                Some(_) => skipped += 1,
                None => {}
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, "ignored unsupported OBJ records");
        }

        if raw_vertices.is_empty() {
            return Err(LoadError::EmptyMesh);
        }

        let centroid = centroid(&raw_vertices);
        let mut vertices: Vec<Vec3> = raw_vertices
            .iter()
            .map(|&v| (v - centroid) * options.scale)
            .collect();
        if !options.orientation.is_identity() {
            transform::apply(&mut vertices, options.orientation.to_matrix());
        }

        let faces = materialize_faces(&raw_faces, vertices.len())?;

        Ok(Self {
            vertices,
            faces,
            centroid,
        })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Mean of the raw vertex positions, before normalization.
    pub fn centroid(&self) -> Vec3 {
        self.centroid
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Vec3, ParseErrorKind> {
    let mut coords = [0.0f32; 3];
    for (found, coord) in coords.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or(ParseErrorKind::MissingCoordinate(found))?;
        *coord = parse_coordinate(token)?;
    }
    Ok(Vec3::new(coords[0], coords[1], coords[2]))
}

fn parse_coordinate(token: &str) -> Result<f32, ParseErrorKind> {
    match token.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseErrorKind::InvalidCoordinate(token.to_string())),
    }
}

fn parse_face<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<RawFace, ParseErrorKind> {
    let corners = tokens.map(parse_index).collect::<Result<Vec<_>, _>>()?;
    match corners[..] {
        [a, b, c] => Ok(RawFace::Triangle([a, b, c])),
        [a, b, c, d] => Ok(RawFace::Quad([a, b, c, d])),
        _ => Err(ParseErrorKind::UnsupportedCornerCount(corners.len())),
    }
}

/// Parses the vertex reference of a face corner, dropping any `/texture/normal` suffix.
fn parse_index(token: &str) -> Result<i64, ParseErrorKind> {
    let vertex = token.split('/').next().unwrap_or(token);
    vertex
        .parse::<i64>()
        .map_err(|_| ParseErrorKind::InvalidIndex(token.to_string()))
}

fn centroid(vertices: &[Vec3]) -> Vec3 {
    let (mut x, mut y, mut z) = (0.0f64, 0.0f64, 0.0f64);
    for v in vertices {
        x += v.x as f64;
        y += v.y as f64;
        z += v.z as f64;
    }
    let n = vertices.len() as f64;
    Vec3::new((x / n) as f32, (y / n) as f32, (z / n) as f32)
}

fn materialize_faces(raw_faces: &[(usize, RawFace)], count: usize) -> Result<Vec<Face>, LoadError> {
    let to_zero_based = |line: usize, index: i64| -> Result<u32, LoadError> {
        if index < 1 || index as u64 > count as u64 {
            return Err(LoadError::parse(
                line,
                ParseErrorKind::IndexOutOfRange { index, count },
            ));
        }
        Ok((index - 1) as u32)
    };

    let mut faces = Vec::with_capacity(raw_faces.len() * 2);
    let mut quads = 0usize;
    for (line, raw) in raw_faces {
        let line = *line;
        match raw {
            RawFace::Triangle(corners) => {
                let [a, b, c] = corners.map(|i| to_zero_based(line, i));
                faces.push(Face::new(a?, b?, c?));
            }
            RawFace::Quad(corners) => {
                let [a, b, c, d] = corners.map(|i| to_zero_based(line, i));
                let (a, b, c, d) = (a?, b?, c?, d?);
                faces.push(Face::new(a, b, c));
                faces.push(Face::new(a, c, d));
                quads += 1;
            }
        }
    }

    let degenerate = faces.iter().filter(|f| f.is_degenerate()).count();
    if degenerate > 0 {
        tracing::warn!(degenerate, "mesh contains zero-area faces");
    }
    if quads > 0 {
        tracing::debug!(quads, "split quads into triangle pairs");
    }
    Ok(faces)
}
