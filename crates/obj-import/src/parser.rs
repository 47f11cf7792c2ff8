use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, instrument, warn};

use affine_math::Vector3;

use crate::errors::{ParseFatal, ParseWarning};
use crate::mesh::MeshData;

/// Everything a parse produced: the mesh plus the defects skipped over
/// while building it.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub mesh: MeshData,
    pub warnings: Vec<ParseWarning>,
}

/// Reads and parses an OBJ file from disk.
///
/// A file that cannot be opened yields [`ParseWarning::FileNotFound`] and
/// an empty mesh rather than an error, so callers report it through the
/// same channel as other recoverable defects.
#[instrument]
pub fn load(path: &Path) -> Result<LoadOutcome, ParseFatal> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            let warning = ParseWarning::FileNotFound {
                path: path.display().to_string(),
            };
            warn!(%warning, "could not open model file");
            return Ok(LoadOutcome {
                mesh: MeshData::default(),
                warnings: vec![warning],
            });
        }
    };
    let outcome = parse(BufReader::new(file))?;
    info!(
        vertices = outcome.mesh.vertices.len(),
        faces = outcome.mesh.faces.len(),
        edges = outcome.mesh.edges.len(),
        warnings = outcome.warnings.len(),
        "model file parsed"
    );
    Ok(outcome)
}

/// Parses OBJ text from any buffered reader.
///
/// Lines are classified by their first two characters: `"v "` for vertex
/// positions, `"f "` for faces, anything else is ignored. No trimming is
/// applied, so an indented `  v` line does not count as a vertex.
#[instrument(skip(reader))]
pub fn parse<R: BufRead>(reader: R) -> Result<LoadOutcome, ParseFatal> {
    let mut state = ParseState::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ParseFatal::Io {
            reason: e.to_string(),
        })?;
        state.handle_line(index + 1, &line)?;
    }
    Ok(LoadOutcome {
        mesh: state.mesh,
        warnings: state.warnings,
    })
}

#[derive(Default)]
struct ParseState {
    mesh: MeshData,
    warnings: Vec<ParseWarning>,
    seen_edges: HashSet<(u32, u32)>,
}

impl ParseState {
    fn handle_line(&mut self, number: usize, line: &str) -> Result<(), ParseFatal> {
        if line.starts_with("v ") {
            self.handle_vertex(number, line);
        } else if line.starts_with("f ") {
            self.handle_face(number, line)?;
        }
        Ok(())
    }

    /// One `v` line: exactly 3 numeric coordinates or the line is skipped.
    fn handle_vertex(&mut self, number: usize, line: &str) {
        let mut coords = [0.0f64; 3];
        let mut count = 0;
        for token in line[2..].split_whitespace() {
            let value: f64 = match token.parse() {
                Ok(value) => value,
                Err(_) => {
                    self.push_warning(ParseWarning::InvalidVertexData { line: number });
                    return;
                }
            };
            if count < 3 {
                coords[count] = value;
            }
            count += 1;
        }
        if count != 3 {
            self.push_warning(ParseWarning::WrongCoordinateCount {
                line: number,
                count,
            });
            return;
        }
        self.mesh
            .vertices
            .push(Vector3::new(coords[0], coords[1], coords[2]));
    }

    /// One `f` line. Each token contributes its leading vertex index
    /// (`7/2/3` reads as `7`). Indices are 1-based in the file; negative
    /// values count back from the last loaded vertex. A corrected index
    /// outside the loaded range aborts the load.
    fn handle_face(&mut self, number: usize, line: &str) -> Result<(), ParseFatal> {
        let vertex_count = self.mesh.vertices.len();
        let mut indices: Vec<u32> = Vec::with_capacity(6);
        for token in line[2..].split_whitespace() {
            let lead = token.split_once('/').map_or(token, |(head, _)| head);
            let raw: i64 = match lead.parse() {
                Ok(value) => value,
                Err(_) => {
                    self.push_warning(ParseWarning::InvalidFaceData { line: number });
                    continue;
                }
            };
            if raw == 0 {
                self.push_warning(ParseWarning::ZeroIndex { line: number });
                continue;
            }
            let corrected = if raw >= 1 {
                raw - 1
            } else {
                vertex_count as i64 + raw
            };
            if corrected < 0 || corrected > vertex_count as i64 {
                return Err(ParseFatal::IndexOutOfRange {
                    line: number,
                    index: raw,
                    vertex_count,
                });
            }
            indices.push(corrected as u32);
        }

        if indices.len() < 3 {
            self.push_warning(ParseWarning::FaceTooShort {
                line: number,
                count: indices.len(),
            });
            return Ok(());
        }
        // Faces that reference the same vertex twice are dropped without a
        // warning, matching the tolerant handling of common exporter junk.
        if has_duplicate_indices(&indices) {
            return Ok(());
        }
        self.count_edges(&indices);
        self.mesh.faces.push(indices);
        Ok(())
    }

    /// Registers the consecutive and wrap-around vertex pairs of a face,
    /// keyed `(low, high)` so shared edges between faces collapse. First
    /// appearance fixes the position in the edge list.
    fn count_edges(&mut self, indices: &[u32]) {
        for i in 0..indices.len() {
            let first = indices[i];
            let second = indices[(i + 1) % indices.len()];
            let edge = (first.min(second), first.max(second));
            if self.seen_edges.insert(edge) {
                self.mesh.edges.push(edge);
            }
        }
    }

    fn push_warning(&mut self, warning: ParseWarning) {
        warn!(%warning, "skipping malformed input");
        self.warnings.push(warning);
    }
}

fn has_duplicate_indices(indices: &[u32]) -> bool {
    let unique: HashSet<u32> = indices.iter().copied().collect();
    unique.len() != indices.len()
}
