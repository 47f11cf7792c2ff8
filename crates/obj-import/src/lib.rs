//! Streaming parser for the Wavefront OBJ subset the viewer renders:
//! `v` position lines and `f` face lines. Everything else is ignored.
//!
//! Recoverable defects (a malformed coordinate, a face with too few
//! vertices) are collected as [`ParseWarning`] values while parsing
//! continues with the offending line or token skipped. Only a face index
//! that lands outside the loaded vertex range aborts the whole load, since
//! the mesh could never be drawn consistently after that.

pub mod errors;
pub mod mesh;
pub mod parser;

pub use errors::{ParseFatal, ParseWarning};
pub use mesh::MeshData;
pub use parser::{load, parse, LoadOutcome};
