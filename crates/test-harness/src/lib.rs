//! Test harness for scripted wireframe-viewer workflows.
//!
//! Provides programmatic tools for driving multi-step viewer sessions,
//! verifying matrices and buffers at every step, and round-tripping
//! saved viewing state.
//!
//! # Key Components
//!
//! - [`ViewerSession`] — Scripted load/transform/save/restore workflows
//! - [`helpers`] — OBJ fixtures and temp-file management
//! - [`assertions`] — Rich assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod workflow;

pub use helpers::HarnessError;
pub use workflow::ViewerSession;
