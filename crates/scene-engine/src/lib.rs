//! Viewer engine: model storage, camera and projection state, the model
//! transform, and the MVP pipeline feeding the wireframe renderer.

pub mod animation;
pub mod camera;
pub mod error;
pub mod model;
pub mod projection;
pub mod scene;

pub use animation::{lerp, AnimationProgress};
pub use camera::Camera;
pub use error::SceneError;
pub use model::Model;
pub use projection::Projection;
pub use scene::{GlModelData, Scene, SceneState};
