//! Tests for the ViewerSession workflow API.

use affine_math::Vector3;
use test_harness::assertions::{assert_counts, assert_matrix_eq, assert_scalar_eq, assert_vector_eq};
use test_harness::helpers::{temp_path, CUBE_OBJ, PYRAMID_OBJ};
use test_harness::{HarnessError, ViewerSession};

#[test]
fn load_cube_reports_counts_and_buffers() {
    let mut session = ViewerSession::new().unwrap();
    session.load_obj("wf-cube.obj", CUBE_OBJ).unwrap();

    assert_counts(&session.scene, 8, 12, 18, "cube").unwrap();

    let buffers = session.buffers().unwrap();
    assert_eq!(buffers.vertices.len(), 24, "3 floats per vertex");
    assert_eq!(buffers.edges.len(), 36, "2 indices per edge");
}

#[test]
fn load_pyramid_reports_counts() {
    let mut session = ViewerSession::new().unwrap();
    session.load_obj("wf-pyramid.obj", PYRAMID_OBJ).unwrap();

    assert_counts(&session.scene, 5, 5, 8, "pyramid").unwrap();
    assert_eq!(session.buffers().unwrap().edges.len(), 16);
}

#[test]
fn buffers_before_load_is_an_error() {
    let session = ViewerSession::new().unwrap();
    let result = session.buffers();
    assert!(matches!(result, Err(HarnessError::AssertionFailed { .. })));
}

#[test]
fn fresh_session_has_identity_transform() {
    let session = ViewerSession::new().unwrap();
    let mut identity = [0.0; 16];
    for i in 0..4 {
        identity[i * 4 + i] = 1.0;
    }
    assert_matrix_eq(session.scene.transform().matrix(), &identity, 1e-12, "fresh transform")
        .unwrap();
}

#[test]
fn transform_pipeline_updates_translation_and_mvp() {
    let mut session = ViewerSession::new().unwrap();
    session.load_obj("wf-pipeline.obj", CUBE_OBJ).unwrap();

    session.translate(1.0, -2.0, 0.5).unwrap();
    session.rotate(90.0, Vector3::Z).unwrap();

    let translation = session.scene.current_translation().unwrap();
    assert_vector_eq(translation, Vector3::new(1.0, -2.0, 0.5), 1e-12, "translation").unwrap();

    // Orthographic projection keeps the homogeneous row affine.
    let gl = session.mvp_gl().unwrap();
    assert!((gl[15] - 1.0).abs() < 1e-6);
}

#[test]
fn persistence_round_trip_restores_session() {
    let mut original = ViewerSession::new().unwrap();
    original.load_obj("wf-roundtrip.obj", CUBE_OBJ).unwrap();
    original.translate(0.5, -1.0, 2.0).unwrap();
    original.switch_projection();
    original.display.line_width = 2.5;
    original.mvp().unwrap();

    let save_path = temp_path("wf-roundtrip.json");
    original.save_to(&save_path, "Round Trip").unwrap();

    let mut restored = ViewerSession::new().unwrap();
    restored.restore_from(&save_path).unwrap();

    assert!(restored.scene.is_perspective());
    assert_counts(&restored.scene, 8, 12, 18, "restored counts").unwrap();
    assert_eq!(restored.display.line_width, 2.5);
    assert_eq!(restored.buffers().unwrap().vertices.len(), 24);

    let translation = restored.scene.current_translation().unwrap();
    assert_vector_eq(translation, Vector3::new(0.5, -1.0, 2.0), 1e-12, "restored translation")
        .unwrap();

    let saved_far = original.scene.projection().far();
    assert_scalar_eq(restored.scene.projection().far(), saved_far, 1e-12, "restored far").unwrap();

    // Recomputing after the reload lands on the same derived far plane.
    restored.mvp().unwrap();
    assert_scalar_eq(restored.scene.projection().far(), saved_far, 1e-9, "recomputed far").unwrap();
}

#[test]
fn restore_from_missing_file_is_an_error() {
    let mut session = ViewerSession::new().unwrap();
    let result = session.restore_from(&temp_path("wf-missing.json"));
    assert!(matches!(result, Err(HarnessError::Format(_))));
}
