use glam::{Mat4, Quat, Vec3, Vec4};
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_identity_pose() {
    let pose = Pose::IDENTITY;
    assert_eq!(pose.position(), Vec3::ZERO);
    assert_eq!(pose.orientation(), Quat::IDENTITY);
    assert_eq!(pose.to_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_default_is_identity() {
    assert_eq!(Pose::default(), Pose::IDENTITY);
}

#[test]
fn test_from_translation() {
    let pose = Pose::from_translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(pose.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(pose.orientation(), Quat::IDENTITY);
}

// ============================================================================
// to_matrix
// ============================================================================

#[test]
fn test_to_matrix_translation_column() {
    let pose = Pose::from_translation(Vec3::new(0.5, -1.0, 2.0));
    let m = pose.to_matrix();

    // Column-major: translation lives in the w axis column
    assert_eq!(m.w_axis, Vec4::new(0.5, -1.0, 2.0, 1.0));
}

#[test]
fn test_to_matrix_rotation() {
    let rot = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    let pose = Pose::new(Vec3::ZERO, rot);
    let m = pose.to_matrix();

    // +X rotated 90 degrees around Y lands on -Z
    let v = m.transform_point3(Vec3::X);
    assert!((v - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
}

#[test]
fn test_to_matrix_matches_glam_composition() {
    let rot = Quat::from_rotation_x(0.3);
    let pos = Vec3::new(4.0, 5.0, 6.0);
    let pose = Pose::new(pos, rot);

    let expected = Mat4::from_rotation_translation(rot, pos);
    assert_eq!(pose.to_matrix(), expected);
}

// ============================================================================
// to_view_matrix
// ============================================================================

#[test]
fn test_view_matrix_is_inverse() {
    let pose = Pose::new(
        Vec3::new(1.0, 2.0, 3.0),
        Quat::from_rotation_y(0.7),
    );

    let combined = pose.to_matrix() * pose.to_view_matrix();
    for (a, b) in combined
        .to_cols_array()
        .iter()
        .zip(Mat4::IDENTITY.to_cols_array().iter())
    {
        assert!((a - b).abs() < 1e-5);
    }
}
