use std::f32::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;
use lantern_math::{DegenerateTransform, Mat4, SpanAxis, Vec3, Vec4};

const EPSILON: f32 = 1e-5;

fn assert_mat_eq(a: &Mat4, b: &Mat4, epsilon: f32) {
    for (i, (x, y)) in a.data().iter().zip(b.data().iter()).enumerate() {
        assert!(
            (x - y).abs() <= epsilon,
            "element {} differs: {} vs {}\n{:?}\n{:?}",
            i,
            x,
            y,
            a,
            b
        );
    }
}

fn assert_vec_eq(a: Vec4, b: Vec4, epsilon: f32) {
    for i in 0..4 {
        assert_abs_diff_eq!(a[i], b[i], epsilon = epsilon);
    }
}

fn sample_matrix() -> Mat4 {
    Mat4::translate(1.0, -2.0, 3.0) * Mat4::rotate(0.7, 1.0, 2.0, 3.0) * Mat4::scale(2.0, 3.0, 4.0)
}

fn det3(m: &Mat4) -> f32 {
    let c0 = Vec3::new(m.get(0, 0), m.get(1, 0), m.get(2, 0));
    let c1 = Vec3::new(m.get(0, 1), m.get(1, 1), m.get(2, 1));
    let c2 = Vec3::new(m.get(0, 2), m.get(1, 2), m.get(2, 2));
    c0.dot(c1.cross(c2))
}

#[test]
fn test_identity_law() {
    let m = sample_matrix();
    assert_mat_eq(&(m * Mat4::identity()), &m, EPSILON);
    assert_mat_eq(&(Mat4::identity() * m), &m, EPSILON);
}

#[test]
fn test_translation_composition() {
    let composed = Mat4::translate(1.0, 2.0, 3.0) * Mat4::translate(-4.0, 0.5, 6.0);
    assert_mat_eq(&composed, &Mat4::translate(-3.0, 2.5, 9.0), EPSILON);
}

#[test]
fn test_scale_composition() {
    let composed = Mat4::scale(2.0, 3.0, 4.0) * Mat4::scale(0.5, -1.0, 2.5);
    assert_mat_eq(&composed, &Mat4::scale(1.0, -3.0, 10.0), EPSILON);
}

#[test]
fn test_rotation_orthonormal() {
    let cases = [
        (0.3, 1.0, 0.0, 0.0),
        (FRAC_PI_2, 0.0, 1.0, 0.0),
        (PI, 0.0, 0.0, 1.0),
        (1.234, 1.0, 2.0, 3.0),
        (-2.5, -0.3, 0.8, 0.1),
    ];
    for &(angle, x, y, z) in cases.iter() {
        let rot = Mat4::rotate(angle, x, y, z);
        for a in 0..3 {
            let ca = Vec3::new(rot.get(0, a), rot.get(1, a), rot.get(2, a));
            assert_abs_diff_eq!(ca.length(), 1.0, epsilon = EPSILON);
            for b in (a + 1)..3 {
                let cb = Vec3::new(rot.get(0, b), rot.get(1, b), rot.get(2, b));
                assert_abs_diff_eq!(ca.dot(cb), 0.0, epsilon = EPSILON);
            }
        }
        assert_abs_diff_eq!(det3(&rot), 1.0, epsilon = EPSILON);
        assert_vec_eq(rot.column(3), Vec4([0.0, 0.0, 0.0, 1.0]), 0.0);
    }
}

#[test]
fn test_rotation_direction() {
    let rot = Mat4::rotate(FRAC_PI_2, 0.0, 0.0, 1.0);
    let rotated = rot * Vec4::from_xyz(1.0, 0.0, 0.0);
    assert_vec_eq(rotated, Vec4::from_xyz(0.0, 1.0, 0.0), EPSILON);

    let rot = Mat4::rotate(PI, 1.0, 0.0, 0.0);
    let rotated = rot * Vec4::from_xyz(1.0, 1.0, 1.0);
    assert_vec_eq(rotated, Vec4::from_xyz(1.0, -1.0, -1.0), EPSILON);
}

#[test]
fn test_rotation_axis_is_normalized() {
    assert_mat_eq(
        &Mat4::rotate(0.9, 0.0, 0.0, 2.0),
        &Mat4::rotate(0.9, 0.0, 0.0, 1.0),
        EPSILON,
    );
}

#[test]
fn test_rotation_zero_axis() {
    for &angle in [0.0, 0.5, PI, -7.0].iter() {
        assert_eq!(Mat4::rotate(angle, 0.0, 0.0, 0.0), Mat4::identity());
        assert_eq!(
            Mat4::try_rotate(angle, 0.0, 0.0, 0.0),
            Err(DegenerateTransform::ZeroAxis)
        );
    }
}

#[test]
fn test_translate_scale_scenario() {
    let mat = Mat4::translate(1.0, 2.0, 3.0) * Mat4::scale(2.0, 2.0, 2.0);
    let out = mat * Vec4([1.0, 0.0, 0.0, 1.0]);
    assert_vec_eq(out, Vec4([3.0, 2.0, 3.0, 1.0]), EPSILON);
}

#[test]
fn test_translate_round_trip() {
    let point = Vec4::from_xyz(0.25, -4.0, 9.5);
    let there = Mat4::translate(3.0, -1.5, 7.0) * point;
    let back = Mat4::translate(-3.0, 1.5, -7.0) * there;
    assert_vec_eq(back, point, EPSILON);
}

#[test]
fn test_direction_ignores_translation() {
    let dir = Vec4::direction(0.0, 1.0, 0.0);
    let out = Mat4::translate(10.0, 20.0, 30.0) * dir;
    assert_vec_eq(out, dir, 0.0);
}

#[test]
fn test_lookat_down_negative_z() {
    let view = Mat4::lookat(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert_mat_eq(&view, &Mat4::translate(0.0, 0.0, -5.0), EPSILON);
}

#[test]
fn test_lookat_maps_eye_and_target() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let view = Mat4::lookat(eye, Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

    let eye_out = view * Vec4::from_xyz(3.0, 4.0, 5.0);
    assert_vec_eq(eye_out, Vec4::from_xyz(0.0, 0.0, 0.0), EPSILON);

    let target_out = view * Vec4::from_xyz(0.0, 0.0, 0.0);
    assert_vec_eq(target_out, Vec4::from_xyz(0.0, 0.0, -eye.length()), EPSILON);

    // World up stays in the upper half of the view
    let up_out = view * Vec4::direction(0.0, 1.0, 0.0);
    assert!(up_out.y() > 0.0);
    assert_abs_diff_eq!(up_out.x(), 0.0, epsilon = EPSILON);
}

#[test]
fn test_lookat_reorthogonalizes_up() {
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let target = Vec3::new(0.0, 0.0, 0.0);
    let straight = Mat4::lookat(eye, target, Vec3::new(0.0, 1.0, 0.0));
    let tilted = Mat4::lookat(eye, target, Vec3::new(0.0, 3.0, 2.0));
    assert_mat_eq(&straight, &tilted, EPSILON);
}

#[test]
fn test_lookat_parallel_up() {
    let eye = Vec3::new(0.0, 5.0, 0.0);
    let target = Vec3::new(0.0, 0.0, 0.0);
    let up = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(Mat4::lookat(eye, target, up), Mat4::translate(-0.0, -5.0, -0.0));
    assert_eq!(
        Mat4::try_lookat(eye, target, up),
        Err(DegenerateTransform::ParallelUp)
    );

    let eye = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(
        Mat4::lookat(eye, eye, up),
        Mat4::translate(-1.0, -2.0, -3.0)
    );
}

#[test]
fn test_orthogonal() {
    let proj = Mat4::orthogonal(-2.0, 2.0, -1.0, 1.0, 0.5, 10.5);
    let near_corner = proj * Vec4::from_xyz(2.0, 1.0, -0.5);
    assert_vec_eq(near_corner, Vec4([1.0, 1.0, -1.0, 1.0]), EPSILON);
    let far_corner = proj * Vec4::from_xyz(-2.0, -1.0, -10.5);
    assert_vec_eq(far_corner, Vec4([-1.0, -1.0, 1.0, 1.0]), EPSILON);
}

#[test]
fn test_orthogonal_zero_span() {
    assert_eq!(
        Mat4::orthogonal(1.0, 1.0, -1.0, 1.0, 0.1, 10.0),
        Mat4::identity()
    );
    assert_eq!(
        Mat4::orthogonal(-1.0, 1.0, 2.0, 2.0, 0.1, 10.0),
        Mat4::identity()
    );
    assert_eq!(
        Mat4::try_orthogonal(-1.0, 1.0, -1.0, 1.0, 3.0, 3.0),
        Err(DegenerateTransform::ZeroSpan {
            axis: SpanAxis::Depth
        })
    );
}

#[test]
fn test_frustum() {
    let proj = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
    assert_vec_eq(proj.extract_row(3), Vec4([0.0, 0.0, -1.0, 0.0]), 0.0);

    let near = proj * Vec4::from_xyz(1.0, 1.0, -1.0);
    let near = Vec4([near[0] / near[3], near[1] / near[3], near[2] / near[3], 1.0]);
    assert_vec_eq(near, Vec4([1.0, 1.0, -1.0, 1.0]), EPSILON);

    let far = proj * Vec4::from_xyz(10.0, 10.0, -10.0);
    let far = Vec4([far[0] / far[3], far[1] / far[3], far[2] / far[3], 1.0]);
    assert_vec_eq(far, Vec4([1.0, 1.0, 1.0, 1.0]), EPSILON);
}

#[test]
fn test_frustum_zero_span() {
    assert_eq!(
        Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 2.0),
        Mat4::identity()
    );
    assert_eq!(
        Mat4::try_frustum(0.5, 0.5, -1.0, 1.0, 1.0, 2.0),
        Err(DegenerateTransform::ZeroSpan {
            axis: SpanAxis::Horizontal
        })
    );
}

#[test]
fn test_perspective_matches_frustum() {
    let (fovy, aspect, near, far) = (1.0f32, 4.0 / 3.0, 1.0, 10.0);
    let top = near * (fovy * 0.5).tan();
    let right = top * aspect;
    assert_mat_eq(
        &Mat4::perspective(fovy, aspect, near, far),
        &Mat4::frustum(-right, right, -top, top, near, far),
        EPSILON,
    );
}

#[test]
fn test_perspective_degenerate() {
    assert_eq!(Mat4::perspective(1.0, 1.5, 5.0, 5.0), Mat4::identity());
    assert_eq!(
        Mat4::try_perspective(1.0, 1.5, 5.0, 5.0),
        Err(DegenerateTransform::ZeroSpan {
            axis: SpanAxis::Depth
        })
    );
}

fn to_ndc(clip: Vec4) -> Vec4 {
    Vec4([clip[0] / clip[3], clip[1] / clip[3], clip[2] / clip[3], 1.0])
}

#[test]
fn test_off_axis_frustum() {
    let proj = Mat4::frustum(-1.0, 3.0, -2.0, 1.0, 1.0, 10.0);
    assert_abs_diff_eq!(proj.data()[8], 0.5, epsilon = EPSILON);
    assert_abs_diff_eq!(proj.data()[9], -1.0 / 3.0, epsilon = EPSILON);

    let near_low = to_ndc(proj * Vec4::from_xyz(-1.0, -2.0, -1.0));
    assert_vec_eq(near_low, Vec4([-1.0, -1.0, -1.0, 1.0]), EPSILON);
    let near_high = to_ndc(proj * Vec4::from_xyz(3.0, 1.0, -1.0));
    assert_vec_eq(near_high, Vec4([1.0, 1.0, -1.0, 1.0]), EPSILON);

    // Far plane corners are the near ones scaled by far / near
    let far_low = to_ndc(proj * Vec4::from_xyz(-10.0, -20.0, -10.0));
    assert_vec_eq(far_low, Vec4([-1.0, -1.0, 1.0, 1.0]), EPSILON);
    let far_high = to_ndc(proj * Vec4::from_xyz(30.0, 10.0, -10.0));
    assert_vec_eq(far_high, Vec4([1.0, 1.0, 1.0, 1.0]), EPSILON);
}

#[test]
fn test_off_axis_orthogonal() {
    let proj = Mat4::orthogonal(0.0, 4.0, 1.0, 3.0, 0.5, 10.5);
    assert_abs_diff_eq!(proj.data()[12], -1.0, epsilon = EPSILON);
    assert_abs_diff_eq!(proj.data()[13], -2.0, epsilon = EPSILON);

    let near_low = proj * Vec4::from_xyz(0.0, 1.0, -0.5);
    assert_vec_eq(near_low, Vec4([-1.0, -1.0, -1.0, 1.0]), EPSILON);
    let far_high = proj * Vec4::from_xyz(4.0, 3.0, -10.5);
    assert_vec_eq(far_high, Vec4([1.0, 1.0, 1.0, 1.0]), EPSILON);
    let center = proj * Vec4::from_xyz(2.0, 2.0, -5.5);
    assert_vec_eq(center, Vec4([0.0, 0.0, 0.0, 1.0]), EPSILON);
}

#[test]
fn test_lookat_fallback_moves_eye_to_origin() {
    let eye = Vec3::new(-2.0, 3.0, -4.0);
    let view = Mat4::lookat(eye, eye, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(view, Mat4::translate(2.0, -3.0, 4.0));

    let origin = view * Vec4::from_xyz(-2.0, 3.0, -4.0);
    assert_vec_eq(origin, Vec4::from_xyz(0.0, 0.0, 0.0), 0.0);
}
