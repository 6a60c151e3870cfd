pub mod error;
pub mod mat3;
pub mod mat4;
pub mod vec3;
pub mod vec4;

pub use self::error::{DegenerateTransform, SpanAxis};
pub use self::mat3::Mat3;
pub use self::mat4::Mat4;
pub use self::vec3::Vec3;
pub use self::vec4::Vec4;

pub fn mat4_mul_vec4(a: &Mat4, b: &Vec4) -> Vec4 {
    let row0 = Mat4::extract_row(a, 0);
    let row1 = Mat4::extract_row(a, 1);
    let row2 = Mat4::extract_row(a, 2);
    let row3 = Mat4::extract_row(a, 3);
    Vec4([
        Vec4::dot(&row0, b),
        Vec4::dot(&row1, b),
        Vec4::dot(&row2, b),
        Vec4::dot(&row3, b),
    ])
}

//Assume lower row is 0_0_0_1
pub fn mat4_mul_point(a: &Mat4, b: &Vec3) -> Vec3 {
    let out = mat4_mul_vec4(a, &Vec4::from_xyz(b[0], b[1], b[2]));
    Vec3([out[0], out[1], out[2]])
}
