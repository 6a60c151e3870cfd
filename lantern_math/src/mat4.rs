use crate::error::{DegenerateTransform, SpanAxis};
use crate::{mat4_mul_vec4, Mat3, Vec3, Vec4};
use bytemuck::{Pod, Zeroable};
use core::ops::{Index, Mul};

/// Mat4 is considered a column-major matrix, constructed using 4 Vec4s
///
/// The 16 floats are laid out contiguously, so [`Mat4::data`] can be handed to
/// a `mat4` uniform as-is. Flattened index `i` addresses column `i / 4`,
/// row `i % 4`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat4(pub [Vec4; 4]);

impl Index<usize> for Mat4 {
    type Output = Vec4;

    fn index(&self, index: usize) -> &Vec4 {
        match index {
            0 => &self.0[0],
            1 => &self.0[1],
            2 => &self.0[2],
            3 => &self.0[3],
            _ => panic!("INDEXING OUT_OF_BOUNDS in Mat4"),
        }
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        &self * &rhs
    }
}

impl Mul<&Mat4> for &Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: &Mat4) -> Mat4 {
        let row0 = self.extract_row(0);
        let row1 = self.extract_row(1);
        let row2 = self.extract_row(2);
        let row3 = self.extract_row(3);

        let column = |c: usize| {
            Vec4([
                Vec4::dot(&row0, &rhs[c]),
                Vec4::dot(&row1, &rhs[c]),
                Vec4::dot(&row2, &rhs[c]),
                Vec4::dot(&row3, &rhs[c]),
            ])
        };

        Mat4([column(0), column(1), column(2), column(3)])
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        mat4_mul_vec4(&self, &rhs)
    }
}

impl Mul<Vec4> for &Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        mat4_mul_vec4(self, &rhs)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(val: [f32; 16]) -> Self {
        Mat4::from_array(val)
    }
}

impl From<Mat4> for [[f32; 4]; 4] {
    fn from(val: Mat4) -> Self {
        let vec_arr = val.0;
        [
            vec_arr[0].into(),
            vec_arr[1].into(),
            vec_arr[2].into(),
            vec_arr[3].into(),
        ]
    }
}

impl Mat4 {
    pub fn identity() -> Mat4 {
        Mat4([
            Vec4([1.0, 0.0, 0.0, 0.0]),
            Vec4([0.0, 1.0, 0.0, 0.0]),
            Vec4([0.0, 0.0, 1.0, 0.0]),
            Vec4([0.0, 0.0, 0.0, 1.0]),
        ])
    }

    /// Resets this matrix to identity in place.
    pub fn load_identity(&mut self) {
        *self = Self::identity();
    }

    /// Wraps 16 floats given in column-major order.
    pub fn from_array(m: [f32; 16]) -> Mat4 {
        bytemuck::cast(m)
    }

    /// Flat column-major view of the matrix.
    #[inline]
    pub fn data(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self[col][row]
    }

    #[inline]
    pub fn column(&self, index: usize) -> Vec4 {
        self[index]
    }

    //Internal functions which makes less sense
    pub fn extract_row(&self, index: usize) -> Vec4 {
        Vec4([
            self[0][index],
            self[1][index],
            self[2][index],
            self[3][index],
        ])
    }

    pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4([
            Vec4([1.0, 0.0, 0.0, 0.0]),
            Vec4([0.0, 1.0, 0.0, 0.0]),
            Vec4([0.0, 0.0, 1.0, 0.0]),
            Vec4([x, y, z, 1.0]),
        ])
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4([
            Vec4([x, 0.0, 0.0, 0.0]),
            Vec4([0.0, y, 0.0, 0.0]),
            Vec4([0.0, 0.0, z, 0.0]),
            Vec4([0.0, 0.0, 0.0, 1.0]),
        ])
    }

    /// Rotation of `angle` radians about the axis `(x, y, z)`.
    ///
    /// A zero-length axis yields the identity matrix.
    pub fn rotate(angle: f32, x: f32, y: f32, z: f32) -> Mat4 {
        Self::try_rotate(angle, x, y, z).unwrap_or_else(|err| {
            log::trace!("rotate: {}, using identity", err);
            Self::identity()
        })
    }

    pub fn try_rotate(angle: f32, x: f32, y: f32, z: f32) -> Result<Mat4, DegenerateTransform> {
        let d = (x * x + y * y + z * z).sqrt();
        if d <= 0.0 {
            return Err(DegenerateTransform::ZeroAxis);
        }

        let (l, m, n) = (x / d, y / d, z / d);
        let (l2, m2, n2) = (l * l, m * m, n * n);
        let (lm, mn, nl) = (l * m, m * n, n * l);
        let cos_part = angle.cos();
        let sin_part = angle.sin();
        let one_sub_cos = 1.0 - cos_part;

        Ok(Mat4([
            Vec4([
                (1.0 - l2) * cos_part + l2,
                lm * one_sub_cos + n * sin_part,
                nl * one_sub_cos - m * sin_part,
                0.0,
            ]),
            Vec4([
                lm * one_sub_cos - n * sin_part,
                (1.0 - m2) * cos_part + m2,
                mn * one_sub_cos + l * sin_part,
                0.0,
            ]),
            Vec4([
                nl * one_sub_cos + m * sin_part,
                mn * one_sub_cos - l * sin_part,
                (1.0 - n2) * cos_part + n2,
                0.0,
            ]),
            Vec4([0.0, 0.0, 0.0, 1.0]),
        ]))
    }

    /// View transform for a camera at `eye` looking at `target`.
    ///
    /// `up` only needs to be roughly upwards; it is re-orthogonalized against
    /// the view direction. When no orthogonal basis exists (`up` parallel to
    /// the view direction, or `eye == target`) the result is the bare
    /// translation `translate(-eye)`.
    pub fn lookat(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Self::try_lookat(eye, target, up).unwrap_or_else(|err| {
            log::trace!("lookat: {}, using eye translation only", err);
            Self::eye_translation(eye)
        })
    }

    fn eye_translation(eye: Vec3) -> Mat4 {
        let back = -eye;
        Self::translate(back.x(), back.y(), back.z())
    }

    pub fn try_lookat(eye: Vec3, target: Vec3, up: Vec3) -> Result<Mat4, DegenerateTransform> {
        let tv = Self::eye_translation(eye);

        // The camera looks down -t, r points right and s is the corrected up.
        let t = eye - target;
        let r = up.cross(t);
        let s = t.cross(r);

        if s.length_squared() == 0.0 {
            return Err(DegenerateTransform::ParallelUp);
        }

        let r = r.normalize();
        let s = s.normalize();
        let t = t.normalize();

        // r, s, t are the rows of the rotation
        let rv = Mat4([
            Vec4([r[0], s[0], t[0], 0.0]),
            Vec4([r[1], s[1], t[1], 0.0]),
            Vec4([r[2], s[2], t[2], 0.0]),
            Vec4([0.0, 0.0, 0.0, 1.0]),
        ]);

        Ok(rv * tv)
    }

    /// Orthographic projection. A zero-sized volume yields the identity matrix.
    pub fn orthogonal(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        Self::try_orthogonal(left, right, bottom, top, near, far).unwrap_or_else(|err| {
            log::trace!("orthogonal: {}, using identity", err);
            Self::identity()
        })
    }

    pub fn try_orthogonal(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<Mat4, DegenerateTransform> {
        let (dx, dy, dz) = check_spans(left, right, bottom, top, near, far)?;

        Ok(Mat4([
            Vec4([2.0 / dx, 0.0, 0.0, 0.0]),
            Vec4([0.0, 2.0 / dy, 0.0, 0.0]),
            Vec4([0.0, 0.0, -2.0 / dz, 0.0]),
            Vec4([
                -(right + left) / dx,
                -(top + bottom) / dy,
                -(far + near) / dz,
                1.0,
            ]),
        ]))
    }

    /// Off-axis perspective projection, clip space depth in [-1, 1].
    /// A zero-sized volume yields the identity matrix.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        Self::try_frustum(left, right, bottom, top, near, far).unwrap_or_else(|err| {
            log::trace!("frustum: {}, using identity", err);
            Self::identity()
        })
    }

    pub fn try_frustum(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<Mat4, DegenerateTransform> {
        let (dx, dy, dz) = check_spans(left, right, bottom, top, near, far)?;

        Ok(Mat4([
            Vec4([2.0 * near / dx, 0.0, 0.0, 0.0]),
            Vec4([0.0, 2.0 * near / dy, 0.0, 0.0]),
            Vec4([
                (right + left) / dx,
                (top + bottom) / dy,
                -(far + near) / dz,
                -1.0,
            ]),
            Vec4([0.0, 0.0, -2.0 * far * near / dz, 0.0]),
        ]))
    }

    /// Symmetric perspective projection from a vertical field of view in
    /// radians. `near == far` yields the identity matrix.
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Self::try_perspective(fovy, aspect, near, far).unwrap_or_else(|err| {
            log::trace!("perspective: {}, using identity", err);
            Self::identity()
        })
    }

    pub fn try_perspective(
        fovy: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<Mat4, DegenerateTransform> {
        let dz = far - near;
        if dz == 0.0 {
            return Err(DegenerateTransform::ZeroSpan {
                axis: SpanAxis::Depth,
            });
        }

        let focal = 1.0 / (fovy * 0.5).tan();

        Ok(Mat4([
            Vec4([focal / aspect, 0.0, 0.0, 0.0]),
            Vec4([0.0, focal, 0.0, 0.0]),
            Vec4([0.0, 0.0, -(far + near) / dz, -1.0]),
            Vec4([0.0, 0.0, -2.0 * far * near / dz, 0.0]),
        ]))
    }

    /// Cofactor matrix of the upper-left 3x3 block.
    ///
    /// This is the inverse-transpose scaled by the determinant, so normals
    /// come out in the right direction but are not unit length.
    pub fn normal_matrix(&self) -> Mat3 {
        let mut out = [0.0f32; 9];
        self.write_normal_matrix(&mut out);
        Mat3(out)
    }

    pub fn write_normal_matrix(&self, out: &mut [f32; 9]) {
        let m = self.data();
        out[0] = m[5] * m[10] - m[6] * m[9];
        out[1] = m[6] * m[8] - m[4] * m[10];
        out[2] = m[4] * m[9] - m[5] * m[8];
        out[3] = m[9] * m[2] - m[10] * m[1];
        out[4] = m[10] * m[0] - m[8] * m[2];
        out[5] = m[8] * m[1] - m[9] * m[0];
        out[6] = m[1] * m[6] - m[2] * m[5];
        out[7] = m[2] * m[4] - m[0] * m[6];
        out[8] = m[0] * m[5] - m[1] * m[4];
    }
}

fn check_spans(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<(f32, f32, f32), DegenerateTransform> {
    let dx = right - left;
    let dy = top - bottom;
    let dz = far - near;

    let zero_span = |axis| Err(DegenerateTransform::ZeroSpan { axis });
    if dx == 0.0 {
        return zero_span(SpanAxis::Horizontal);
    }
    if dy == 0.0 {
        return zero_span(SpanAxis::Vertical);
    }
    if dz == 0.0 {
        return zero_span(SpanAxis::Depth);
    }
    Ok((dx, dy, dz))
}
