use crate::Vec3;
use bytemuck::{Pod, Zeroable};
use core::ops::Index;

/// Column-major 3x3 matrix, the layout a `mat3` uniform expects.
///
/// Produced by [`Mat4::normal_matrix`](crate::Mat4::normal_matrix) to carry
/// surface normals through a model-view transform.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat3(pub [f32; 9]);

impl Index<usize> for Mat3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0..=8 => &self.0[index],
            _ => panic!("INDEXING OUT_OF_BOUNDS in Mat3"),
        }
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Mat3> for [f32; 9] {
    fn from(val: Mat3) -> Self {
        val.0
    }
}

impl Mat3 {
    pub fn identity() -> Mat3 {
        Mat3([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    #[inline]
    pub fn data(&self) -> &[f32; 9] {
        &self.0
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[col * 3 + row]
    }

    pub fn column(&self, index: usize) -> Vec3 {
        let base = index * 3;
        Vec3([self.0[base], self.0[base + 1], self.0[base + 2]])
    }

    /// Scales every column to unit length. Zero columns stay zero.
    pub fn normalize_columns(&self) -> Mat3 {
        let mut out = [0.0f32; 9];
        for col in 0..3 {
            let unit = self.column(col).normalize();
            out[col * 3..col * 3 + 3].copy_from_slice(&unit.0);
        }
        Mat3(out)
    }

    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        Vec3([
            self.get(0, 0) * v[0] + self.get(0, 1) * v[1] + self.get(0, 2) * v[2],
            self.get(1, 0) * v[0] + self.get(1, 1) * v[1] + self.get(1, 2) * v[2],
            self.get(2, 0) * v[0] + self.get(2, 1) * v[1] + self.get(2, 2) * v[2],
        ])
    }

    /// Pads each column to a vec4, the stride a `mat3` has inside a std140 block.
    pub fn to_std140(&self) -> [f32; 12] {
        let m = &self.0;
        [
            m[0], m[1], m[2], 0.0, //
            m[3], m[4], m[5], 0.0, //
            m[6], m[7], m[8], 0.0,
        ]
    }
}
