use bytemuck::{Pod, Zeroable};
use lantern_math::{Mat3, Mat4, Vec3, Vec4};

use crate::config::{LightConfig, MaterialConfig, SceneConfig};
use crate::viewport::Viewport;

/// Per-draw matrices as a std140 uniform block.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DrawUniforms {
    pub projection: [f32; 16],
    pub modelview: [f32; 16],
    pub normal_matrix: [f32; 12],
}

/// One light in eye space. Colours are padded to vec4.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LightUniforms {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MaterialUniforms {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl From<&MaterialConfig> for MaterialUniforms {
    fn from(material: &MaterialConfig) -> Self {
        Self {
            ambient: pad(material.ambient),
            diffuse: pad(material.diffuse),
            specular: material.specular,
            shininess: material.shininess,
        }
    }
}

fn pad(rgb: [f32; 3]) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], 0.0]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransforms {
    pub modelview: Mat4,
    pub normal: Mat3,
}

impl ObjectTransforms {
    fn new(modelview: Mat4) -> Self {
        Self {
            normal: modelview.normal_matrix(),
            modelview,
        }
    }
}

/// Everything the shaders need for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub projection: Mat4,
    pub view: Mat4,
    pub model: Mat4,
    pub objects: Vec<ObjectTransforms>,
    pub lights: Vec<LightUniforms>,
}

impl Frame {
    pub fn draw_uniforms(&self) -> Vec<DrawUniforms> {
        self.objects
            .iter()
            .map(|object| DrawUniforms {
                projection: *self.projection.data(),
                modelview: *object.modelview.data(),
                normal_matrix: object.normal.to_std140(),
            })
            .collect()
    }
}

/// Turns a scene description plus the current time and viewport into the
/// projection, view and model-view matrices of every object.
pub struct FrameBuilder {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    near: f32,
    far: f32,
    spin_axis: Vec3,
    second_offset: Vec3,
    lights: Vec<LightConfig>,
}

impl FrameBuilder {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            eye: config.camera.eye.into(),
            target: config.camera.target.into(),
            up: config.camera.up.into(),
            near: config.camera.near,
            far: config.camera.far,
            spin_axis: config.spin_axis.into(),
            second_offset: config.second_offset.into(),
            lights: config.lights.clone(),
        }
    }

    pub fn build(&self, time: f32, viewport: &Viewport) -> Frame {
        let projection = Mat4::perspective(viewport.fovy(), viewport.aspect(), self.near, self.far);

        let [x, y] = viewport.location();
        let spin = Mat4::rotate(time, self.spin_axis.x(), self.spin_axis.y(), self.spin_axis.z());
        let model = Mat4::translate(x, y, 0.0) * spin;

        let view = Mat4::lookat(self.eye, self.target, self.up);
        let modelview = view * model;
        let offset = Mat4::translate(
            self.second_offset.x(),
            self.second_offset.y(),
            self.second_offset.z(),
        );

        let objects = vec![
            ObjectTransforms::new(modelview),
            ObjectTransforms::new(modelview * offset),
        ];

        let lights = self
            .lights
            .iter()
            .map(|light| LightUniforms {
                position: (view * Vec4(light.position)).into(),
                ambient: pad(light.ambient),
                diffuse: pad(light.diffuse),
                specular: pad(light.specular),
            })
            .collect();

        Frame {
            projection,
            view,
            model,
            objects,
            lights,
        }
    }
}
