use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on lights a single frame packs into its uniform block.
pub const MAX_LIGHTS: usize = 8;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("scene has no lights")]
    NoLights,
    #[error("scene has {count} lights, at most {max} are supported")]
    TooManyLights { count: usize, max: usize },
    #[error("scene has no materials")]
    NoMaterials,
    #[error("uniform alignment {0} is not a non-zero power of two")]
    BadAlignment(usize),
    #[error("near and far clip planes are both {0}")]
    EqualClipPlanes(f32),
    #[error("viewport size {0}x{1} is not positive")]
    InvalidViewport(f32, f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [3.0, 4.0, 5.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            near: 1.0,
            far: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
    /// Zoom factor, the field of view is `scale * 0.01` radians.
    pub scale: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            scale: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// World-space homogeneous position, `w == 0` for a directional light.
    pub position: [f32; 4],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0, 1.0],
            ambient: [0.1, 0.1, 0.1],
            diffuse: [0.9, 0.9, 0.9],
            specular: [0.9, 0.9, 0.9],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            ambient: [0.6, 0.6, 0.2],
            diffuse: [0.6, 0.6, 0.2],
            specular: [0.3, 0.3, 0.3],
            shininess: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub viewport: ViewportConfig,
    /// Axis the model spins around, one radian per second.
    pub spin_axis: [f32; 3],
    /// Model-space offset of the second drawn object.
    pub second_offset: [f32; 3],
    pub lights: Vec<LightConfig>,
    pub materials: Vec<MaterialConfig>,
    /// `GL_UNIFORM_BUFFER_OFFSET_ALIGNMENT` of the target device.
    pub uniform_alignment: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            viewport: ViewportConfig::default(),
            spin_axis: [0.0, 1.0, 0.0],
            second_offset: [0.0, 0.0, 3.0],
            lights: vec![
                LightConfig {
                    position: [0.0, 0.0, 5.0, 1.0],
                    ambient: [0.2, 0.1, 0.1],
                    diffuse: [1.0, 0.5, 0.5],
                    specular: [1.0, 0.5, 0.5],
                },
                LightConfig {
                    position: [8.0, 0.0, 0.0, 1.0],
                    ambient: [0.1, 0.1, 0.1],
                    diffuse: [0.9, 0.9, 0.9],
                    specular: [0.9, 0.9, 0.9],
                },
            ],
            materials: vec![
                MaterialConfig::default(),
                MaterialConfig {
                    ambient: [0.1, 0.1, 0.5],
                    diffuse: [0.1, 0.1, 0.5],
                    specular: [0.4, 0.4, 0.4],
                    shininess: 60.0,
                },
            ],
            uniform_alignment: 256,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lights.is_empty() {
            return Err(ConfigError::NoLights);
        }
        if self.lights.len() > MAX_LIGHTS {
            return Err(ConfigError::TooManyLights {
                count: self.lights.len(),
                max: MAX_LIGHTS,
            });
        }
        if self.materials.is_empty() {
            return Err(ConfigError::NoMaterials);
        }
        if !self.uniform_alignment.is_power_of_two() {
            return Err(ConfigError::BadAlignment(self.uniform_alignment));
        }
        if self.camera.near == self.camera.far {
            return Err(ConfigError::EqualClipPlanes(self.camera.near));
        }
        let ViewportConfig { width, height, .. } = self.viewport;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidViewport(width, height));
        }
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<SceneConfig> {
    let path = path.as_ref();

    let config_json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scene config {}", path.display()))?;
    let config = serde_json::from_str::<SceneConfig>(&config_json)
        .with_context(|| format!("failed to parse scene config {}", path.display()))?;
    config.validate()?;

    log::debug!("Loaded scene config from {}: {:?}", path.display(), config);
    Ok(config)
}
