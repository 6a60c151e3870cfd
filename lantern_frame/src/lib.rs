pub mod config;
pub mod frame;
pub mod timer;
pub mod uniform;
pub mod viewport;

pub use self::config::{load_config, ConfigError, SceneConfig};
pub use self::frame::{DrawUniforms, Frame, FrameBuilder, LightUniforms, MaterialUniforms};
pub use self::uniform::{aligned_block_size, UniformBlocks, UniformError};
pub use self::viewport::{Direction, Viewport};
