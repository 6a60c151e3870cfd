use anyhow::{Context, Result};
use log::{debug, info};

use lantern_frame::timer::FrameTimer;
use lantern_frame::{
    load_config, FrameBuilder, LightUniforms, MaterialUniforms, SceneConfig, UniformBlocks,
    Viewport,
};

const FRAME_RATE: f32 = 60.0;
const DEFAULT_FRAMES: u32 = 120;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(&path)?,
        None => {
            info!("No scene config given, using the built-in scene");
            SceneConfig::default()
        }
    };
    let frames = match args.next() {
        Some(count) => count
            .parse::<u32>()
            .with_context(|| format!("invalid frame count {:?}", count))?,
        None => DEFAULT_FRAMES,
    };

    run(&config, frames)
}

fn run(config: &SceneConfig, frames: u32) -> Result<()> {
    config.validate()?;

    let alignment = config.uniform_alignment;
    let materials: Vec<MaterialUniforms> = config.materials.iter().map(Into::into).collect();
    let material_blocks = UniformBlocks::new(&materials, alignment)?;
    info!(
        "Staged {} material blocks, {} bytes each",
        material_blocks.len(),
        material_blocks.block_size()
    );

    let builder = FrameBuilder::new(config);
    let viewport = Viewport::from_config(&config.viewport);
    let mut timer = FrameTimer::new(60);
    let mut staged_bytes = 0;

    for index in 0..frames {
        let time = index as f32 / FRAME_RATE;

        timer.start();
        let frame = builder.build(time, &viewport);
        let draws = UniformBlocks::new(&frame.draw_uniforms(), alignment)?;
        let lights = UniformBlocks::<LightUniforms>::new(&frame.lights, alignment)?;
        timer.stop();

        staged_bytes = draws.as_bytes().len() + lights.as_bytes().len();
        debug!("Frame {} (t = {:.3}s)", index, time);
        debug!("  projection: {:?}", frame.projection.data());
        debug!("  model: {:?}", frame.model.data());
        for (i, object) in frame.objects.iter().enumerate() {
            let material = material_blocks.block_range(i % material_blocks.len())?;
            debug!("  object {} modelview: {:?}", i, object.modelview.data());
            debug!("  object {} normal: {:?}", i, object.normal.data());
            debug!("  object {} material bytes: {:?}", i, material);
        }
        for (i, light) in frame.lights.iter().enumerate() {
            debug!("  light {} eye position: {:?}", i, light.position);
        }
    }

    info!(
        "Built {} frames, {} uniform bytes per frame, build time mean {:.4}ms (min {:.4}ms, max {:.4}ms)",
        frames,
        staged_bytes,
        timer.mean(),
        timer.min(),
        timer.max()
    );
    Ok(())
}
