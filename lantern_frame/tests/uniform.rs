use lantern_frame::config::MaterialConfig;
use lantern_frame::{MaterialUniforms, SceneConfig, UniformBlocks, UniformError};

fn sample_materials() -> Vec<MaterialUniforms> {
    SceneConfig::default()
        .materials
        .iter()
        .map(MaterialUniforms::from)
        .collect()
}

#[test]
fn test_blocks_are_aligned() {
    let materials = sample_materials();
    let blocks = UniformBlocks::new(&materials, 256).unwrap();

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks.block_size(), 256);
    assert_eq!(blocks.as_bytes().len(), 512);
    assert_eq!(blocks.block_range(0), Ok(0..48));
    assert_eq!(blocks.block_range(1), Ok(256..304));
    assert_eq!(blocks.get(1), Ok(materials[1]));

    // Padding between blocks stays zeroed
    assert!(blocks.as_bytes()[48..256].iter().all(|&b| b == 0));
}

#[test]
fn test_set_touches_only_selected_blocks() {
    let materials = sample_materials();
    let mut blocks = UniformBlocks::new(&materials, 64).unwrap();

    let shiny = MaterialUniforms::from(&MaterialConfig {
        shininess: 120.0,
        ..MaterialConfig::default()
    });
    blocks.set(1, &[shiny]).unwrap();

    assert_eq!(blocks.get(0), Ok(materials[0]));
    assert_eq!(blocks.get(1).unwrap().shininess, 120.0);
}

#[test]
fn test_out_of_range() {
    let materials = sample_materials();
    let mut blocks = UniformBlocks::new(&materials, 16).unwrap();

    assert_eq!(
        blocks.set(1, &materials),
        Err(UniformError::OutOfRange {
            start: 1,
            end: 3,
            count: 2
        })
    );
    assert!(blocks.block_range(2).is_err());
    assert!(blocks.get(5).is_err());
}

#[test]
fn test_zero_alignment() {
    let materials = sample_materials();
    assert!(matches!(
        UniformBlocks::new(&materials, 0),
        Err(UniformError::ZeroAlignment)
    ));
}

#[test]
fn test_zeroed() {
    let blocks = UniformBlocks::<MaterialUniforms>::zeroed(3, 32).unwrap();
    assert_eq!(blocks.block_size(), 64);
    assert_eq!(blocks.as_bytes().len(), 192);
    assert!(!blocks.is_empty());
}

#[test]
fn test_huge_indices_are_out_of_range() {
    let mut blocks = UniformBlocks::<[f32; 4]>::zeroed(2, 16).unwrap();

    assert_eq!(
        blocks.set(usize::MAX, &[[1.0; 4]]),
        Err(UniformError::OutOfRange {
            start: usize::MAX,
            end: usize::MAX,
            count: 2
        })
    );
    assert_eq!(
        blocks.block_range(usize::MAX),
        Err(UniformError::OutOfRange {
            start: usize::MAX,
            end: usize::MAX,
            count: 2
        })
    );
    assert!(blocks.get(usize::MAX).is_err());
    assert!(blocks.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_huge_count_is_rejected() {
    assert_eq!(
        UniformBlocks::<[f32; 4]>::zeroed(usize::MAX, 16).err(),
        Some(UniformError::TooLarge {
            count: usize::MAX,
            block_size: 16
        })
    );
}
