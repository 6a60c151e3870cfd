use std::marker::PhantomData;
use std::mem::size_of;
use std::ops::Range;

use bytemuck::Pod;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UniformError {
    #[error("uniform offset alignment must be non-zero")]
    ZeroAlignment,
    #[error("uniform block type has zero size")]
    ZeroSizedBlock,
    #[error("blocks {start}..{end} out of range, buffer holds {count}")]
    OutOfRange {
        start: usize,
        end: usize,
        count: usize,
    },
    #[error("{count} blocks of {block_size} bytes do not fit in memory")]
    TooLarge { count: usize, block_size: usize },
}

/// Rounds `size` up to the next multiple of `alignment`.
pub fn aligned_block_size(size: usize, alignment: usize) -> Result<usize, UniformError> {
    if alignment == 0 {
        return Err(UniformError::ZeroAlignment);
    }
    if size == 0 {
        return Err(UniformError::ZeroSizedBlock);
    }
    ((size - 1) / alignment + 1)
        .checked_mul(alignment)
        .ok_or(UniformError::TooLarge {
            count: 1,
            block_size: size,
        })
}

/// Staging copy of a uniform buffer holding `len()` blocks of `T`.
///
/// Each block starts at a multiple of the device's offset alignment so any one
/// of them can be bound on its own with [`UniformBlocks::block_range`].
pub struct UniformBlocks<T: Pod> {
    bytes: Vec<u8>,
    block_size: usize,
    count: usize,
    _marker: PhantomData<T>,
}

impl<T: Pod> UniformBlocks<T> {
    pub fn new(data: &[T], alignment: usize) -> Result<Self, UniformError> {
        let mut blocks = Self::zeroed(data.len(), alignment)?;
        blocks.set(0, data)?;
        Ok(blocks)
    }

    pub fn zeroed(count: usize, alignment: usize) -> Result<Self, UniformError> {
        let block_size = aligned_block_size(size_of::<T>(), alignment)?;
        let total = count
            .checked_mul(block_size)
            .ok_or(UniformError::TooLarge { count, block_size })?;
        Ok(Self {
            bytes: vec![0u8; total],
            block_size,
            count,
            _marker: PhantomData,
        })
    }

    /// Overwrites the blocks `start..start + data.len()`.
    pub fn set(&mut self, start: usize, data: &[T]) -> Result<(), UniformError> {
        let in_range = start
            .checked_add(data.len())
            .filter(|&end| end <= self.count)
            .is_some();
        if !in_range {
            return Err(UniformError::OutOfRange {
                start,
                end: start.saturating_add(data.len()),
                count: self.count,
            });
        }
        for (i, value) in data.iter().enumerate() {
            let offset = (start + i) * self.block_size;
            self.bytes[offset..offset + size_of::<T>()].copy_from_slice(bytemuck::bytes_of(value));
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<T, UniformError> {
        let range = self.block_range(index)?;
        Ok(bytemuck::pod_read_unaligned(&self.bytes[range]))
    }

    /// Byte range a shader binding selects for block `index`.
    pub fn block_range(&self, index: usize) -> Result<Range<usize>, UniformError> {
        if index >= self.count {
            return Err(UniformError::OutOfRange {
                start: index,
                end: index.saturating_add(1),
                count: self.count,
            });
        }
        let offset = index * self.block_size;
        Ok(offset..offset + size_of::<T>())
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
