use {
    crate::{
        block::{BlockId, MemoryBlock},
        error::StagingError,
        range::{MemoryRange, Pointer, Region},
        util::aligned,
    },
    cranelift_entity::{EntityRef, PrimaryMap},
    replica_core::{cast_c_str, cast_slice_le, Element},
};

/// Config for `Arena`.
#[derive(Clone, Copy, derivative::Derivative)]
#[derivative(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    /// Address of the first staged block.
    /// Keep it non-zero so no block is mistaken for the null pointer.
    #[derivative(Default(value = "0x1000"))]
    pub base_address: u64,

    /// Alignment of every block's base address.
    /// Must be power of two.
    #[derivative(Default(value = "16"))]
    pub alignment: u64,
}

/// Result of staging: the new block and the addresses it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Allocation {
    block: BlockId,
    range: MemoryRange,
}

impl Allocation {
    /// Id of the staged block.
    pub fn block(&self) -> BlockId {
        self.block
    }

    /// Addresses occupied by the staged block.
    pub fn range(&self) -> MemoryRange {
        self.range
    }

    /// Pointer to pass as command argument.
    pub fn ptr(&self) -> Pointer {
        Pointer(self.range.base)
    }

    /// Region to declare as read or written by a command.
    pub fn data(&self) -> Region {
        Region {
            block: self.block,
            range: self.range,
        }
    }
}

/// Linear allocator of capture memory.
///
/// Blocks are placed one after another, each at an aligned address past the
/// end of the previous block, and are never freed or moved.
/// The whole arena is handed off together with the command stream.
///
/// Staging identical content twice creates two distinct blocks.
/// Zero-sized blocks still occupy one address so that every block has its own pointer.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    config: ArenaConfig,
    cursor: u64,
    blocks: PrimaryMap<BlockId, MemoryBlock>,
}

impl Default for Arena {
    fn default() -> Self {
        Arena::new(ArenaConfig::default())
    }
}

impl Arena {
    /// Create new `Arena` with `ArenaConfig` provided.
    ///
    /// # Panics
    ///
    /// Panics if `config.alignment` is not a power of two
    /// or `config.base_address` is null.
    pub fn new(config: ArenaConfig) -> Self {
        assert!(
            config.alignment.is_power_of_two(),
            "Arena alignment must be power of two, got {}",
            config.alignment
        );
        assert_ne!(config.base_address, 0, "Arena must not start at null");
        Arena {
            config,
            cursor: config.base_address,
            blocks: PrimaryMap::new(),
        }
    }

    /// Get config the arena was created with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Address past the last staged block.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Stage raw bytes into new block.
    pub fn stage(&mut self, data: impl Into<Vec<u8>>) -> Result<Allocation, StagingError> {
        let data = data.into();
        let size = data.len() as u64;
        let error = StagingError::OutOfAddressSpace {
            requested: size,
            cursor: self.cursor,
        };

        let base = aligned(self.cursor, self.config.alignment).ok_or(error)?;
        let end = base.checked_add(size.max(1)).ok_or(error)?;

        let block = self.blocks.push(MemoryBlock::new(base, data));
        self.cursor = end;

        let range = self.blocks[block].range();
        log::trace!("Staged {} at {}", block, range);
        Ok(Allocation { block, range })
    }

    /// Stage slice of elements into new block.
    pub fn stage_slice<T: Element>(&mut self, data: &[T]) -> Result<Allocation, StagingError> {
        self.stage(cast_slice_le(data))
    }

    /// Stage string as NUL-terminated C string into new block.
    pub fn stage_str(&mut self, string: &str) -> Result<Allocation, StagingError> {
        self.stage(cast_c_str(string))
    }

    /// Get block by id.
    pub fn block(&self, id: BlockId) -> Option<&MemoryBlock> {
        self.blocks.get(id)
    }

    /// Find block the pointer refers to.
    pub fn block_at(&self, ptr: Pointer) -> Option<BlockId> {
        // Blocks are sorted by address as the cursor only grows.
        let (mut low, mut high) = (0, self.blocks.len());
        while low < high {
            let mid = low + (high - low) / 2;
            let id = BlockId::new(mid);
            let block = &self.blocks[id];
            if block.holds(ptr) {
                return Some(id);
            } else if ptr.address() < block.range().base {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        None
    }

    /// Region of staged memory covering `range` within block `id`.
    pub fn region(&self, id: BlockId, range: MemoryRange) -> Option<Region> {
        self.block(id)?.region(id, range)
    }

    /// Number of staged blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if nothing was staged.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over blocks in staging order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, &MemoryBlock)> + '_ {
        self.blocks.iter()
    }

    /// Take staged blocks out of the arena.
    pub fn into_blocks(self) -> PrimaryMap<BlockId, MemoryBlock> {
        self.blocks
    }

    /// Total bytes staged.
    pub fn staged_bytes(&self) -> u64 {
        self.blocks.values().map(MemoryBlock::size).sum()
    }
}
