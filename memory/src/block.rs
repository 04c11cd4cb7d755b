use {
    crate::range::{MemoryRange, Pointer, Region},
    cranelift_entity::entity_impl,
};

/// Id of a memory block within its arena.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockId(u32);
entity_impl!(BlockId, "block");

/// Immutable payload staged into capture memory.
/// Owns its bytes and the range of addresses they occupy.
#[derive(Clone, PartialEq, Eq, derivative::Derivative)]
#[derivative(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryBlock {
    range: MemoryRange,
    #[derivative(Debug = "ignore")]
    data: Box<[u8]>,
}

impl MemoryBlock {
    pub(crate) fn new(base: u64, data: Vec<u8>) -> Self {
        MemoryBlock {
            range: MemoryRange::new(base, data.len() as u64),
            data: data.into_boxed_slice(),
        }
    }

    /// Get memory range occupied by the block.
    #[inline]
    pub fn range(&self) -> MemoryRange {
        self.range
    }

    /// Pointer to the first byte of the block.
    #[inline]
    pub fn ptr(&self) -> Pointer {
        Pointer(self.range.base)
    }

    /// Size of the block in bytes.
    #[inline]
    pub fn size(&self) -> u64 {
        self.range.size
    }

    /// Staged bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Check if pointer refers to this block.
    /// Pointer to the base of a zero-sized block refers to that block.
    pub fn holds(&self, ptr: Pointer) -> bool {
        self.range.contains(ptr.address()) || (self.range.size == 0 && self.range.base == ptr.address())
    }

    /// Region covering `range` of this block, if it lies within the block.
    pub fn region(&self, id: BlockId, range: MemoryRange) -> Option<Region> {
        if self.range.contains_range(&range) {
            Some(Region { block: id, range })
        } else {
            None
        }
    }
}
