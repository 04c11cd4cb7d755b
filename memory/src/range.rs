use {
    crate::block::BlockId,
    replica_core::Element,
    std::fmt,
};

/// Address in the capture's virtual address space.
/// This is the value captured commands receive as pointer arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pointer(pub u64);

impl Pointer {
    /// Null pointer.
    pub const NULL: Pointer = Pointer(0);

    /// Get raw address.
    pub fn address(self) -> u64 {
        self.0
    }

    /// Check if this is the null pointer.
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Pointer `offset` bytes after this one.
    pub fn offset(self, offset: u64) -> Pointer {
        Pointer(self.0 + offset)
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{:#x}", self.0)
    }
}

/// Pointers are stored as 64 bit values in capture memory.
impl Element for Pointer {
    const SIZE: usize = 8;

    fn write_le(self, out: &mut Vec<u8>) {
        self.0.write_le(out)
    }
}

/// Half-open range of capture addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryRange {
    /// First address of the range.
    pub base: u64,

    /// Size of the range in bytes.
    pub size: u64,
}

impl MemoryRange {
    /// Create range from base address and size.
    pub fn new(base: u64, size: u64) -> Self {
        MemoryRange { base, size }
    }

    /// Address one past the end of the range.
    /// Saturates at `u64::max_value()`.
    pub fn end(&self) -> u64 {
        self.base.saturating_add(self.size)
    }

    /// Check if address lies in the range.
    pub fn contains(&self, address: u64) -> bool {
        self.base <= address && address - self.base < self.size
    }

    /// Check if `other` lies entirely in this range.
    /// Empty range lies in any range that contains or ends at its base.
    pub fn contains_range(&self, other: &MemoryRange) -> bool {
        self.base <= other.base
            && other.size <= self.size
            && other.base - self.base <= self.size - other.size
    }

    /// Check if the ranges share at least one address.
    pub fn overlaps(&self, other: &MemoryRange) -> bool {
        if self.size == 0 || other.size == 0 {
            false
        } else if self.base <= other.base {
            other.base - self.base < self.size
        } else {
            self.base - other.base < other.size
        }
    }
}

impl fmt::Display for MemoryRange {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "[{:#x}..{:#x})", self.base, self.end())
    }
}

/// Range of staged memory together with the block it belongs to.
/// Commands declare their reads and writes in terms of regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Block that holds the memory.
    pub block: BlockId,

    /// Observed addresses.
    pub range: MemoryRange,
}

impl fmt::Display for Region {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}{}", self.block, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_containment() {
        let range = MemoryRange::new(0x1000, 0x10);
        assert!(range.contains(0x1000));
        assert!(range.contains(0x100f));
        assert!(!range.contains(0x1010));
        assert!(range.contains_range(&MemoryRange::new(0x1004, 4)));
        assert!(range.contains_range(&MemoryRange::new(0x1010, 0)));
        assert!(!range.contains_range(&MemoryRange::new(0x100c, 8)));
    }

    #[test]
    fn range_overlap() {
        let range = MemoryRange::new(0x1000, 0x10);
        assert!(range.overlaps(&MemoryRange::new(0x100f, 1)));
        assert!(!range.overlaps(&MemoryRange::new(0x1010, 1)));
        assert!(!range.overlaps(&MemoryRange::new(0x1008, 0)));
    }

    #[test]
    fn ranges_near_address_space_end() {
        let block = MemoryRange::new(0x1000, 4);
        let wrapping = MemoryRange::new(u64::max_value() - 1, 4);
        assert!(!block.contains_range(&wrapping));
        assert!(!block.overlaps(&wrapping));
        assert!(!wrapping.contains_range(&block));
        assert_eq!(wrapping.end(), u64::max_value());

        let last = MemoryRange::new(u64::max_value() - 4, 4);
        assert!(last.contains(u64::max_value() - 1));
        assert!(!last.contains(u64::max_value()));
        assert!(last.contains_range(&MemoryRange::new(u64::max_value() - 2, 2)));
        assert!(last.overlaps(&MemoryRange::new(u64::max_value() - 1, 1)));
    }

    #[test]
    fn pointer_bytes() {
        let mut out = Vec::new();
        Pointer(0x1020).write_le(&mut out);
        assert_eq!(out, vec![0x20, 0x10, 0, 0, 0, 0, 0, 0]);
        assert!(Pointer::NULL.is_null());
        assert_eq!(Pointer(0x10).offset(4), Pointer(0x14));
    }
}
