use replica_memory::Region;

bitflags::bitflags! {
    /// How a command touches an observed memory region.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Access: u8 {
        /// Replay must make the region's content available before the command.
        const READ = 0x1;
        /// Replay must capture the region's content after the command.
        const WRITE = 0x2;
    }
}

impl Access {
    /// Check if access includes reading.
    pub fn is_read(&self) -> bool {
        self.contains(Access::READ)
    }

    /// Check if access includes writing.
    pub fn is_write(&self) -> bool {
        self.contains(Access::WRITE)
    }
}

/// Declaration that a command reads and/or writes a region of staged memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Observed region.
    pub region: Region,

    /// Kind of access.
    pub access: Access,
}
