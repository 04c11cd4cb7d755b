use failure::Fail;

/// Possible cause of staging failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Fail)]
pub enum StagingError {
    /// Capture address space can't fit the payload.
    /// The capture session can't continue.
    #[fail(
        display = "Out of capture address space: {} bytes requested at cursor {:#x}",
        requested, cursor
    )]
    OutOfAddressSpace {
        /// Size of the payload.
        requested: u64,

        /// Address the arena would allocate from.
        cursor: u64,
    },
}
