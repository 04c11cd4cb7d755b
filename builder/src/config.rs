use replica_memory::ArenaConfig;

/// Config for `Builder`.
#[derive(Clone, Copy, derivative::Derivative)]
#[derivative(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuilderConfig {
    /// Thread recorded for commands created by the builder's `CommandBuilder`.
    #[derivative(Default(value = "0"))]
    pub thread: u64,

    /// Config for the capture memory.
    pub arena: ArenaConfig,
}
