use {
    crate::validate::{validate, ValidationIssue},
    cranelift_entity::PrimaryMap,
    replica_command::{Command, CommandId},
    replica_memory::{Arena, BlockId, MemoryBlock, Pointer},
};

/// Finished capture: the ordered command stream and the memory it refers to.
///
/// The capture is immutable. Replay or analysis consume it as a whole.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capture {
    commands: PrimaryMap<CommandId, Command>,
    memory: Arena,
}

impl Capture {
    pub(crate) fn new(commands: PrimaryMap<CommandId, Command>, memory: Arena) -> Self {
        Capture { commands, memory }
    }

    /// Commands in stream order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> + '_ {
        self.commands.values()
    }

    /// Get command by id.
    pub fn command(&self, id: CommandId) -> Option<&Command> {
        self.commands.get(id)
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the stream is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over commands with their ids in stream order.
    pub fn iter(&self) -> impl Iterator<Item = (CommandId, &Command)> + '_ {
        self.commands.iter()
    }

    /// Captured memory.
    pub fn memory(&self) -> &Arena {
        &self.memory
    }

    /// Iterate over staged blocks in staging order.
    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, &MemoryBlock)> + '_ {
        self.memory.iter()
    }

    /// Get block by id.
    pub fn block(&self, id: BlockId) -> Option<&MemoryBlock> {
        self.memory.block(id)
    }

    /// Find block the pointer refers to.
    pub fn block_at(&self, ptr: Pointer) -> Option<BlockId> {
        self.memory.block_at(ptr)
    }

    /// Check declared observations against the staged memory.
    ///
    /// Reports observations of unknown blocks or outside of their blocks, and
    /// pointer arguments into staged memory that no command observes
    /// at or after the command that receives them.
    pub fn validate(&self) -> Result<(), Vec<ValidationIssue>> {
        let issues = validate(&self.commands, &self.memory);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    /// Split the capture into its command stream and memory.
    pub fn into_parts(self) -> (PrimaryMap<CommandId, Command>, Arena) {
        (self.commands, self.memory)
    }
}
