use {
    crate::{capture::Capture, config::BuilderConfig},
    cranelift_entity::{EntityRef, PrimaryMap},
    replica_command::{gles::CommandBuilder, Command, CommandId},
    replica_core::{Element, IdAllocator, ProgramId, ShaderId, TextureId},
    replica_memory::{Allocation, Arena, StagingError},
};

/// Builds one capture.
///
/// Owns the command stream together with the memory and the name allocator
/// of the capture session. Commands are appended in the order they are
/// supposed to be replayed and can't be modified or removed afterwards.
///
/// ### Example
///
/// ```
/// # use replica_builder::Builder;
/// # use replica_command::GLenum;
/// let mut builder = Builder::new();
/// let cb = builder.cb();
/// let texture = builder.new_texture_id();
/// builder.add(vec![
///     cb.gl_active_texture(GLenum::GL_TEXTURE0),
///     cb.gl_bind_texture(GLenum::GL_TEXTURE_2D, texture),
/// ]);
/// let bind = builder.last();
/// let capture = builder.finish();
/// assert_eq!(capture.command(bind).unwrap().opcode().name(), "glBindTexture");
/// ```
#[derive(Debug)]
pub struct Builder {
    cb: CommandBuilder,
    arena: Arena,
    ids: IdAllocator,
    commands: PrimaryMap<CommandId, Command>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl Builder {
    /// Create builder with default config.
    pub fn new() -> Self {
        Builder::with_config(BuilderConfig::default())
    }

    /// Create builder with config provided.
    pub fn with_config(config: BuilderConfig) -> Self {
        Builder {
            cb: CommandBuilder::new(config.thread),
            arena: Arena::new(config.arena),
            ids: IdAllocator::new(),
            commands: PrimaryMap::new(),
        }
    }

    /// Command constructors for the builder's thread.
    pub fn cb(&self) -> CommandBuilder {
        self.cb
    }

    /// Append commands to the stream in iteration order.
    pub fn add<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.add_one(command);
        }
    }

    /// Append single command to the stream and get its id.
    pub fn add_one(&mut self, command: Command) -> CommandId {
        #[cfg(not(feature = "no-slow-safety-checks"))]
        for observation in command.observations() {
            replica_core::replica_slow_assert!(
                self.arena
                    .region(observation.region.block, observation.region.range)
                    .is_some(),
                "{} observes {} outside of staged memory",
                command,
                observation.region
            );
        }

        let id = self.commands.push(command);
        log::trace!("Append {}: {}", id, self.commands[id]);
        id
    }

    /// Id of the most recently appended command.
    ///
    /// # Panics
    ///
    /// Panics if no commands were appended yet.
    pub fn last(&self) -> CommandId {
        match self.try_last() {
            Some(id) => id,
            None => panic!("No commands were appended to the capture"),
        }
    }

    /// Id of the most recently appended command, if any.
    pub fn try_last(&self) -> Option<CommandId> {
        self.commands
            .len()
            .checked_sub(1)
            .map(CommandId::new)
    }

    /// Number of appended commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands were appended.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get appended command.
    pub fn command(&self, id: CommandId) -> Option<&Command> {
        self.commands.get(id)
    }

    /// Appended commands in stream order.
    pub fn commands(&self) -> impl Iterator<Item = (CommandId, &Command)> + '_ {
        self.commands.iter()
    }

    /// Stage raw bytes.
    pub fn data(&mut self, data: impl Into<Vec<u8>>) -> Result<Allocation, StagingError> {
        self.arena.stage(data)
    }

    /// Stage slice of elements.
    pub fn data_slice<T: Element>(&mut self, data: &[T]) -> Result<Allocation, StagingError> {
        self.arena.stage_slice(data)
    }

    /// Stage NUL-terminated string.
    pub fn data_str(&mut self, string: &str) -> Result<Allocation, StagingError> {
        self.arena.stage_str(string)
    }

    /// Memory staged so far.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Allocate new shader name.
    pub fn new_shader_id(&mut self) -> ShaderId {
        self.ids.allocate()
    }

    /// Allocate new program name.
    pub fn new_program_id(&mut self) -> ProgramId {
        self.ids.allocate()
    }

    /// Allocate new texture name.
    pub fn new_texture_id(&mut self) -> TextureId {
        self.ids.allocate()
    }

    /// Hand off the command stream together with the staged memory.
    pub fn finish(self) -> Capture {
        log::debug!(
            "Capture finished with {} commands and {} blocks ({} bytes)",
            self.commands.len(),
            self.arena.len(),
            self.arena.staged_bytes(),
        );
        Capture::new(self.commands, self.arena)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        replica_command::{GLenum, Opcode},
    };

    #[test]
    fn last_follows_add() {
        let mut builder = Builder::new();
        let cb = builder.cb();
        assert_eq!(builder.try_last(), None);

        builder.add(vec![cb.gl_enable(GLenum::GL_DEPTH_TEST)]);
        let first = builder.last();
        builder.add(vec![
            cb.gl_clear_color(0.0, 1.0, 0.0, 1.0),
            cb.gl_active_texture(GLenum::GL_TEXTURE0),
        ]);
        let third = builder.last();

        assert_ne!(first, third);
        assert_eq!(builder.len(), 3);
        assert_eq!(
            builder.command(third).map(Command::opcode),
            Some(Opcode::GlActiveTexture)
        );
        assert_eq!(builder.add_one(cb.gl_enable(GLenum::GL_DEPTH_TEST)), builder.last());
    }

    #[test]
    fn empty_add_keeps_last() {
        let mut builder = Builder::new();
        let cb = builder.cb();
        builder.add(vec![cb.gl_enable(GLenum::GL_DEPTH_TEST)]);
        let last = builder.last();
        builder.add(Vec::new());
        assert_eq!(builder.last(), last);
    }

    #[test]
    #[should_panic(expected = "No commands")]
    fn last_on_empty_stream() {
        Builder::new().last();
    }

    #[test]
    fn thread_from_config() {
        let builder = Builder::with_config(BuilderConfig {
            thread: 7,
            ..BuilderConfig::default()
        });
        assert_eq!(builder.cb().gl_enable(GLenum::GL_DEPTH_TEST).thread(), 7);
    }

    #[test]
    fn ids_per_kind() {
        let mut builder = Builder::new();
        assert_eq!(builder.new_shader_id(), ShaderId(1));
        assert_eq!(builder.new_shader_id(), ShaderId(2));
        assert_eq!(builder.new_program_id(), ProgramId(1));
        assert_eq!(builder.new_texture_id(), TextureId(1));
        assert_eq!(builder.new_shader_id(), ShaderId(3));
    }
}
