use {
    crate::{
        access::{Access, Observation},
        error::ExtraError,
        extra::{Extra, ExtraKind},
        opcode::Opcode,
        value::Value,
    },
    cranelift_entity::entity_impl,
    replica_memory::{Pointer, Region},
    smallvec::SmallVec,
    std::fmt,
};

/// Position of a command in its capture stream.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandId(u32);
entity_impl!(CommandId, "cmd");

/// Record of one API invocation.
///
/// Arguments are fixed at construction.
/// Observations and extras are declared with the consuming `add_*` and `with_*`
/// methods before the command is appended to a stream. Once appended the stream
/// hands out shared references only.
///
/// Observations are advisory: they declare which memory replay has to provide
/// before the command (reads) and capture after it (writes).
/// A command can't know whether its declarations are complete,
/// that is the obligation of whoever constructs it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    opcode: Opcode,
    thread: u64,
    args: SmallVec<[Value; 6]>,
    observations: SmallVec<[Observation; 2]>,
    extras: SmallVec<[Extra; 1]>,
}

impl Command {
    /// Create command without observations or extras.
    pub fn new(opcode: Opcode, thread: u64, args: impl IntoIterator<Item = Value>) -> Self {
        let args: SmallVec<[Value; 6]> = args.into_iter().collect();
        replica_core::replica_slow_assert_eq!(
            args.len(),
            opcode.parameters().len(),
            "Wrong number of arguments for {}",
            opcode
        );
        Command {
            opcode,
            thread,
            args,
            observations: SmallVec::new(),
            extras: SmallVec::new(),
        }
    }

    /// Identity of the invoked function.
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Thread the command was issued on.
    pub fn thread(&self) -> u64 {
        self.thread
    }

    /// Argument values in parameter order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Argument value for parameter `name`.
    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.opcode
            .parameters()
            .iter()
            .position(|&param| param == name)
            .and_then(|index| self.args.get(index))
    }

    /// Pointer arguments with their argument index.
    pub fn pointers(&self) -> impl Iterator<Item = (usize, Pointer)> + '_ {
        self.args
            .iter()
            .enumerate()
            .filter_map(|(index, value)| value.as_pointer().map(|ptr| (index, ptr)))
    }

    /// Declared observations in declaration order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Regions the command reads.
    pub fn reads(&self) -> impl Iterator<Item = Region> + '_ {
        self.observations
            .iter()
            .filter(|o| o.access.is_read())
            .map(|o| o.region)
    }

    /// Regions the command writes.
    pub fn writes(&self) -> impl Iterator<Item = Region> + '_ {
        self.observations
            .iter()
            .filter(|o| o.access.is_write())
            .map(|o| o.region)
    }

    /// Declare that the command accesses `region`.
    /// Declaring the same region again merges the accesses.
    pub fn add_observation(mut self, region: Region, access: Access) -> Self {
        match self.observations.iter_mut().find(|o| o.region == region) {
            Some(observation) => observation.access |= access,
            None => self.observations.push(Observation { region, access }),
        }
        self
    }

    /// Declare that the command reads `region`.
    pub fn add_read(self, region: Region) -> Self {
        self.add_observation(region, Access::READ)
    }

    /// Declare that the command writes `region`.
    pub fn add_write(self, region: Region) -> Self {
        self.add_observation(region, Access::WRITE)
    }

    /// Attached extras in attachment order.
    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    /// Get extra of the given kind.
    pub fn extra(&self, kind: ExtraKind) -> Option<&Extra> {
        self.extras.iter().find(|extra| extra.kind() == kind)
    }

    /// Attach extra to the command.
    /// Fails if an extra of the same kind is already attached.
    pub fn try_with_extra(mut self, extra: impl Into<Extra>) -> Result<Self, ExtraError> {
        let extra = extra.into();
        let kind = extra.kind();
        if self.extra(kind).is_some() {
            return Err(ExtraError::AlreadyAttached(kind));
        }
        log::trace!("Attach {:?} extra to {}", kind, self.opcode);
        self.extras.push(extra);
        Ok(self)
    }

    /// Attach extra to the command.
    ///
    /// # Panics
    ///
    /// Panics if an extra of the same kind is already attached.
    pub fn with_extra(self, extra: impl Into<Extra>) -> Self {
        let opcode = self.opcode;
        match self.try_with_extra(extra) {
            Ok(command) => command,
            Err(error) => panic!("Failed to attach extra to {}: {}", opcode, error),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}(", self.opcode)?;
        for (index, (param, value)) in self.opcode.parameters().iter().zip(&self.args).enumerate() {
            if index > 0 {
                fmt.write_str(", ")?;
            }
            write!(fmt, "{}: {}", param, value)?;
        }
        fmt.write_str(")")
    }
}
