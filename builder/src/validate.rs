use {
    cranelift_entity::{PrimaryMap, SecondaryMap},
    failure::Fail,
    replica_command::{Command, CommandId},
    replica_memory::{Arena, BlockId, MemoryRange, Pointer, Region},
    smallvec::SmallVec,
};

/// Inconsistency between declared observations and the captured memory.
#[derive(Clone, Copy, Debug, Fail, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Observed block was never staged.
    #[fail(display = "{} observes {} of unknown block", command, region)]
    UnknownBlock {
        /// Observing command.
        command: CommandId,
        /// Observed region.
        region: Region,
    },

    /// Observed range exceeds the block.
    #[fail(
        display = "{} observes {} outside of the block range {}",
        command, region, block_range
    )]
    ObservationOutOfBounds {
        /// Observing command.
        command: CommandId,
        /// Observed region.
        region: Region,
        /// Range occupied by the block.
        block_range: MemoryRange,
    },

    /// Pointer argument into staged memory that no command observes
    /// at or after the command receiving it.
    #[fail(
        display = "{} receives {} = {} into {} that is never observed",
        command, parameter, ptr, block
    )]
    UnobservedPointer {
        /// Command receiving the pointer.
        command: CommandId,
        /// Parameter the pointer is passed as.
        parameter: &'static str,
        /// Pointer value.
        ptr: Pointer,
        /// Block the pointer refers to.
        block: BlockId,
    },
}

/// Client arrays are bound by one command and read by a later draw,
/// so pointers are checked against the last command observing the block.
pub(crate) fn validate(
    commands: &PrimaryMap<CommandId, Command>,
    memory: &Arena,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut last_observer: SecondaryMap<BlockId, Option<CommandId>> = SecondaryMap::new();

    for (id, command) in commands.iter() {
        for observation in command.observations() {
            let region = observation.region;
            match memory.block(region.block) {
                None => issues.push(ValidationIssue::UnknownBlock {
                    command: id,
                    region,
                }),
                Some(block) => {
                    if !block.range().contains_range(&region.range) {
                        issues.push(ValidationIssue::ObservationOutOfBounds {
                            command: id,
                            region,
                            block_range: block.range(),
                        });
                    }
                    last_observer[region.block] = Some(id);
                }
            }
        }
    }

    for (id, command) in commands.iter() {
        let unobserved: SmallVec<[_; 4]> = command
            .pointers()
            .filter(|&(_, ptr)| !ptr.is_null())
            .filter_map(|(index, ptr)| memory.block_at(ptr).map(|block| (index, ptr, block)))
            .filter(|&(_, _, block)| last_observer[block].map_or(true, |last| last < id))
            .collect();

        for (index, ptr, block) in unobserved {
            issues.push(ValidationIssue::UnobservedPointer {
                command: id,
                parameter: command.opcode().parameters().get(index).cloned().unwrap_or("?"),
                ptr,
                block,
            });
        }
    }

    for issue in &issues {
        log::warn!("Invalid capture: {}", issue);
    }
    issues
}
