use {crate::extra::ExtraKind, failure::Fail};

/// Error returned when attaching an extra to a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Fail)]
pub enum ExtraError {
    /// Command already carries an extra of this kind.
    /// Extras are never merged or replaced.
    #[fail(display = "Command already carries {:?} extra", _0)]
    AlreadyAttached(ExtraKind),
}
