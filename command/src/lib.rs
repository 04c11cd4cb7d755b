//! Captured command model.
//!
//! A `Command` records one API invocation: its opcode, argument values,
//! the memory it reads and writes and any extras holding derived results.
//! Commands are constructed through `gles::CommandBuilder` and sequenced by
//! the capture builder.

#![warn(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]

mod access;
mod command;
mod error;
mod extra;
pub mod gles;
mod opcode;
mod value;

pub use crate::{
    access::{Access, Observation},
    command::{Command, CommandId},
    error::ExtraError,
    extra::{
        ActiveProgramResources, CompileShaderExtra, DynamicContextState, Extra, ExtraKind,
        LinkProgramExtra, ProgramResource, StaticContextState,
    },
    opcode::{Api, Opcode},
    value::{GLbitfield, GLenum, Value},
};
