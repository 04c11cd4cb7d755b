//! Capture memory management.
//!
//! Constant data referenced by captured commands is staged into an `Arena`.
//! Every staging call produces a new immutable `MemoryBlock` placed at a unique
//! address of the capture's virtual address space.

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

mod arena;
mod block;
mod error;
mod range;
mod util;


pub use crate::{
    arena::{Allocation, Arena, ArenaConfig},
    block::{BlockId, MemoryBlock},
    error::StagingError,
    range::{MemoryRange, Pointer, Region},
};
