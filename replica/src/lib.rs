//! Replica's top level crate.
//! Reexports all others.

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

#[doc(inline)]
pub use replica_core as core;

#[cfg(feature = "memory")]
#[doc(inline)]
pub use replica_memory as memory;

#[cfg(feature = "command")]
#[doc(inline)]
pub use replica_command as command;

#[cfg(feature = "builder")]
#[doc(inline)]
pub use replica_builder as builder;

#[cfg(feature = "builder")]
pub use replica_builder::{snippets, Builder, BuilderConfig, Capture};
