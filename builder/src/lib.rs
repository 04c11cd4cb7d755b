//! Procedural construction of GLES captures.
//!
//! `Builder` sequences commands created by `gles::CommandBuilder`, stages the
//! constant data they reference and issues GL object names. When done the
//! stream and its memory are handed off as a `Capture`.
//!
//! Common call sequences are available in `snippets`.

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

mod builder;
mod capture;
mod config;
mod error;
pub mod snippets;
mod validate;

#[cfg(test)]
mod test;

pub use crate::{
    builder::Builder,
    capture::Capture,
    config::BuilderConfig,
    error::CaptureError,
    validate::ValidationIssue,
};

pub use {replica_command::gles::CommandBuilder, replica_core::ResourceKind};
