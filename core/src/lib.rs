//! Crate that contains types shared by other replica crates.

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

pub use crate::{attachment::*, casts::*, id::*};

mod attachment;
mod casts;
mod id;
mod slow;
